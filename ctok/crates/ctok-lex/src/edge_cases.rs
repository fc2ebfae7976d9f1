//! Edge case tests for ctok-lex

#[cfg(test)]
mod tests {
    use crate::{Lexer, LexerConfig, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token<'_>> {
        Lexer::new(source).collect()
    }

    fn lexemes(source: &str) -> Vec<&str> {
        lex_all(source).into_iter().map(|t| t.lexeme).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let source = format!("int {} = 1;", name);
        let t = lex_all(&source);
        assert_eq!(t[1].lexeme, name);
    }

    #[test]
    fn test_edge_long_comment() {
        let source = format!("/*{}*/", "*".repeat(5000));
        assert_eq!(lexemes(&source), vec![source.as_str()]);
    }

    #[test]
    fn test_edge_star_runs_in_comment() {
        assert_eq!(lexemes("/***/"), vec!["/***/"]);
        assert_eq!(lexemes("/*** x **/"), vec!["/*** x **/"]);
    }

    #[test]
    fn test_edge_lone_prefixes_at_end() {
        assert_eq!(lexemes("/"), vec!["/"]);
        assert_eq!(lexemes("."), vec!["."]);
        assert_eq!(lexemes("-"), vec!["-"]);
        assert_eq!(lexemes("\\"), vec!["\\"]);
        assert_eq!(lexemes("\""), vec!["\""]);
        assert_eq!(lexemes("'"), vec!["'"]);
    }

    #[test]
    fn test_edge_string_then_comment() {
        assert_eq!(lexemes("\"a\"//b"), vec!["\"a\"", "//b"]);
    }

    #[test]
    fn test_edge_adjacent_strings() {
        assert_eq!(lexemes("\"a\"\"b\""), vec!["\"a\"", "\"b\""]);
    }

    #[test]
    fn test_edge_many_backslashes() {
        // Three escape pairs then a closing quote
        assert_eq!(lexemes(r#""\\\\\\" x"#), vec![r#""\\\\\\""#, "x"]);
        // Odd count escapes the quote, string runs on
        assert_eq!(lexemes(r#""\\\" x"#), vec![r#""\\\" x"#]);
    }

    #[test]
    fn test_edge_nul_and_del_bytes() {
        let t = lex_all("a\0\x7fb");
        let kinds: Vec<TokenKind> = t.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Unknown,
                TokenKind::Unknown,
                TokenKind::Identifier
            ]
        );
    }

    #[test]
    fn test_edge_multibyte_after_backslash_punct() {
        assert_eq!(lexemes("\\é"), vec!["\\", "é"]);
    }

    #[test]
    fn test_edge_emoji_identifier() {
        assert_eq!(lexemes("x😀y+1"), vec!["x😀y", "+", "1"]);
    }

    #[test]
    fn test_edge_dot_number_after_operator() {
        assert_eq!(lexemes("a+.5"), vec!["a", "+", ".5"]);
    }

    #[test]
    fn test_edge_ellipsis_not_number() {
        assert_eq!(lexemes("f(...)"), vec!["f", "(", "...", ")"]);
    }

    #[test]
    fn test_edge_crlf_positions() {
        let t = lex_all("a\r\nb");
        assert_eq!(t[1].span.line, 2);
        assert_eq!(t[1].span.column, 1);
    }

    #[test]
    fn test_edge_keep_whitespace_trailing() {
        let config = LexerConfig::default().keep_whitespace(true);
        let t: Vec<Token> = Lexer::with_config("x  ", config).collect();
        assert_eq!(t.len(), 2);
        assert_eq!(t[1].kind, TokenKind::Whitespace);
        assert_eq!(t[1].lexeme, "  ");
    }

    #[test]
    fn test_edge_skip_comments_keep_whitespace() {
        let config = LexerConfig::default()
            .keep_whitespace(true)
            .keep_comments(false);
        let kinds: Vec<TokenKind> = Lexer::with_config("a /* c */ b", config)
            .map(|t| t.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Whitespace,
                TokenKind::Whitespace,
                TokenKind::Identifier
            ]
        );
    }
}
