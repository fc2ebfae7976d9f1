//! String and character literal scanning.
//!
//! Escapes are only recognized to find the closing quote. The lexeme keeps
//! them verbatim; nothing is decoded.

use memchr::memchr2;

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Consumes a literal delimited by `quote` (`"` or `'`).
    ///
    /// A backslash escapes whatever byte follows it, so `\"` does not close
    /// a string and `\\` is a complete escape pair. Returns false if the
    /// input ended before the closing quote; the literal then runs to the
    /// end of input.
    pub(super) fn lex_quoted(&mut self, quote: u8) -> bool {
        let start = self.cursor.position();
        let bytes = self.cursor.remaining().as_bytes();

        // Skip the opening quote
        let mut i = 1;
        while i < bytes.len() {
            match memchr2(b'\\', quote, &bytes[i..]) {
                Some(found) if bytes[i + found] == b'\\' => i += found + 2,
                Some(found) => {
                    self.cursor.advance_to(start + i + found + 1);
                    return true;
                },
                None => break,
            }
        }

        self.cursor.advance_to(self.cursor.source().len());
        false
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lexer, Token, TokenKind};
    use pretty_assertions::assert_eq;

    fn lexemes(source: &str) -> Vec<&str> {
        Lexer::new(source).map(|t| t.lexeme).collect()
    }

    fn lex_one(source: &str) -> Token<'_> {
        Lexer::new(source).next_token().unwrap()
    }

    #[test]
    fn test_basic_string() {
        let token = lex_one("\"Test\"");
        assert_eq!(token.kind, TokenKind::String);
        assert_eq!(token.lexeme, "\"Test\"");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(lexemes("\"\""), vec!["\"\""]);
        assert_eq!(lexemes("\"\"x"), vec!["\"\"", "x"]);
    }

    #[test]
    fn test_string_escape_double() {
        assert_eq!(lexemes(r#"x = "Te\"st""#), vec!["x", "=", r#""Te\"st""#]);
    }

    #[test]
    fn test_string_escape_slash() {
        assert_eq!(
            lexemes(r#""Test\\" == test"#),
            vec![r#""Test\\""#, "==", "test"]
        );
    }

    #[test]
    fn test_string_keeps_comment_markers() {
        assert_eq!(lexemes(r#""/* not */ // a comment""#), vec![r#""/* not */ // a comment""#]);
    }

    #[test]
    fn test_string_spans_newline() {
        assert_eq!(lexemes("\"a\nb\" c"), vec!["\"a\nb\"", "c"]);
    }

    #[test]
    fn test_unterminated_string() {
        let token = lex_one("\"abc");
        assert_eq!(token.lexeme, "\"abc");
        assert!(token.is_unterminated());
    }

    #[test]
    fn test_unterminated_after_escape() {
        assert_eq!(lex_one("\"abc\\").lexeme, "\"abc\\");
        assert_eq!(lex_one("\"abc\\\"").lexeme, "\"abc\\\"");
        assert_eq!(lex_one("\"").lexeme, "\"");
    }

    #[test]
    fn test_escape_before_multibyte() {
        assert_eq!(lexemes("\"\\é\" x"), vec!["\"\\é\"", "x"]);
    }

    #[test]
    fn test_char_literals() {
        let token = lex_one("'a'");
        assert_eq!(token.kind, TokenKind::Char);
        assert_eq!(token.lexeme, "'a'");
        assert_eq!(lexemes(r"'\'' '\\' '\n'"), vec![r"'\''", r"'\\'", r"'\n'"]);
    }

    #[test]
    fn test_char_does_not_close_on_double_quote() {
        assert_eq!(lexemes("'\"' x"), vec!["'\"'", "x"]);
    }

    #[test]
    fn test_wide_string_prefix() {
        let tokens: Vec<(TokenKind, &str)> =
            Lexer::new("L\"wide\"").map(|t| (t.kind, t.lexeme)).collect();
        assert_eq!(
            tokens,
            vec![(TokenKind::Identifier, "L"), (TokenKind::String, "\"wide\"")]
        );
    }
}
