//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch loop.

use ctok_util::Span;
use tracing::{debug, trace};

use crate::chars::{is_digit, is_ident_start, is_whitespace};
use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Tokenizer for C/C++ family source text.
///
/// The lexer is a lazy iterator: each call to [`Lexer::next_token`] (or
/// [`Iterator::next`]) scans exactly one token from the cursor position.
/// Dropping the lexer early never scans the rest of the buffer.
///
/// Scanning is total. Malformed input degrades to coarser tokens, and
/// unterminated strings and comments end at end of input.
///
/// # Example
///
/// ```
/// use ctok_lex::{Lexer, TokenKind};
///
/// let lexemes: Vec<&str> = Lexer::new("x >>= 0x1F; // shift")
///     .map(|t| t.lexeme)
///     .collect();
/// assert_eq!(lexemes, ["x", ">>=", "0x1F", ";", "// shift"]);
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Which trivia gets emitted.
    config: LexerConfig,

    /// Starting position of the current token (byte offset).
    token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer with the default configuration.
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    /// Creates a new lexer with an explicit configuration.
    pub fn with_config(source: &'a str, config: LexerConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            config,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Returns the next token, or `None` once the input is exhausted.
    ///
    /// Whitespace (and comments, if so configured) is consumed silently
    /// between tokens.
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        loop {
            self.begin_token();
            let current = self.cursor.current_byte()?;

            let kind = match current {
                b if is_whitespace(b) => {
                    self.lex_whitespace();
                    if !self.config.keep_whitespace {
                        continue;
                    }
                    TokenKind::Whitespace
                },
                b'/' if self.cursor.peek_byte(1) == Some(b'/') => {
                    self.lex_line_comment();
                    if !self.config.keep_comments {
                        continue;
                    }
                    TokenKind::LineComment
                },
                b'/' if self.cursor.peek_byte(1) == Some(b'*') => {
                    if !self.lex_block_comment() {
                        self.report_unterminated("block comment");
                    }
                    if !self.config.keep_comments {
                        continue;
                    }
                    TokenKind::BlockComment
                },
                b'"' => {
                    if !self.lex_quoted(b'"') {
                        self.report_unterminated("string literal");
                    }
                    TokenKind::String
                },
                b'\'' => {
                    if !self.lex_quoted(b'\'') {
                        self.report_unterminated("character literal");
                    }
                    TokenKind::Char
                },
                b'0'..=b'9' => {
                    self.lex_number();
                    TokenKind::Number
                },
                b'.' if is_digit(self.cursor.peek_byte(1)) => {
                    self.lex_number();
                    TokenKind::Number
                },
                _ => self.lex_other(),
            };

            return Some(self.finish(kind));
        }
    }

    /// Punctuation, identifiers, and the single-character fallback.
    fn lex_other(&mut self) -> TokenKind {
        if self.lex_punctuation() {
            return TokenKind::Punctuation;
        }

        if is_ident_start(self.cursor.current_char()) {
            self.lex_identifier();
            return TokenKind::Identifier;
        }

        self.cursor.advance();
        TokenKind::Unknown
    }

    fn begin_token(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    fn finish(&self, kind: TokenKind) -> Token<'a> {
        let span = Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        );
        trace!(%kind, start = span.start, end = span.end, "token");
        Token::new(kind, span, self.cursor.slice_from(self.token_start))
    }

    fn report_unterminated(&self, what: &str) {
        debug!(
            line = self.token_start_line,
            column = self.token_start_column,
            "unterminated {} runs to end of input",
            what
        );
    }

    /// Returns the current line number (1-based).
    ///
    /// # Returns
    /// The line of the next character to be scanned.
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the configuration this lexer was built with.
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Returns true once the cursor has reached the end of input.
    ///
    /// Trailing whitespace is only consumed by the next call to
    /// [`Lexer::next_token`], so this can be false even when no further
    /// token will be produced.
    pub fn is_finished(&self) -> bool {
        self.cursor.is_at_end()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}
