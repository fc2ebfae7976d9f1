//! Token definitions.
//!
//! A [`Token`] is a `(kind, span, lexeme)` triple. The lexeme always
//! borrows the exact bytes of the input, delimiters included; nothing is
//! unescaped or normalized.

use std::fmt;

use ctok_util::Span;

/// Category of a lexical token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Double-quoted string literal, quotes included: `"a\"b"`
    String,
    /// Single-quoted character literal, quotes included: `'\n'`
    Char,
    /// `//` comment up to (not including) the line feed
    LineComment,
    /// `/* ... */` comment, markers included
    BlockComment,
    /// Numeric literal with any base prefix and suffix: `0x1F`, `.5f`, `10UL`
    Number,
    /// Operator or delimiter from the fixed punctuation table
    Punctuation,
    /// Identifier or other bare word: `x`, `main`, `__stdcall`
    Identifier,
    /// Run of whitespace; only produced when whitespace is kept
    Whitespace,
    /// A single character that fits no other category
    Unknown,
}

impl TokenKind {
    /// Returns a short lowercase name for the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::String => "string",
            TokenKind::Char => "char",
            TokenKind::LineComment => "line_comment",
            TokenKind::BlockComment => "block_comment",
            TokenKind::Number => "number",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Identifier => "identifier",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Unknown => "unknown",
        }
    }

    /// Returns true for line and block comments.
    pub fn is_comment(&self) -> bool {
        matches!(self, TokenKind::LineComment | TokenKind::BlockComment)
    }

    /// Returns true for kinds that carry no code: comments and whitespace.
    pub fn is_trivia(&self) -> bool {
        self.is_comment() || *self == TokenKind::Whitespace
    }

    /// Returns true for string, character and numeric literals.
    pub fn is_literal(&self) -> bool {
        matches!(self, TokenKind::String | TokenKind::Char | TokenKind::Number)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One lexical unit of source text.
///
/// # Example
///
/// ```
/// use ctok_lex::{tokenize, TokenKind};
///
/// let token = tokenize("  \"Te\\\"st\"").next().unwrap();
/// assert_eq!(token.kind, TokenKind::String);
/// assert_eq!(token.lexeme, "\"Te\\\"st\"");
/// assert_eq!(token.span.start, 2);
/// assert_eq!(token.span.column, 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    /// Token category.
    pub kind: TokenKind,
    /// Location of the lexeme in the source buffer.
    pub span: Span,
    /// Verbatim source text covered by `span`.
    pub lexeme: &'a str,
}

impl<'a> Token<'a> {
    /// Creates a token.
    pub fn new(kind: TokenKind, span: Span, lexeme: &'a str) -> Self {
        Self { kind, span, lexeme }
    }

    /// Returns true if this is punctuation spelled exactly `op`.
    ///
    /// # Example
    ///
    /// ```
    /// use ctok_lex::tokenize;
    ///
    /// let token = tokenize(">>=").next().unwrap();
    /// assert!(token.is_punct(">>="));
    /// assert!(!token.is_punct(">>"));
    /// ```
    pub fn is_punct(&self, op: &str) -> bool {
        self.kind == TokenKind::Punctuation && self.lexeme == op
    }

    /// Returns true if a string, char literal or block comment reached the
    /// end of input before its closing delimiter.
    pub fn is_unterminated(&self) -> bool {
        match self.kind {
            TokenKind::String => !is_closed_quote(self.lexeme, b'"'),
            TokenKind::Char => !is_closed_quote(self.lexeme, b'\''),
            TokenKind::BlockComment => self.lexeme.len() < 4 || !self.lexeme.ends_with("*/"),
            _ => false,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {} {:?}",
            self.span.line, self.span.column, self.kind, self.lexeme
        )
    }
}

/// A quoted lexeme is closed when it has a second delimiter that is not
/// preceded by an odd run of backslashes.
fn is_closed_quote(lexeme: &str, quote: u8) -> bool {
    let bytes = lexeme.as_bytes();
    if bytes.len() < 2 || bytes[bytes.len() - 1] != quote {
        return false;
    }
    let slashes = bytes[1..bytes.len() - 1]
        .iter()
        .rev()
        .take_while(|&&b| b == b'\\')
        .count();
    slashes % 2 == 0
}
