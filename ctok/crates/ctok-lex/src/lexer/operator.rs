//! Operator and punctuation lexing.
//!
//! Punctuation is matched against a fixed table ordered longest first, so
//! the first hit at the cursor is the longest one (`>>=` before `>>`
//! before `>`).

use crate::Lexer;

/// Every punctuation lexeme, longest first.
pub const PUNCTUATION: &[&str] = &[
    // Three characters
    ">>=", "<<=", "...",
    // Two characters
    "++", "--", ">=", "<=", ">>", "<<", "&&", "||", "!=", "==", "+=", "-=", "*=", "/=", "%=",
    "&=", "|=", "^=", "->", "::", "##",
    // One character
    "+", "-", "*", "/", "%", ">", "<", "!", "=", "&", "|", "^", "~", "(", ")", "[", "]", "{",
    "}", ";", ",", ".", "#", "\\", "?", ":",
];

/// Returns the longest punctuation lexeme that `input` starts with.
///
/// # Example
///
/// ```
/// use ctok_lex::lexer::match_punctuation;
///
/// assert_eq!(match_punctuation(">>= 1"), Some(">>="));
/// assert_eq!(match_punctuation("::x"), Some("::"));
/// assert_eq!(match_punctuation("abc"), None);
/// ```
pub fn match_punctuation(input: &str) -> Option<&'static str> {
    PUNCTUATION.iter().copied().find(|op| input.starts_with(op))
}

impl<'a> Lexer<'a> {
    /// Consumes the longest punctuation lexeme at the cursor.
    ///
    /// Returns false, consuming nothing, if no lexeme matches.
    pub(super) fn lex_punctuation(&mut self) -> bool {
        match match_punctuation(self.cursor.remaining()) {
            Some(op) => {
                self.cursor.advance_n(op.len());
                true
            },
            None => false,
        }
    }
}
