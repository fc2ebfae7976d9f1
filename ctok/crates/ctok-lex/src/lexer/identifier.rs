//! Identifier lexing.
//!
//! Keywords are not distinguished from other identifiers; `int`, `return`
//! and `__declspec` all come out as [`TokenKind::Identifier`](crate::TokenKind::Identifier).

use crate::chars::is_ident_continue;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Consumes an identifier: letters, digits, `_` and non-ASCII
    /// characters, up to the next delimiter.
    pub(super) fn lex_identifier(&mut self) {
        self.cursor.eat_while(is_ident_continue);
    }
}
