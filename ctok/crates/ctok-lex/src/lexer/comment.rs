//! Comment and whitespace scanning.
//!
//! Comments are never nested in C: a block comment ends at the first `*/`
//! after its opener, and a line comment ends before the line feed.

use memchr::{memchr, memmem};

use crate::chars::is_whitespace;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Consumes a run of whitespace.
    pub(super) fn lex_whitespace(&mut self) {
        let rest = self.cursor.remaining().as_bytes();
        let len = rest.iter().take_while(|&&b| is_whitespace(b)).count();
        self.cursor.advance_to(self.cursor.position() + len);
    }

    /// Consumes a `//` comment up to, but not including, the line feed.
    ///
    /// A carriage return directly before the line feed is left out too, so
    /// CRLF sources give the same lexeme as LF sources.
    pub(super) fn lex_line_comment(&mut self) {
        let rest = self.cursor.remaining().as_bytes();
        let end = match memchr(b'\n', rest) {
            Some(lf) if rest[lf - 1] == b'\r' => lf - 1,
            Some(lf) => lf,
            None => rest.len(),
        };
        self.cursor.advance_to(self.cursor.position() + end);
    }

    /// Consumes a `/* ... */` comment including both markers.
    ///
    /// The search for `*/` starts after the opener, so `/*/` does not close
    /// itself. Returns false if the input ended first.
    pub(super) fn lex_block_comment(&mut self) -> bool {
        let start = self.cursor.position();
        let body = &self.cursor.remaining().as_bytes()[2..];

        match memmem::find(body, b"*/") {
            Some(close) => {
                self.cursor.advance_to(start + 2 + close + 2);
                true
            },
            None => {
                self.cursor.advance_to(self.cursor.source().len());
                false
            },
        }
    }
}
