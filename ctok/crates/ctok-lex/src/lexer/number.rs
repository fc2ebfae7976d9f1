//! Numeric literal scanning.
//!
//! The literal is delimited, not evaluated: callers that need the base or
//! the suffix inspect the lexeme.

use crate::chars::{is_digit, is_digit_in_base};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Consumes a numeric literal.
    ///
    /// # Number Formats
    ///
    /// - Decimal: `0`, `42`, `1.0`, `.5`, `1.`, `1e10`, `2.5e-3`
    /// - Hexadecimal: `0x1234`, `0xdeadbeef`, `0XABCD`
    /// - Binary: `0b1101`
    /// - Octal: `0o777` (and C style `0777`, scanned as decimal digits)
    /// - Float suffix: `f`, `F`, `d`, `D` (and `l`, `L` after a fraction or exponent)
    /// - Integer suffix: up to three of `u`, `U`, `l`, `L` (`10u`, `10UL`, `10ull`)
    ///
    /// Must be called at a digit or at a `.` followed by a digit.
    pub(super) fn lex_number(&mut self) {
        if self.cursor.current_byte() == Some(b'0') {
            let base = match self.cursor.peek_byte(1) {
                Some(b'x' | b'X') => Some(16),
                Some(b'b' | b'B') => Some(2),
                Some(b'o' | b'O') => Some(8),
                _ => None,
            };
            if let Some(base) = base {
                self.cursor.advance_n(2);
                self.eat_digits(base);
                self.eat_integer_suffix();
                return;
            }
        }

        self.eat_digits(10);
        let mut is_float = false;

        // Fraction. A literal that starts with '.' takes it here; `1.` is
        // accepted but `1..` is left for the punctuation scanner.
        if self.cursor.current_byte() == Some(b'.') && self.cursor.peek_byte(1) != Some(b'.') {
            self.cursor.advance();
            self.eat_digits(10);
            is_float = true;
        }

        if self.at_exponent() {
            self.cursor.advance();
            if matches!(self.cursor.current_byte(), Some(b'+' | b'-')) {
                self.cursor.advance();
            }
            self.eat_digits(10);
            is_float = true;
        }

        match self.cursor.current_byte() {
            Some(b'f' | b'F' | b'd' | b'D') => self.cursor.advance(),
            Some(b'l' | b'L') if is_float => self.cursor.advance(),
            _ if !is_float => self.eat_integer_suffix(),
            _ => {},
        }
    }

    fn eat_digits(&mut self, base: u32) {
        while matches!(self.cursor.current_byte(), Some(b) if is_digit_in_base(b, base)) {
            self.cursor.advance();
        }
    }

    /// `e` or `E` followed by digits, optionally signed.
    fn at_exponent(&self) -> bool {
        if !matches!(self.cursor.current_byte(), Some(b'e' | b'E')) {
            return false;
        }
        match self.cursor.peek_byte(1) {
            Some(b'+' | b'-') => is_digit(self.cursor.peek_byte(2)),
            next => is_digit(next),
        }
    }

    fn eat_integer_suffix(&mut self) {
        for _ in 0..3 {
            if !matches!(self.cursor.current_byte(), Some(b'u' | b'U' | b'l' | b'L')) {
                break;
            }
            self.cursor.advance();
        }
    }
}
