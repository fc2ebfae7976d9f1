//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while walking a source buffer. Lookahead is byte oriented because every
//! lexeme the scanner dispatches on is ASCII, but advancing always lands on
//! a UTF-8 boundary and keeps line/column information exact.

use memchr::{memchr_iter, memrchr};

/// A cursor over a source buffer.
///
/// The cursor never panics: reading past the end yields `None` (or `'\0'`
/// for [`Cursor::current_char`]) and advancing past the end is a no-op.
///
/// # Example
///
/// ```
/// use ctok_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("int x;");
/// assert_eq!(cursor.current_byte(), Some(b'i'));
/// cursor.advance();
/// assert_eq!(cursor.current_byte(), Some(b'n'));
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the byte at the cursor, or `None` at end of input.
    ///
    /// For non-ASCII characters this is the UTF-8 lead byte.
    #[inline]
    pub fn current_byte(&self) -> Option<u8> {
        self.peek_byte(0)
    }

    /// Returns the byte `offset` bytes ahead of the cursor.
    ///
    /// # Example
    ///
    /// ```
    /// use ctok_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new(">>=");
    /// assert_eq!(cursor.peek_byte(2), Some(b'='));
    /// assert_eq!(cursor.peek_byte(3), None);
    /// ```
    #[inline]
    pub fn peek_byte(&self, offset: usize) -> Option<u8> {
        self.source.as_bytes().get(self.position + offset).copied()
    }

    /// Returns the character at the cursor, or `'\0'` at end of input.
    #[inline]
    pub fn current_char(&self) -> char {
        // Fast path for ASCII (most common case)
        match self.current_byte() {
            None => '\0',
            Some(b) if b < 128 => b as char,
            Some(_) => self.remaining().chars().next().unwrap_or('\0'),
        }
    }

    /// Advances the cursor by one character.
    ///
    /// Updates line and column tracking. Does nothing if already at end.
    #[inline]
    pub fn advance(&mut self) {
        let Some(b) = self.current_byte() else {
            return;
        };

        if b < 128 {
            self.position += 1;
            if b == b'\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            return;
        }

        // Slow path for UTF-8 multi-byte characters
        if let Some(c) = self.remaining().chars().next() {
            self.position += c.len_utf8();
            self.column += 1;
        }
    }

    /// Advances the cursor by up to `count` characters.
    ///
    /// # Example
    ///
    /// ```
    /// use ctok_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("abc");
    /// cursor.advance_n(10);
    /// assert!(cursor.is_at_end());
    /// ```
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Moves the cursor forward to byte offset `target`.
    ///
    /// `target` is clamped to the end of the source and rounded up to the
    /// next character boundary. Line and column are recomputed from the
    /// skipped text, so this is the way to jump over a region found with a
    /// byte search.
    pub fn advance_to(&mut self, target: usize) {
        let mut target = target.min(self.source.len());
        while !self.source.is_char_boundary(target) {
            target += 1;
        }
        if target <= self.position {
            return;
        }

        let skipped = &self.source[self.position..target];
        let newlines = memchr_iter(b'\n', skipped.as_bytes()).count();
        match memrchr(b'\n', skipped.as_bytes()) {
            Some(last) => {
                self.line += newlines as u32;
                self.column = skipped[last + 1..].chars().count() as u32 + 1;
            },
            None => {
                self.column += skipped.chars().count() as u32;
            },
        }

        self.position = target;
    }

    /// Consumes characters while `predicate` holds.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    ///
    /// # Example
    ///
    /// ```
    /// use ctok_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\nb");
    /// cursor.advance_n(2);
    /// assert_eq!(cursor.line(), 2);
    /// ```
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns a slice of the source from `start` to the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use ctok_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("char *p");
    /// let start = cursor.position();
    /// cursor.advance_n(4);
    /// assert_eq!(cursor.slice_from(start), "char");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
