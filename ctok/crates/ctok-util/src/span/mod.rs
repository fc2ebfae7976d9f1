//! Span module - Source location tracking.
//!
//! A [`Span`] identifies the exact substring of a source buffer that a
//! token covers: a half-open byte range plus the human-readable line and
//! column of its first character.
//!
//! # Examples
//!
//! ```
//! use ctok_util::span::Span;
//!
//! let span = Span::new(10, 20, 1, 11);
//! assert_eq!(span.len(), 10);
//! ```

use std::ops::Range;

/// Source location span
///
/// `start` and `end` are byte offsets into the original buffer (`end` is
/// exclusive). `line` and `column` are 1-based and describe `start`;
/// columns are counted in characters, not bytes.
///
/// # Examples
///
/// ```
/// use ctok_util::span::Span;
///
/// let span = Span::new(0, 6, 1, 1);
/// assert_eq!(span.slice("\"Test\" == x"), "\"Test\"");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use ctok_util::span::Span;
    ///
    /// assert!(Span::DUMMY.is_empty());
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset (exclusive)
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    ///
    /// # Examples
    ///
    /// ```
    /// use ctok_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 5);
    /// assert_eq!(span.start, 10);
    /// assert_eq!(span.end, 20);
    /// ```
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        debug_assert!(start <= end, "span start {} after end {}", start, end);
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    ///
    /// # Examples
    ///
    /// ```
    /// use ctok_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 5);
    /// assert_eq!(span.len(), 10);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if this span contains a byte offset
    ///
    /// # Examples
    ///
    /// ```
    /// use ctok_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 5);
    /// assert!(span.contains(15));
    /// assert!(!span.contains(20));
    /// ```
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Merge two spans into a single span covering both
    ///
    /// The line and column are taken from whichever span starts first.
    ///
    /// # Examples
    ///
    /// ```
    /// use ctok_util::span::Span;
    ///
    /// let a = Span::new(10, 20, 2, 3);
    /// let b = Span::new(25, 35, 3, 1);
    /// let merged = a.merge(b);
    /// assert_eq!((merged.start, merged.end), (10, 35));
    /// assert_eq!((merged.line, merged.column), (2, 3));
    /// ```
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        let first = if other.start < self.start { other } else { self };
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line: first.line,
            column: first.column,
        }
    }

    /// Byte range of the span, suitable for slicing
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns the text this span covers in `source`.
    ///
    /// Returns an empty string if the span does not fall on valid
    /// boundaries of `source`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ctok_util::span::Span;
    ///
    /// let span = Span::new(4, 5, 1, 5);
    /// assert_eq!(span.slice("int x;"), "x");
    /// assert_eq!(span.slice("int"), "");
    /// ```
    #[inline]
    pub fn slice<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.range()).unwrap_or("")
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.range()
    }
}
