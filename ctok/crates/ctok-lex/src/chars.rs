//! Character classes used by the scanner.
//!
//! Classification is ASCII based. Any non-ASCII character is treated as an
//! identifier character so that UTF-8 text in identifiers and macros stays
//! in one token instead of splitting into `Unknown` pieces.

/// Checks if a byte is whitespace that separates tokens.
///
/// Space, horizontal tab, line feed, carriage return, vertical tab and
/// form feed.
///
/// # Example
///
/// ```
/// use ctok_lex::chars::is_whitespace;
///
/// assert!(is_whitespace(b'\t'));
/// assert!(is_whitespace(0x0c));
/// assert!(!is_whitespace(b'_'));
/// ```
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Checks if a character can start an identifier.
///
/// # Example
///
/// ```
/// use ctok_lex::chars::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('é'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('$'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

/// Checks if a character can continue an identifier.
///
/// # Example
///
/// ```
/// use ctok_lex::chars::is_ident_continue;
///
/// assert!(is_ident_continue('1'));
/// assert!(!is_ident_continue('.'));
/// ```
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}

/// Checks if a byte is a digit in the given base.
///
/// # Arguments
///
/// * `b` - The byte to check
/// * `base` - The numeric base (2, 8, 10, or 16)
///
/// # Example
///
/// ```
/// use ctok_lex::chars::is_digit_in_base;
///
/// assert!(is_digit_in_base(b'1', 2));
/// assert!(!is_digit_in_base(b'2', 2));
/// assert!(is_digit_in_base(b'7', 8));
/// assert!(!is_digit_in_base(b'8', 8));
/// assert!(is_digit_in_base(b'D', 16));
/// assert!(!is_digit_in_base(b'g', 16));
/// ```
#[inline]
pub fn is_digit_in_base(b: u8, base: u32) -> bool {
    (b as char).is_digit(base)
}

/// Checks if a byte is an ASCII decimal digit. `None` (end of input) is not.
#[inline]
pub fn is_digit(b: Option<u8>) -> bool {
    matches!(b, Some(b'0'..=b'9'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_set() {
        for b in [b' ', b'\t', b'\n', b'\r', 0x0b, 0x0c] {
            assert!(is_whitespace(b), "{:#x} should be whitespace", b);
        }
        for b in [0u8, b'a', b'/', 0x7f, 0xc3] {
            assert!(!is_whitespace(b));
        }
    }

    #[test]
    fn test_ident_classes() {
        assert!(is_ident_start('Z'));
        assert!(is_ident_start('λ'));
        assert!(!is_ident_start('9'));
        assert!(!is_ident_start('@'));
        assert!(!is_ident_start('`'));
        assert!(is_ident_continue('9'));
        assert!(!is_ident_continue('-'));
        assert!(!is_ident_continue('\u{7}'));
    }

    #[test]
    fn test_digit_bases() {
        assert!(is_digit_in_base(b'f', 16));
        assert!(is_digit_in_base(b'9', 10));
        assert!(!is_digit_in_base(b'a', 10));
        assert!(!is_digit_in_base(0xff, 16));
    }

    #[test]
    fn test_is_digit_option() {
        assert!(is_digit(Some(b'0')));
        assert!(!is_digit(Some(b'x')));
        assert!(!is_digit(None));
    }
}
