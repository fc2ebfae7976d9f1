//! ctok-lex - Lexical scanner for C/C++ family source text
//!
//! This crate turns a source buffer into a flat, ordered stream of tokens
//! for tools that compare or analyze source code. It delimits tokens; it
//! does not parse, expand macros, or validate anything.
//!
//! # Example Usage
//!
//! ```
//! use ctok_lex::{tokenize, TokenKind};
//!
//! let source = "x = \"Te\\\"st\"; // note";
//!
//! for token in tokenize(source) {
//!     println!("{}", token);
//! }
//!
//! let kinds: Vec<TokenKind> = tokenize(source).map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Identifier,
//!         TokenKind::Punctuation,
//!         TokenKind::String,
//!         TokenKind::Punctuation,
//!         TokenKind::LineComment,
//!     ]
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`chars`] - Character classification
//! - [`config`] - Options selecting which trivia is emitted
//!
//! # Token Categories
//!
//! - **Strings and chars**: `"Te\"st"`, `'\n'`, delimiters and escapes kept verbatim
//! - **Comments**: `// line` (no trailing line feed), `/* block */`
//! - **Numbers**: `42`, `.5f`, `1.0d`, `0xdeadbeef`, `0b1101`, `0o777`, `10UL`
//! - **Punctuation**: longest match over the C/C++ operator set, plus `#`, `##` and `\`
//! - **Identifiers**: `[A-Za-z_][A-Za-z0-9_]*`, non-ASCII characters included
//! - **Unknown**: any other single character (`$`, `@`, control bytes)
//!
//! # Guarantees
//!
//! Every token's lexeme is the exact source slice its span covers. With
//! whitespace kept, the lexemes concatenate back to the input. No input,
//! including empty and truncated input, makes the lexer panic.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod config;
pub mod cursor;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use config::LexerConfig;
pub use ctok_util::{ConfigError, Span};
pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{Token, TokenKind};

/// Tokenizes `source` with the default configuration.
///
/// The returned lexer is lazy; nothing is scanned until it is iterated.
pub fn tokenize(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}
