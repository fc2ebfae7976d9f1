//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and dispatch
//! - `comment` - Whitespace, line comment and block comment scanning
//! - `string` - String and character literal scanning
//! - `number` - Numeric literal scanning
//! - `operator` - Punctuation table and longest-match lookup
//! - `identifier` - Identifier scanning

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::Lexer;
pub use operator::{match_punctuation, PUNCTUATION};
