//! ctok-util - Foundation types shared by the ctok crates
//!
//! This crate holds the small set of types that the scanner hands to its
//! consumers and that downstream tools (comparison engines, parsers) need
//! without depending on the scanner itself:
//!
//! - [`span`] - Source locations (byte range plus line/column)
//! - [`error`] - Error types for the configuration boundary
//!
//! # Example
//!
//! ```
//! use ctok_util::Span;
//!
//! let source = "int x = 1;";
//! let span = Span::new(4, 5, 1, 5);
//! assert_eq!(span.slice(source), "x");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod span;

pub use error::{ConfigError, ConfigResult};
pub use span::Span;
