//! Core error types for ctok-util crate
//!
//! The scanner never fails; these errors only surface where configuration
//! enters the system.

use thiserror::Error;

/// Error type for loading scanner configuration
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration text is not valid TOML or does not match the
    /// expected shape.
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// The configuration could not be written out.
    #[error("Failed to serialize configuration: {0}")]
    Serialize(String),

    /// A key that the scanner does not understand.
    #[error("Unknown configuration key: {key}")]
    UnknownKey {
        /// The offending key.
        key: String,
    },
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
