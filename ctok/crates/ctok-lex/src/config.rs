//! Scanner configuration.
//!
//! Configuration only decides which trivia is reported. It never changes
//! where token boundaries fall.

use ctok_util::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Keys accepted by [`LexerConfig::from_toml_str`].
const KNOWN_KEYS: &[&str] = &["keep_whitespace", "keep_comments"];

/// Options controlling which tokens the [`Lexer`](crate::Lexer) emits.
///
/// # Example
///
/// ```
/// use ctok_lex::LexerConfig;
///
/// let config = LexerConfig::default().keep_whitespace(true);
/// assert!(config.keep_whitespace);
/// assert!(config.keep_comments);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LexerConfig {
    /// Emit runs of whitespace as [`TokenKind::Whitespace`](crate::TokenKind::Whitespace).
    #[serde(default)]
    pub keep_whitespace: bool,

    /// Emit comments. When false they are skipped like whitespace.
    #[serde(default = "default_true")]
    pub keep_comments: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            keep_whitespace: false,
            keep_comments: true,
        }
    }
}

impl LexerConfig {
    /// Sets whether whitespace tokens are emitted.
    pub fn keep_whitespace(mut self, keep: bool) -> Self {
        self.keep_whitespace = keep;
        self
    }

    /// Sets whether comment tokens are emitted.
    pub fn keep_comments(mut self, keep: bool) -> Self {
        self.keep_comments = keep;
        self
    }

    /// Parses a configuration from a flat TOML table.
    ///
    /// Missing keys take their default values; unknown keys are rejected.
    ///
    /// # Example
    ///
    /// ```
    /// use ctok_lex::LexerConfig;
    ///
    /// let config = LexerConfig::from_toml_str("keep_comments = false").unwrap();
    /// assert!(!config.keep_comments);
    /// assert!(!config.keep_whitespace);
    /// ```
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let table: toml::Table =
            toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;

        if let Some(key) = table.keys().find(|k| !KNOWN_KEYS.contains(&k.as_str())) {
            return Err(ConfigError::UnknownKey { key: key.clone() });
        }

        toml::Value::Table(table)
            .try_into()
            .map_err(|e: toml::de::Error| ConfigError::Parse(e.to_string()))
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        toml::to_string(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}
