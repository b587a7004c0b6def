//! Boundary configuration
//!
//! Provides [`AdapterConfig`], the knobs for how raw input is adapted.

use crate::adapters;
use crate::raw::RawKind;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Adapter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdapterConfig {
    /// Trim surrounding whitespace from raw text before adapting
    pub trim_whitespace: bool,
    /// Variant used by `adapt_auto` for numeric input
    pub number_variant: String,
    /// Variant used by `adapt_auto` for text input
    pub text_variant: String,
}

impl AdapterConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With whitespace trimming toggled
    #[inline]
    #[must_use]
    pub fn with_trim_whitespace(mut self, trim: bool) -> Self {
        self.trim_whitespace = trim;
        self
    }

    /// With default variant for numeric input
    #[inline]
    #[must_use]
    pub fn with_number_variant(mut self, tag: impl Into<String>) -> Self {
        self.number_variant = tag.into();
        self
    }

    /// With default variant for text input
    #[inline]
    #[must_use]
    pub fn with_text_variant(mut self, tag: impl Into<String>) -> Self {
        self.text_variant = tag.into();
        self
    }

    /// Default variant tag for a raw input shape
    #[inline]
    #[must_use]
    pub fn variant_for(&self, kind: RawKind) -> &str {
        match kind {
            RawKind::Number => &self.number_variant,
            RawKind::Text => &self.text_variant,
        }
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    /// Returns [`ConfigError::Toml`] on malformed TOML or unknown keys
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Toml`] if it does not parse
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            trim_whitespace: true,
            number_variant: adapters::NUMERIC.to_string(),
            text_variant: adapters::TEXT.to_string(),
        }
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// File is not valid configuration
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let config = AdapterConfig::new();
        assert!(config.trim_whitespace);
        assert_eq!(config.variant_for(RawKind::Number), "numeric");
        assert_eq!(config.variant_for(RawKind::Text), "text");
    }

    #[test]
    fn builders() {
        let config = AdapterConfig::new()
            .with_trim_whitespace(false)
            .with_number_variant("text")
            .with_text_variant("rational");

        assert!(!config.trim_whitespace);
        assert_eq!(config.variant_for(RawKind::Number), "text");
        assert_eq!(config.variant_for(RawKind::Text), "rational");
    }

    #[test]
    fn toml_partial_uses_defaults() {
        let config = AdapterConfig::from_toml_str("text_variant = \"rational\"").unwrap();
        assert_eq!(
            config,
            AdapterConfig::new().with_text_variant("rational")
        );
    }

    #[test]
    fn toml_empty_is_default() {
        assert_eq!(AdapterConfig::from_toml_str("").unwrap(), AdapterConfig::default());
    }

    #[test]
    fn toml_unknown_key_rejected() {
        let err = AdapterConfig::from_toml_str("retries = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn toml_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("opd.toml");
        std::fs::write(&path, "trim_whitespace = false\nnumber_variant = \"text\"\n").unwrap();

        let config = AdapterConfig::from_toml_file(&path).unwrap();
        assert!(!config.trim_whitespace);
        assert_eq!(config.number_variant, "text");
    }

    #[test]
    fn toml_missing_file() {
        let err = AdapterConfig::from_toml_file("/nonexistent/opd.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
