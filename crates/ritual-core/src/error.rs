//! Core error types for ritual-core.
//!
//! Scoring itself never fails: unresolved catalog references are skipped and
//! numeric inputs are clamped. Errors only come from loading configuration and
//! catalog data.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ritual-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog-related errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization errors
    #[error("TOML error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Could not resolve the configuration directory
    #[error("Cannot determine configuration directory")]
    NoConfigDir,
}

/// Catalog-specific errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Two items share the same id
    #[error("Duplicate catalog item id: {0}")]
    DuplicateItem(String),

    /// Two rules target the same harm level
    #[error("Duplicate rule for harm level {0}")]
    DuplicateRule(u8),

    /// Failed to read or parse a catalog file
    #[error("Failed to load catalog from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },
}

/// Validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Harm level outside 0..=3
    #[error("Harm level {0} is out of range (expected 0-3)")]
    HarmLevelOutOfRange(u8),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_converts_into_core_error() {
        let err: CoreError = ValidationError::HarmLevelOutOfRange(7).into();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation error: Harm level 7 is out of range (expected 0-3)"
        );
    }

    #[test]
    fn catalog_error_message_names_item() {
        let err = CatalogError::DuplicateItem("kulfi".into());
        assert!(err.to_string().contains("kulfi"));
    }
}
