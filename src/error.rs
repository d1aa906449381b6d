//! Error types for emopick
//!
//! Errors only occur at the loading boundary (corpus files, config,
//! preferences). Search and skin-tone resolution are total functions and
//! never fail.

use thiserror::Error;

/// Errors that can occur while loading picker data
#[derive(Debug, Error)]
pub enum PickerError {
    /// Corpus file is structurally invalid (unknown category, bad shape)
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing errors (corpus, preferences)
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("Config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias for picker operations
pub type PickerResult<T> = Result<T, PickerError>;
