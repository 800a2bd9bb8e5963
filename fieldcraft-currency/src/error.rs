//! Error types for currency configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading currency configuration.
///
/// Value-level failures (non-numeric input) are reported as
/// `fieldcraft_model::FieldError::NotNumeric` instead.
#[derive(Debug, Error)]
pub enum CurrencyError {
    /// Config file could not be read.
    #[error("failed to read currency config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema.
    #[error("invalid currency config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for currency configuration.
pub type CurrencyResult<T> = Result<T, CurrencyError>;
