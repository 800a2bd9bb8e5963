//! Error types for field-type operations.

use thiserror::Error;

/// Field-type errors.
///
/// Lookup misses (unknown type codes, unknown catalog keys) are not errors;
/// callers fall back to placeholder text instead.
#[derive(Debug, Error)]
pub enum FieldError {
    /// Raw input is not numeric once separators and stray characters are removed.
    #[error("{label} is not numeric")]
    NotNumeric { label: String },

    /// A handler for this type id is already registered.
    #[error("field type already registered: {0}")]
    DuplicateFieldType(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FieldError {
    /// True for errors meant to be shown to the person editing the value.
    pub fn is_validation(&self) -> bool {
        matches!(self, FieldError::NotNumeric { .. })
    }
}

/// Result type for field-type operations.
pub type FieldResult<T> = Result<T, FieldError>;
