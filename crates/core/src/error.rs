//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Filtering and row derivation never fail; these errors only surface at the
/// edges, when a catalog is read or validated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a product with a blank name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Input could not be decoded (e.g. malformed catalog JSON).
    #[error("parse failed: {0}")]
    Parse(String),

    /// A catalog source could not be read.
    #[error("io failed: {0}")]
    Io(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
