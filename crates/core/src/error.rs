//! Error types for attribute value decoding.

use thiserror::Error;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while converting remote payload values into typed
/// attribute values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A payload value did not match the declared attribute type.
    #[error("expected a {expected} value, got {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl Error {
    /// Create a type mismatch error.
    pub const fn type_mismatch(expected: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch { expected, found }
    }
}
