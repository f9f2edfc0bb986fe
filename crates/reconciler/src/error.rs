//! Error taxonomy surfaced to engine callers.
//!
//! Nothing here is retried inside the engine; every error carries enough
//! structure (kind plus the original code and message) for the caller to
//! decide its own retry or backoff policy.

use thiserror::Error;

use stratus_api::TransportError;
use stratus_core::ResourceId;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Engine error taxonomy.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A creation-required attribute is absent from the desired state.
    /// Raised locally; no remote call was made.
    #[error("{kind} is missing required attribute '{attribute}'")]
    MissingAttribute {
        kind: &'static str,
        attribute: &'static str,
    },

    /// The desired state failed a local precondition. Raised locally; no
    /// remote call was made.
    #[error("validation failed: {reason}")]
    Validation { reason: String },

    /// The remote call could not complete, or a completed call carried a
    /// malformed payload. The true remote state is unknown.
    #[error("transport fault: {reason}")]
    Transport { reason: String },

    /// The remote completed the call but declined the operation.
    #[error("remote rejected '{action}' (code {code}): {}", message.as_deref().unwrap_or("no message"))]
    RemoteRejected {
        action: String,
        code: i64,
        message: Option<String>,
    },

    /// The identity no longer exists remotely. The caller should drop its
    /// local record rather than treat this as fatal.
    #[error("{kind} '{id}' not found")]
    NotFound {
        kind: &'static str,
        id: ResourceId,
    },
}

impl Error {
    /// Create a missing attribute error.
    pub const fn missing_attribute(kind: &'static str, attribute: &'static str) -> Self {
        Self::MissingAttribute { kind, attribute }
    }

    /// Create a validation error.
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }

    /// Create a transport error.
    pub fn transport(reason: impl Into<String>) -> Self {
        Self::Transport {
            reason: reason.into(),
        }
    }

    /// Create a remote rejection error.
    pub fn remote_rejected(
        action: impl Into<String>,
        code: i64,
        message: Option<String>,
    ) -> Self {
        Self::RemoteRejected {
            action: action.into(),
            code,
            message,
        }
    }

    /// Create a not found error.
    pub const fn not_found(kind: &'static str, id: ResourceId) -> Self {
        Self::NotFound { kind, id }
    }

    /// Check whether this error was raised before any remote call.
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::MissingAttribute { .. })
    }

    /// Check whether this error means the identity is stale.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<TransportError> for Error {
    fn from(fault: TransportError) -> Self {
        Self::Transport {
            reason: fault.reason,
        }
    }
}
