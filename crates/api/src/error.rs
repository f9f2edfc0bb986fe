//! Transport-level failure type.

use thiserror::Error;

/// Result type alias for remote client calls.
pub type Result<T> = std::result::Result<T, TransportError>;

/// The remote call itself could not complete.
///
/// This covers network faults, serialization faults, and protocol faults -
/// anything where no well-formed application response came back. An
/// application-level rejection (a response with a non-zero return code) is
/// *not* a transport error; it is classified by the interpreter instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transport fault: {reason}")]
pub struct TransportError {
    /// What went wrong, as reported by the underlying client.
    pub reason: String,
}

impl TransportError {
    /// Create a transport error.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_reason() {
        let fault = TransportError::new("connection reset");
        assert_eq!(fault.to_string(), "transport fault: connection reset");
    }
}
