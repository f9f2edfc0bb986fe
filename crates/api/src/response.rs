//! Response envelope for remote operations.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A structured remote response.
///
/// Every completed call carries an application return code (`0` is success),
/// an optional message, and a kind-specific payload. The payload keeps the
/// remote's own field names; nothing is renamed at this layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// In-band application return code; `0` means the operation succeeded.
    pub ret_code: i64,
    /// Optional human-readable message, usually present on rejection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Remaining response fields (created identities, described objects).
    #[serde(flatten)]
    pub body: Map<String, Value>,
}

impl ApiResponse {
    /// Create a successful response with an empty payload.
    pub fn success() -> Self {
        Self::default()
    }

    /// Create a rejection response.
    pub fn rejected(code: i64, message: impl Into<String>) -> Self {
        Self {
            ret_code: code,
            message: Some(message.into()),
            body: Map::new(),
        }
    }

    /// Add a payload field, builder style.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.body.insert(name.into(), value.into());
        self
    }

    /// Get a payload field.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.body.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_flattens_payload() {
        let raw = json!({
            "ret_code": 0,
            "eips": ["eip-abc123"],
            "eip_set": []
        });
        let response: ApiResponse =
            serde_json::from_value(raw).unwrap_or_else(|_| ApiResponse::rejected(-1, "parse"));

        assert_eq!(response.ret_code, 0);
        assert!(response.message.is_none());
        assert_eq!(response.field("eips"), Some(&json!(["eip-abc123"])));
    }

    #[test]
    fn test_rejected_carries_message() {
        let response = ApiResponse::rejected(1400, "quota exceeded");
        assert_eq!(response.ret_code, 1400);
        assert_eq!(response.message.as_deref(), Some("quota exceeded"));
    }
}
