//! Request envelope for remote operations.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One remote operation: an action name plus its parameters.
///
/// The zone selector travels alongside the request in
/// [`RemoteClient::call`](crate::client::RemoteClient::call); it is not a
/// parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiRequest {
    /// Remote action name, e.g. `AllocateEips`.
    pub action: String,
    /// Action parameters keyed by wire field name.
    #[serde(default)]
    pub params: Map<String, Value>,
}

impl ApiRequest {
    /// Create a request with no parameters.
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            params: Map::new(),
        }
    }

    /// Set a parameter, builder style.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_param(name, value);
        self
    }

    /// Set a parameter.
    pub fn set_param(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.params.insert(name.into(), value.into());
    }

    /// Get a parameter value.
    pub fn param(&self, name: &str) -> Option<&Value> {
        self.params.get(name)
    }
}
