//! Zone, identity, and the caller-held reconciliation record.

use serde::{Deserialize, Serialize};

use crate::attr::Attributes;

/// A named partition of the remote infrastructure.
///
/// Every remote operation is scoped to exactly one zone; identities are only
/// meaningful within the zone they were allocated in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Zone(String);

impl Zone {
    /// Create a zone from its remote name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the zone name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Zone {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque, remote-assigned handle for a provisioned resource instance.
///
/// The remote side chooses the identity at allocation time; the caller only
/// ever echoes it back. No two live resources of the same kind within a zone
/// share one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    /// Create an identity from the string the remote side assigned.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identity string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether the identity is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Caller-held record tying an identity to its zone and the last observed
/// state snapshot.
///
/// The engine never stores this itself; the caller persists it between
/// invocations and supplies the most recent copy on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRecord {
    /// Remote-assigned identity.
    pub id: ResourceId,
    /// Zone the resource was allocated in.
    pub zone: Zone,
    /// Observed state from the most recent refresh.
    pub observed: Attributes,
}

impl ResourceRecord {
    /// Create a record for a freshly created resource, with no observed
    /// state yet.
    pub fn new(zone: Zone, id: ResourceId) -> Self {
        Self {
            id,
            zone,
            observed: Attributes::new(),
        }
    }

    /// Replace the observed snapshot.
    pub fn with_observed(mut self, observed: Attributes) -> Self {
        self.observed = observed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_display() {
        let zone = Zone::new("pek3a");
        assert_eq!(zone.to_string(), "pek3a");
        assert_eq!(zone.as_str(), "pek3a");
    }

    #[test]
    fn test_resource_id_empty() {
        assert!(ResourceId::new("").is_empty());
        assert!(!ResourceId::new("eip-abc123").is_empty());
    }

    #[test]
    fn test_record_lifecycle() {
        let record = ResourceRecord::new(Zone::new("pek3a"), ResourceId::new("vol-1"));
        assert!(record.observed.is_empty());

        let observed = Attributes::new().with("size", 10);
        let record = record.with_observed(observed);
        assert_eq!(record.observed.get("size"), Some(&crate::AttrValue::Int(10)));
    }
}
