//! Static per-kind descriptor tables that parameterize the engine.
//!
//! A descriptor is data, not behavior: the attribute schema with wire
//! names, the change groups with their bound operations, and the shape of
//! the create/describe/delete calls. The engine reads it; nothing mutates
//! it.

use itertools::Itertools;
use serde_json::Value;

use stratus_core::AttrType;

/// When an attribute may be set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrMode {
    /// Settable at creation, immutable afterward.
    CreateOnly,
    /// Settable at creation and changeable through a change group.
    Mutable,
    /// Assigned by the remote side; observed but never supplied.
    ReadOnly,
}

/// One attribute in a resource kind's schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSpec {
    /// Attribute name as the caller knows it.
    pub name: &'static str,
    /// Field name on the wire (request parameter and response field).
    pub wire: &'static str,
    /// Declared value type.
    pub ty: AttrType,
    /// Mutability after creation.
    pub mode: AttrMode,
    /// Whether creation requires this attribute.
    pub required: bool,
}

impl AttributeSpec {
    /// Check whether this attribute can change after creation.
    pub const fn is_mutable(&self) -> bool {
        matches!(self.mode, AttrMode::Mutable)
    }

    /// Check whether the remote side owns this attribute.
    pub const fn is_read_only(&self) -> bool {
        matches!(self.mode, AttrMode::ReadOnly)
    }
}

/// How an operation expects the identity parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStyle {
    /// A one-element list of identities.
    List,
    /// A bare identity string.
    Scalar,
}

/// One remote mutating or lookup operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteOp {
    /// Remote action name.
    pub action: &'static str,
    /// Parameter name carrying the identity.
    pub id_param: &'static str,
    /// Shape of the identity parameter.
    pub id_style: IdStyle,
}

/// Where the created identity lives in an allocate response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentitySource {
    /// A list of identity strings; the first is tracked.
    StringList(&'static str),
    /// A single identity string.
    Scalar(&'static str),
    /// A list of objects, each carrying its identity under `id`; the first
    /// object is tracked.
    ObjectList {
        field: &'static str,
        id: &'static str,
    },
}

/// A fixed parameter sent on every create call for a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstValue {
    /// Fixed string parameter.
    Str(&'static str),
    /// Fixed integer parameter.
    Int(i64),
    /// Fixed boolean parameter.
    Bool(bool),
}

impl ConstValue {
    /// Encode as a JSON parameter value.
    pub fn to_json(self) -> Value {
        match self {
            Self::Str(s) => Value::from(s),
            Self::Int(i) => Value::from(i),
            Self::Bool(b) => Value::from(b),
        }
    }
}

/// A named, fixed subset of mutable attributes bound to one remote mutating
/// operation.
///
/// Groups are disjoint; a single reconcile pass may call several groups'
/// operations, but never two operations for the same attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeGroup {
    /// Group name, for logging and tests.
    pub name: &'static str,
    /// Attribute names in this group.
    pub attributes: &'static [&'static str],
    /// The one operation that applies this group.
    pub op: RemoteOp,
}

/// Everything kind-specific the engine needs, as one static table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// Kind name, e.g. `eip`.
    pub kind: &'static str,
    /// Attribute schema.
    pub schema: &'static [AttributeSpec],
    /// Remote action that allocates the resource.
    pub create_action: &'static str,
    /// Fixed parameters sent on every create call.
    pub create_constants: &'static [(&'static str, ConstValue)],
    /// Where the allocate response carries the created identity.
    pub created_id: IdentitySource,
    /// The describe operation.
    pub describe: RemoteOp,
    /// Response field holding the described objects.
    pub result_set: &'static str,
    /// The release operation.
    pub delete: RemoteOp,
    /// Change groups in the order they are evaluated and applied.
    pub change_groups: &'static [ChangeGroup],
}

impl ResourceDescriptor {
    /// Look up an attribute spec by name.
    pub fn attribute(&self, name: &str) -> Option<&AttributeSpec> {
        self.schema.iter().find(|spec| spec.name == name)
    }

    /// Attributes that creation requires.
    pub fn required_attributes(&self) -> impl Iterator<Item = &AttributeSpec> {
        self.schema.iter().filter(|spec| spec.required)
    }

    /// Self-check the table's internal consistency.
    ///
    /// Returns one message per violation; an empty vector means the table is
    /// well formed. Exercised by each kind's tests rather than at runtime.
    pub fn verify(&self) -> Vec<String> {
        let mut violations = Vec::new();

        for name in self.schema.iter().map(|spec| spec.name).duplicates() {
            violations.push(format!("{}: attribute '{name}' declared twice", self.kind));
        }

        for spec in self.schema {
            if spec.required && spec.is_read_only() {
                violations.push(format!(
                    "{}: attribute '{}' is read-only but marked creation-required",
                    self.kind, spec.name
                ));
            }
        }

        for group in self.change_groups {
            for name in group.attributes {
                match self.attribute(name) {
                    None => violations.push(format!(
                        "{}: group '{}' names unknown attribute '{name}'",
                        self.kind, group.name
                    )),
                    Some(spec) if !spec.is_mutable() => violations.push(format!(
                        "{}: group '{}' names non-mutable attribute '{name}'",
                        self.kind, group.name
                    )),
                    Some(_) => {}
                }
            }
        }

        for name in self
            .change_groups
            .iter()
            .flat_map(|group| group.attributes)
            .duplicates()
        {
            violations.push(format!(
                "{}: attribute '{name}' belongs to more than one group",
                self.kind
            ));
        }

        violations
    }
}
