//! SSH key pair descriptor.

use stratus_core::AttrType;
use stratus_reconciler::{
    AttrMode, AttributeSpec, ChangeGroup, ConstValue, IdStyle, IdentitySource, RemoteOp,
    ResourceDescriptor,
};

/// SSH key pair. Registration always uses the `user` mode: the caller
/// supplies the public key and the remote never generates one.
pub static KEY_PAIR: ResourceDescriptor = ResourceDescriptor {
    kind: "key_pair",
    schema: &[
        AttributeSpec {
            name: "name",
            wire: "keypair_name",
            ty: AttrType::Str,
            mode: AttrMode::Mutable,
            required: true,
        },
        AttributeSpec {
            name: "public_key",
            wire: "public_key",
            ty: AttrType::Str,
            mode: AttrMode::CreateOnly,
            required: true,
        },
        AttributeSpec {
            name: "description",
            wire: "description",
            ty: AttrType::Str,
            mode: AttrMode::Mutable,
            required: false,
        },
        AttributeSpec {
            name: "key_id",
            wire: "keypair_id",
            ty: AttrType::Str,
            mode: AttrMode::ReadOnly,
            required: false,
        },
    ],
    create_action: "CreateKeyPair",
    create_constants: &[("mode", ConstValue::Str("user"))],
    created_id: IdentitySource::Scalar("keypair_id"),
    describe: RemoteOp {
        action: "DescribeKeyPairs",
        id_param: "keypairs",
        id_style: IdStyle::List,
    },
    result_set: "keypair_set",
    delete: RemoteOp {
        action: "DeleteKeyPairs",
        id_param: "keypairs",
        id_style: IdStyle::List,
    },
    change_groups: &[ChangeGroup {
        name: "attributes",
        attributes: &["name", "description"],
        op: RemoteOp {
            action: "ModifyKeyPairAttributes",
            id_param: "keypair",
            id_style: IdStyle::Scalar,
        },
    }],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_is_well_formed() {
        assert!(KEY_PAIR.verify().is_empty());
    }

    #[test]
    fn test_creation_requires_name_and_key() {
        let required: Vec<&str> = KEY_PAIR.required_attributes().map(|s| s.name).collect();
        assert_eq!(required, vec!["name", "public_key"]);
    }

    #[test]
    fn test_registration_mode_is_fixed() {
        assert_eq!(
            KEY_PAIR.create_constants,
            &[("mode", ConstValue::Str("user"))]
        );
    }

    #[test]
    fn test_public_key_is_immutable() {
        let spec = KEY_PAIR.attribute("public_key");
        assert!(spec.is_some_and(|s| !s.is_mutable() && !s.is_read_only()));
    }
}
