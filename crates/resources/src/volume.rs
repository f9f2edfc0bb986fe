//! Block volume descriptor.
//!
//! Attribute edits are applied before a resize, matching the remote's
//! update ordering for volumes.

use stratus_core::AttrType;
use stratus_reconciler::{
    AttrMode, AttributeSpec, ChangeGroup, IdStyle, IdentitySource, RemoteOp, ResourceDescriptor,
};

/// Block volume.
pub static VOLUME: ResourceDescriptor = ResourceDescriptor {
    kind: "volume",
    schema: &[
        AttributeSpec {
            name: "size",
            wire: "size",
            ty: AttrType::Int,
            mode: AttrMode::Mutable,
            required: true,
        },
        AttributeSpec {
            name: "name",
            wire: "volume_name",
            ty: AttrType::Str,
            mode: AttrMode::Mutable,
            required: false,
        },
        AttributeSpec {
            name: "type",
            wire: "volume_type",
            ty: AttrType::Int,
            mode: AttrMode::CreateOnly,
            required: false,
        },
        AttributeSpec {
            name: "count",
            wire: "count",
            ty: AttrType::Int,
            mode: AttrMode::CreateOnly,
            required: false,
        },
        AttributeSpec {
            name: "description",
            wire: "description",
            ty: AttrType::Str,
            mode: AttrMode::Mutable,
            required: false,
        },
    ],
    create_action: "CreateVolumes",
    create_constants: &[],
    created_id: IdentitySource::StringList("volumes"),
    describe: RemoteOp {
        action: "DescribeVolumes",
        id_param: "volumes",
        id_style: IdStyle::List,
    },
    result_set: "volume_set",
    delete: RemoteOp {
        action: "DeleteVolumes",
        id_param: "volumes",
        id_style: IdStyle::List,
    },
    change_groups: &[
        ChangeGroup {
            name: "attributes",
            attributes: &["name", "description"],
            op: RemoteOp {
                action: "ModifyVolumeAttributes",
                id_param: "volume",
                id_style: IdStyle::Scalar,
            },
        },
        ChangeGroup {
            name: "size",
            attributes: &["size"],
            op: RemoteOp {
                action: "ResizeVolumes",
                id_param: "volumes",
                id_style: IdStyle::List,
            },
        },
    ],
};
