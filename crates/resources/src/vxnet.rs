//! Virtual network descriptor.

use stratus_core::AttrType;
use stratus_reconciler::{
    AttrMode, AttributeSpec, ChangeGroup, ConstValue, IdStyle, IdentitySource, RemoteOp,
    ResourceDescriptor,
};

/// Virtual network. Creation is pinned to a single instance per call; the
/// allocate response carries objects, so the identity is read off the first
/// object's `vxnet_id`.
pub static VXNET: ResourceDescriptor = ResourceDescriptor {
    kind: "vxnet",
    schema: &[
        AttributeSpec {
            name: "name",
            wire: "vxnet_name",
            ty: AttrType::Str,
            mode: AttrMode::Mutable,
            required: false,
        },
        AttributeSpec {
            name: "type",
            wire: "vxnet_type",
            ty: AttrType::Int,
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
            name: "vxnet_id",
            wire: "vxnet_id",
            ty: AttrType::Str,
            mode: AttrMode::ReadOnly,
            required: false,
        },
    ],
    create_action: "CreateVxNets",
    create_constants: &[("count", ConstValue::Int(1))],
    created_id: IdentitySource::ObjectList {
        field: "vxnets",
        id: "vxnet_id",
    },
    describe: RemoteOp {
        action: "DescribeVxNets",
        id_param: "vxnets",
        id_style: IdStyle::List,
    },
    result_set: "vxnet_set",
    delete: RemoteOp {
        action: "DeleteVxNets",
        id_param: "vxnets",
        id_style: IdStyle::List,
    },
    change_groups: &[ChangeGroup {
        name: "attributes",
        attributes: &["name", "description"],
        op: RemoteOp {
            action: "ModifyVxNetAttributes",
            id_param: "vxnet",
            id_style: IdStyle::Scalar,
        },
    }],
};
