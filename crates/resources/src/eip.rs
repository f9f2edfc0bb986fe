//! Elastic IP descriptor.
//!
//! Billing mode is applied before bandwidth: some billing modes gate which
//! bandwidth values the remote accepts.

use stratus_core::AttrType;
use stratus_reconciler::{
    AttrMode, AttributeSpec, ChangeGroup, IdStyle, IdentitySource, RemoteOp, ResourceDescriptor,
};

/// Elastic IP.
pub static EIP: ResourceDescriptor = ResourceDescriptor {
    kind: "eip",
    schema: &[
        AttributeSpec {
            name: "bandwidth",
            wire: "bandwidth",
            ty: AttrType::Int,
            mode: AttrMode::Mutable,
            required: true,
        },
        AttributeSpec {
            name: "billing_mode",
            wire: "billing_mode",
            ty: AttrType::Str,
            mode: AttrMode::Mutable,
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
            name: "name",
            wire: "eip_name",
            ty: AttrType::Str,
            mode: AttrMode::Mutable,
            required: false,
        },
        AttributeSpec {
            name: "icp",
            wire: "need_icp",
            ty: AttrType::Bool,
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
        AttributeSpec {
            name: "eip_addr",
            wire: "eip_addr",
            ty: AttrType::Str,
            mode: AttrMode::ReadOnly,
            required: false,
        },
    ],
    create_action: "AllocateEips",
    create_constants: &[],
    created_id: IdentitySource::StringList("eips"),
    describe: RemoteOp {
        action: "DescribeEips",
        id_param: "eips",
        id_style: IdStyle::List,
    },
    result_set: "eip_set",
    delete: RemoteOp {
        action: "ReleaseEips",
        id_param: "eips",
        id_style: IdStyle::List,
    },
    change_groups: &[
        ChangeGroup {
            name: "billing",
            attributes: &["billing_mode"],
            op: RemoteOp {
                action: "ChangeEipsBillingMode",
                id_param: "eips",
                id_style: IdStyle::List,
            },
        },
        ChangeGroup {
            name: "bandwidth",
            attributes: &["bandwidth"],
            op: RemoteOp {
                action: "ChangeEipsBandwidth",
                id_param: "eips",
                id_style: IdStyle::List,
            },
        },
        ChangeGroup {
            name: "attributes",
            attributes: &["name", "description"],
            op: RemoteOp {
                action: "ModifyEipAttributes",
                id_param: "eip",
                id_style: IdStyle::Scalar,
            },
        },
    ],
};
