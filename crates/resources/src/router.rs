//! Router descriptor.

use stratus_core::AttrType;
use stratus_reconciler::{
    AttrMode, AttributeSpec, ChangeGroup, IdStyle, IdentitySource, RemoteOp, ResourceDescriptor,
};

/// Router. All post-creation edits travel through one modify call; type and
/// the attached VPC network are fixed at creation.
pub static ROUTER: ResourceDescriptor = ResourceDescriptor {
    kind: "router",
    schema: &[
        AttributeSpec {
            name: "name",
            wire: "router_name",
            ty: AttrType::Str,
            mode: AttrMode::Mutable,
            required: false,
        },
        AttributeSpec {
            name: "type",
            wire: "router_type",
            ty: AttrType::Int,
            mode: AttrMode::CreateOnly,
            required: false,
        },
        AttributeSpec {
            name: "security_group",
            wire: "security_group",
            ty: AttrType::Str,
            mode: AttrMode::Mutable,
            required: false,
        },
        AttributeSpec {
            name: "vpc_network",
            wire: "vpc_network",
            ty: AttrType::Str,
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
            name: "eip",
            wire: "eip",
            ty: AttrType::Str,
            mode: AttrMode::Mutable,
            required: false,
        },
    ],
    create_action: "CreateRouters",
    create_constants: &[],
    created_id: IdentitySource::StringList("routers"),
    describe: RemoteOp {
        action: "DescribeRouters",
        id_param: "routers",
        id_style: IdStyle::List,
    },
    result_set: "router_set",
    delete: RemoteOp {
        action: "DeleteRouters",
        id_param: "routers",
        id_style: IdStyle::List,
    },
    change_groups: &[ChangeGroup {
        name: "attributes",
        attributes: &["name", "security_group", "description", "eip"],
        op: RemoteOp {
            action: "ModifyRouterAttributes",
            id_param: "router",
            id_style: IdStyle::Scalar,
        },
    }],
};
