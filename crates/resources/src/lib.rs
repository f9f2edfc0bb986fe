//! Static descriptor tables for the supported resource kinds.
//!
//! Each module declares one [`ResourceDescriptor`]: the attribute schema,
//! the change groups with their bound remote operations, and the wire shape
//! of the create/describe/delete calls. The tables are data; all behavior
//! lives in `stratus-reconciler`.

use stratus_reconciler::ResourceDescriptor;

pub mod eip;
pub mod key_pair;
pub mod router;
pub mod volume;
pub mod vxnet;

pub use eip::EIP;
pub use key_pair::KEY_PAIR;
pub use router::ROUTER;
pub use volume::VOLUME;
pub use vxnet::VXNET;

/// All supported descriptors, in a stable order.
pub fn all() -> [&'static ResourceDescriptor; 5] {
    [&EIP, &KEY_PAIR, &ROUTER, &VOLUME, &VXNET]
}
