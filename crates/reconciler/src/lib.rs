//! Declarative-to-imperative reconciliation for zone-scoped cloud resources.
//!
//! Given a desired description of a resource and the identity of a possibly
//! already-provisioned remote object, the engine computes and issues the
//! minimal set of remote mutating calls that bring the remote object into
//! agreement with the description:
//!
//! - **Desired State**: what the caller wants the resource to look like
//! - **Observed State**: what the remote side last reported
//! - **Change Groups**: disjoint sets of mutable attributes, each bound to
//!   one remote mutating operation
//! - **Diff**: per group, decide whether its one operation must be called
//!
//! # Key Concepts
//!
//! ## Lifecycle
//!
//! One [`Reconciler`] drives one resource kind through four operations:
//!
//! 1. `create` - validate locally, issue one allocate call, return the
//!    remote-assigned identity
//! 2. `refresh` - describe the single identity, map the payload into
//!    observed state
//! 3. `reconcile` - walk the change groups in declared order, calling only
//!    the operations whose attributes actually differ
//! 4. `destroy` - release the identity; already-gone counts as success
//!
//! ## Descriptors
//!
//! The engine is generic; everything kind-specific lives in a static
//! [`ResourceDescriptor`] table (attribute schema, change groups, wire
//! names). The descriptor tables for the supported kinds live in the
//! `stratus-resources` crate.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use stratus_core::{Attributes, Zone};
//! use stratus_reconciler::Reconciler;
//! use stratus_resources::EIP;
//!
//! # async fn demo(client: Arc<dyn stratus_api::RemoteClient>) -> stratus_reconciler::Result<()> {
//! let engine = Reconciler::new(client, &EIP);
//! let zone = Zone::new("pek3a");
//!
//! let desired = Attributes::new().with("bandwidth", 2).with("name", "edge");
//! let id = engine.create(&zone, &desired).await?;
//! let observed = engine.refresh(&zone, &id).await?;
//!
//! let desired = Attributes::new().with("bandwidth", 5).with("name", "edge");
//! let observed = engine.reconcile(&zone, &id, &observed, &desired).await?;
//! # Ok(())
//! # }
//! ```

pub mod descriptor;
pub mod diff;
pub mod error;
pub mod reconciler;

// Re-export main types
pub use descriptor::{
    AttrMode, AttributeSpec, ChangeGroup, ConstValue, IdStyle, IdentitySource, RemoteOp,
    ResourceDescriptor,
};
pub use error::{Error, Result};
pub use reconciler::Reconciler;
