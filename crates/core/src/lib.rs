//! Core types shared across the stratus workspace.
//!
//! This crate defines the vocabulary every other crate speaks:
//!
//! - [`Zone`] and [`ResourceId`] - where a resource lives and how the remote
//!   side names it
//! - [`AttrValue`] / [`Attributes`] - the typed attribute mapping used for
//!   both desired and observed state
//! - [`ResourceRecord`] - the caller-held record persisted between
//!   invocations

pub mod attr;
pub mod error;
pub mod types;

// Re-export main types
pub use attr::{AttrType, AttrValue, Attributes};
pub use error::{Error, Result};
pub use types::{ResourceId, ResourceRecord, Zone};
