//! Remote API seam for the stratus engine.
//!
//! The engine never speaks a wire protocol. It builds an [`ApiRequest`]
//! (action name plus a JSON parameter map), hands it to a [`RemoteClient`],
//! and classifies the returned [`ApiResponse`] through [`interpret`] /
//! [`interpret_describe`] before deciding control flow. Transport,
//! authentication, signing, and retries all live behind the trait.
//!
//! The crate also ships [`ScriptedClient`], a canned-response test double
//! with a recorded call log, and [`TracingClient`], a logging decorator for
//! any client.

pub mod client;
pub mod error;
pub mod interpret;
pub mod request;
pub mod response;

// Re-export main types
pub use client::{RecordedCall, RemoteClient, ScriptedClient, TracingClient};
pub use error::{Result, TransportError};
pub use interpret::{
    interpret, interpret_describe, Verdict, RET_CODE_RESOURCE_NOT_FOUND, RET_CODE_SUCCESS,
};
pub use request::ApiRequest;
pub use response::ApiResponse;
