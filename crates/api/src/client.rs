//! Remote client trait and implementations.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use stratus_core::Zone;

use crate::error::{Result, TransportError};
use crate::request::ApiRequest;
use crate::response::ApiResponse;

/// One typed remote operation against one zone.
///
/// Implementations own transport, signing, pooling, timeouts, and
/// cancellation. The contract here is only: a call either returns a
/// structured [`ApiResponse`] or a [`TransportError`]; nothing is retried at
/// this seam.
#[async_trait]
pub trait RemoteClient: Send + Sync {
    /// Issue one remote call and wait for its response.
    async fn call(&self, zone: &Zone, request: ApiRequest) -> Result<ApiResponse>;
}

/// A call a [`ScriptedClient`] received.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    /// Zone the call was scoped to.
    pub zone: Zone,
    /// The full request as issued.
    pub request: ApiRequest,
}

/// Scripted client for testing.
///
/// Outcomes are served in FIFO order, one per call; every call is recorded.
/// A call past the end of the script fails as a transport fault, which makes
/// over-calling engines fail tests loudly.
#[derive(Default)]
pub struct ScriptedClient {
    outcomes: Mutex<VecDeque<Result<ApiResponse>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedClient {
    /// Create a client with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a client with an empty script, wrapped in an Arc.
    pub fn new_arc() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Queue a response for the next unserved call.
    pub async fn push_response(&self, response: ApiResponse) {
        self.outcomes.lock().await.push_back(Ok(response));
    }

    /// Queue a transport fault for the next unserved call.
    pub async fn push_transport_fault(&self, reason: impl Into<String>) {
        self.outcomes
            .lock()
            .await
            .push_back(Err(TransportError::new(reason)));
    }

    /// All calls received so far.
    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().await.clone()
    }

    /// Number of calls received so far.
    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }

    /// Action names of the calls received so far, in order.
    pub async fn actions(&self) -> Vec<String> {
        self.calls
            .lock()
            .await
            .iter()
            .map(|call| call.request.action.clone())
            .collect()
    }
}

#[async_trait]
impl RemoteClient for ScriptedClient {
    async fn call(&self, zone: &Zone, request: ApiRequest) -> Result<ApiResponse> {
        self.calls.lock().await.push(RecordedCall {
            zone: zone.clone(),
            request,
        });
        self.outcomes
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::new("script exhausted")))
    }
}

/// A wrapper that adds tracing to a remote client.
pub struct TracingClient<C: RemoteClient> {
    inner: C,
}

impl<C: RemoteClient> TracingClient<C> {
    /// Create a new tracing client.
    pub const fn new(inner: C) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<C: RemoteClient> RemoteClient for TracingClient<C> {
    async fn call(&self, zone: &Zone, request: ApiRequest) -> Result<ApiResponse> {
        tracing::debug!(action = %request.action, zone = %zone, "Issuing remote call");
        let result = self.inner.call(zone, request).await;
        match &result {
            Ok(response) => {
                tracing::trace!(ret_code = response.ret_code, "Remote call returned");
            }
            Err(fault) => {
                tracing::warn!(error = %fault, "Remote call failed");
            }
        }
        result
    }
}
