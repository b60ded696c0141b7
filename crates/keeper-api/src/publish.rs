//! The publishing seam between the keeper and a node/matcher backend.
//!
//! The sign-and-publish operations hand the signed JSON to a [`Publisher`];
//! the HTTP implementation lives in the node client crate so the host has
//! no transport dependency of its own.

use std::future::Future;

/// Failures surfaced by a [`Publisher`].
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("no publisher is configured")]
    Unconfigured,

    #[error("rejected by remote ({code}): {message}")]
    Rejected { code: i64, message: String },

    #[error("transport error: {0}")]
    Transport(String),
}

/// Broadcasts signed payloads to a node and a matcher.
pub trait Publisher: Send + Sync {
    /// Broadcast a signed transaction. Returns the remote response body.
    fn publish_transaction(
        &self,
        tx: &serde_json::Value,
    ) -> impl Future<Output = Result<String, PublishError>> + Send;

    /// Place a signed order with the matcher. Returns the remote response body.
    fn publish_order(
        &self,
        order: &serde_json::Value,
    ) -> impl Future<Output = Result<String, PublishError>> + Send;

    /// Cancel an order with the matcher. Returns the remote response body.
    fn cancel_order(
        &self,
        cancellation: &serde_json::Value,
    ) -> impl Future<Output = Result<String, PublishError>> + Send;
}

/// The default publisher: every publish attempt fails as unconfigured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPublisher;

impl Publisher for NullPublisher {
    async fn publish_transaction(&self, _tx: &serde_json::Value) -> Result<String, PublishError> {
        Err(PublishError::Unconfigured)
    }

    async fn publish_order(&self, _order: &serde_json::Value) -> Result<String, PublishError> {
        Err(PublishError::Unconfigured)
    }

    async fn cancel_order(
        &self,
        _cancellation: &serde_json::Value,
    ) -> Result<String, PublishError> {
        Err(PublishError::Unconfigured)
    }
}
