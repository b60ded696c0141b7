//! Matcher HTTP client for placing and cancelling signed orders.

use tracing::debug;

use crate::error::NodeError;
use crate::node::read_response;
use crate::types::{MatcherConfig, MatcherResponse};

/// HTTP client for a matcher's REST API.
#[derive(Debug, Clone)]
pub struct MatcherClient {
    /// Client configuration.
    config: MatcherConfig,
    /// Underlying HTTP client.
    client: reqwest::Client,
}

impl MatcherClient {
    /// Create a new matcher client with the given configuration.
    pub fn new(config: MatcherConfig) -> Self {
        let client = reqwest::Client::new();
        MatcherClient { config, client }
    }

    /// Place a signed order.
    pub async fn place_order(
        &self,
        order: &serde_json::Value,
    ) -> Result<MatcherResponse, NodeError> {
        let url = format!("{}/matcher/orderbook", self.config.base_url);
        debug!(%url, "placing order");

        let resp = self.client.post(&url).json(order).send().await?;
        read_response(resp).await
    }

    /// Cancel an order with a signed cancellation.
    ///
    /// Uses the order-book-wide cancel endpoint; the cancellation payload
    /// carries the order id, not the asset pair.
    pub async fn cancel_order(
        &self,
        cancellation: &serde_json::Value,
    ) -> Result<MatcherResponse, NodeError> {
        let url = format!("{}/matcher/orderbook/cancel", self.config.base_url);
        debug!(%url, "cancelling order");

        let resp = self.client.post(&url).json(cancellation).send().await?;
        read_response(resp).await
    }
}
