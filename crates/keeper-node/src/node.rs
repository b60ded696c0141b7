//! Node HTTP client for broadcasting signed transactions and querying
//! their status.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::NodeError;
use crate::types::{BroadcastResponse, ErrorBody, NodeConfig, TransactionInfo};

/// HTTP client for a node's REST API.
#[derive(Debug, Clone)]
pub struct NodeClient {
    /// Client configuration.
    config: NodeConfig,
    /// Underlying HTTP client.
    client: reqwest::Client,
}

impl NodeClient {
    /// Create a new node client with the given configuration.
    pub fn new(config: NodeConfig) -> Self {
        let client = reqwest::Client::new();
        NodeClient { config, client }
    }

    /// Broadcast a signed transaction.
    pub async fn broadcast(
        &self,
        tx: &serde_json::Value,
    ) -> Result<BroadcastResponse, NodeError> {
        let url = format!("{}/transactions/broadcast", self.config.base_url);
        debug!(%url, "broadcasting transaction");

        let resp = self.client.post(&url).json(tx).send().await?;
        read_response(resp).await
    }

    /// Query a transaction by id.
    pub async fn transaction_info(&self, id: &str) -> Result<TransactionInfo, NodeError> {
        let url = format!("{}/transactions/info/{}", self.config.base_url, id);
        let resp = self.client.get(&url).send().await?;
        read_response(resp).await
    }
}

/// Parse a node/matcher response, surfacing structured rejections.
pub(crate) async fn read_response<T: DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, NodeError> {
    let status = resp.status();

    if status.as_u16() == 404 {
        return Err(NodeError::NotFound);
    }

    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        if let Ok(error) = serde_json::from_str::<ErrorBody>(&body) {
            if let Some(code) = error.error {
                return Err(NodeError::Rejected {
                    code,
                    message: error.message.unwrap_or_else(|| "rejected".to_string()),
                });
            }
        }
        return Err(NodeError::ServerError {
            status_code: status.as_u16(),
            message: body,
        });
    }

    let text = resp.text().await?;
    let parsed = serde_json::from_str(&text)?;
    Ok(parsed)
}
