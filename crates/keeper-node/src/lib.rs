#![deny(missing_docs)]

//! # keeper-node
//!
//! HTTP clients for a node and a matcher, publishing the signed payloads
//! the keeper produces.
//!
//! [`Gateway`] bundles both clients and implements the keeper's
//! [`Publisher`](keeper_api::Publisher) seam, so a keeper built with one
//! can serve the sign-and-publish operations end to end.
//!
//! # Example
//!
//! ```no_run
//! use keeper_node::{Gateway, MatcherConfig, NodeConfig};
//!
//! let gateway = Gateway::new(
//!     NodeConfig {
//!         base_url: "https://nodes-testnet.wavesnodes.com".to_string(),
//!     },
//!     MatcherConfig {
//!         base_url: "https://matcher-testnet.waves.exchange".to_string(),
//!     },
//! );
//! ```

pub mod error;
pub mod matcher;
pub mod node;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::NodeError;
pub use matcher::MatcherClient;
pub use node::NodeClient;
pub use types::{BroadcastResponse, MatcherConfig, MatcherResponse, NodeConfig, TransactionInfo};

use keeper_api::{PublishError, Publisher};

/// A node client and a matcher client behind the keeper's publishing seam.
#[derive(Debug, Clone)]
pub struct Gateway {
    node: NodeClient,
    matcher: MatcherClient,
}

impl Gateway {
    /// Build a gateway from node and matcher configurations.
    pub fn new(node: NodeConfig, matcher: MatcherConfig) -> Self {
        Gateway {
            node: NodeClient::new(node),
            matcher: MatcherClient::new(matcher),
        }
    }

    /// The underlying node client.
    pub fn node(&self) -> &NodeClient {
        &self.node
    }

    /// The underlying matcher client.
    pub fn matcher(&self) -> &MatcherClient {
        &self.matcher
    }
}

fn publish_error(e: NodeError) -> PublishError {
    match e {
        NodeError::Rejected { code, message } => PublishError::Rejected { code, message },
        other => PublishError::Transport(other.to_string()),
    }
}

impl Publisher for Gateway {
    async fn publish_transaction(&self, tx: &serde_json::Value) -> Result<String, PublishError> {
        let response = self.node.broadcast(tx).await.map_err(publish_error)?;
        Ok(response.id)
    }

    async fn publish_order(&self, order: &serde_json::Value) -> Result<String, PublishError> {
        let response = self.matcher.place_order(order).await.map_err(publish_error)?;
        Ok(response.status.unwrap_or_default())
    }

    async fn cancel_order(&self, cancel: &serde_json::Value) -> Result<String, PublishError> {
        let response = self.matcher.cancel_order(cancel).await.map_err(publish_error)?;
        Ok(response.status.unwrap_or_default())
    }
}
