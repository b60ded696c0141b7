//! Node and matcher data types: configuration and API response structures.

use serde::{Deserialize, Serialize};

/// Configuration for a [`NodeClient`](crate::NodeClient).
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Base URL for the node REST API.
    pub base_url: String,
}

impl Default for NodeConfig {
    fn default() -> Self {
        NodeConfig {
            base_url: "https://nodes.wavesnodes.com".to_string(),
        }
    }
}

/// Configuration for a [`MatcherClient`](crate::MatcherClient).
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    /// Base URL for the matcher REST API.
    pub base_url: String,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        MatcherConfig {
            base_url: "https://matcher.waves.exchange".to_string(),
        }
    }
}

/// Response from a transaction broadcast.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastResponse {
    /// Transaction id.
    pub id: String,
    /// Transaction type code.
    #[serde(default)]
    pub r#type: Option<u16>,
    /// Application status reported by the node.
    #[serde(default)]
    pub application_status: Option<String>,
    /// Block height, once mined.
    #[serde(default)]
    pub height: Option<u64>,
}

/// Response from a transaction info query.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInfo {
    /// Transaction id.
    pub id: String,
    /// Application status reported by the node.
    #[serde(default)]
    pub application_status: Option<String>,
    /// Block height containing the transaction.
    #[serde(default)]
    pub height: Option<u64>,
    /// Number of confirmations.
    #[serde(default)]
    pub confirmations: Option<u64>,
}

/// Response from the matcher for order placement and cancellation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatcherResponse {
    /// Whether the matcher accepted the request.
    #[serde(default)]
    pub success: Option<bool>,
    /// Status string (e.g. `OrderAccepted`, `OrderCanceled`).
    #[serde(default)]
    pub status: Option<String>,
    /// The order echo or an explanatory message.
    #[serde(default)]
    pub message: Option<serde_json::Value>,
}

/// Structured error body returned by nodes and matchers.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}
