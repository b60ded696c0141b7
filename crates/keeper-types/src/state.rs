//! The public state snapshot exposed to trusted origins.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a pending signature request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageState {
    /// Waiting for the user's decision.
    Unapproved,
    /// Approved and signed.
    Signed,
    /// Signed and accepted by the node or matcher.
    Published,
    /// Declined by the user.
    Rejected,
    /// Publishing failed after signing.
    Failed,
}

impl std::fmt::Display for MessageState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_value(self)
            .ok()
            .and_then(|v| v.as_str().map(String::from))
            .unwrap_or_default();
        write!(f, "{s}")
    }
}

/// Status of one pending signature request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageStatus {
    /// Request id.
    pub id: String,
    /// Current lifecycle status.
    pub status: MessageState,
}

/// The network the keeper currently points at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    /// Chain code character (e.g. `W` for mainnet).
    pub code: String,
    /// Node address.
    pub server: String,
    /// Matcher address.
    pub matcher: String,
}

/// Balance of the current account, in coin-denominated decimal strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountBalance {
    /// Spendable balance.
    pub available: String,
    /// Balance leased out to other accounts.
    pub leased_out: String,
    /// Network the balance was observed on.
    pub network: String,
}

/// The current account, when the user allowed access to the origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicStateAccount {
    /// Account display name.
    pub name: String,
    /// Public key in base58.
    pub public_key: String,
    /// Address in base58.
    pub address: String,
    /// Chain code character.
    pub network_code: String,
    /// Network name.
    pub network: String,
    /// Current balance.
    pub balance: AccountBalance,
    /// Account kind (e.g. `seed`).
    #[serde(rename = "type")]
    pub account_type: String,
}

/// Snapshot of the keeper's state as exposed to trusted origins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicState {
    /// Whether the keeper has been initialized with at least one account.
    pub initialized: bool,
    /// Whether the keeper is locked.
    pub locked: bool,
    /// Current account, or `None` when access is not allowed.
    pub account: Option<PublicStateAccount>,
    /// Current network, node, and matcher addresses.
    pub network: NetworkConfig,
    /// Signature request statuses.
    pub messages: Vec<MessageStatus>,
    /// Available transaction versions for each type code.
    pub tx_version: BTreeMap<u16, Vec<u8>>,
}
