use keeper_message::MessageError;
use keeper_primitives::PrimitivesError;
use keeper_types::ValidationError;

use crate::publish::PublishError;

/// Error types for keeper operations.
///
/// The API surface only promises that operations resolve or reject; the
/// rejection causes are enumerated here.
#[derive(Debug, thiserror::Error)]
pub enum KeeperError {
    #[error("keeper is not initialized")]
    NotInitialized,

    #[error("keeper is locked")]
    Locked,

    #[error("origin `{origin}` is not trusted")]
    NotTrusted { origin: String },

    #[error("request {id} was rejected by the user")]
    RejectedByUser { id: String },

    #[error("no account is selected")]
    NoAccount,

    #[error("unknown account `{name}`")]
    UnknownAccount { name: String },

    #[error("notifications from `{origin}` are throttled, retry in {retry_in_secs}s")]
    NotificationThrottled { origin: String, retry_in_secs: u64 },

    #[error("invalid request: {0}")]
    InvalidRequest(#[from] ValidationError),

    #[error("{0}")]
    Primitives(#[from] PrimitivesError),

    #[error("{0}")]
    Message(#[from] MessageError),

    #[error("publish failed: {0}")]
    Publish(#[from] PublishError),

    #[error("payload serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
