//! Error types for node and matcher operations.

/// Errors that can occur when talking to a node or matcher.
#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Failed to serialize or deserialize data.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// The remote refused the payload.
    #[error("rejected ({code}): {message}")]
    Rejected {
        /// The remote's numeric error code.
        code: i64,
        /// Human-readable rejection message.
        message: String,
    },

    /// Server returned a non-2xx response with no structured error body.
    #[error("server error ({status_code}): {message}")]
    ServerError {
        /// HTTP status code.
        status_code: u16,
        /// Error message from server.
        message: String,
    },

    /// Resource not found (404).
    #[error("not found")]
    NotFound,
}
