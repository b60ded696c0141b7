/// Error types for message operations.
#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    #[error("{0}")]
    Primitives(#[from] keeper_primitives::PrimitivesError),
    #[error("invalid base64: {0}")]
    InvalidBase64(String),
    #[error("decrypted message is not valid UTF-8")]
    InvalidUtf8,
}
