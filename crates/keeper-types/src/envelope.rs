//! Numeric-tag signing envelopes: `{"type": <code>, "data": <body>}`.
//!
//! Serde's derive tagging only produces string tags, so the envelopes are
//! serialized through these helpers to keep the tag a JSON number.

use serde::{Deserialize, Serialize};

/// Borrowing envelope for serialization.
#[derive(Serialize)]
pub(crate) struct EnvelopeRef<'a, T> {
    #[serde(rename = "type")]
    pub code: u16,
    pub data: &'a T,
}

/// Owning envelope for deserialization.
#[derive(Deserialize)]
pub(crate) struct Envelope<T> {
    #[serde(rename = "type")]
    pub code: u16,
    pub data: T,
}
