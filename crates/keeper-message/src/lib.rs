//! Keeper SDK - Account-to-account message encryption.
//!
//! Encrypts string messages between two accounts. The symmetric key is an
//! X25519 shared secret separated per application by an HMAC over the
//! caller's secret prefix, so two apps sharing the same account pair still
//! derive distinct keys.

mod encrypted;
mod error;

pub use encrypted::{decrypt_message, encrypt_message};
pub use error::MessageError;
