//! Keeper SDK - Cryptographic primitives.
//!
//! Foundational building blocks for the Keeper SDK:
//! - Hash functions (SHA-256, BLAKE2b-256, Keccak-256, the chained secure
//!   hash, HMAC-SHA-256)
//! - Base58 encoding/decoding
//! - Account key pairs (Ed25519 signing, X25519 shared secrets)
//! - Address derivation and validation
//! - Authenticated symmetric encryption (AES-256-GCM)

pub mod hash;
pub mod base58;
pub mod account;
pub mod address;
pub mod symmetric;

mod error;
pub use error::PrimitivesError;

pub use account::{KeyPair, PublicKey, Signature};
pub use address::Address;
pub use symmetric::SymmetricKey;
