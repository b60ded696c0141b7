//! Account key pairs: Ed25519 signing keys with X25519 shared secrets.
//!
//! An account is derived from a seed phrase and a nonce: the account seed
//! is `secure_hash(nonce_be || seed_bytes)`, and the signing key is
//! `sha256(account_seed)`. Public keys and signatures travel through the
//! API as Base58 strings.

use ed25519_dalek::{Signer, SigningKey, VerifyingKey};
use rand::RngCore;

use crate::base58;
use crate::hash::{secure_hash, sha256};
use crate::PrimitivesError;

/// Length of a serialized public key in bytes.
pub const PUBLIC_KEY_LEN: usize = 32;

/// Length of a serialized signature in bytes.
pub const SIGNATURE_LEN: usize = 64;

/// An account public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; PUBLIC_KEY_LEN]);

impl PublicKey {
    /// Create a public key from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        let arr: [u8; PUBLIC_KEY_LEN] = bytes.try_into().map_err(|_| {
            PrimitivesError::InvalidKeyLength {
                expected: PUBLIC_KEY_LEN,
                got: bytes.len(),
            }
        })?;
        Ok(PublicKey(arr))
    }

    /// Parse a public key from its Base58 string form.
    pub fn from_base58(s: &str) -> Result<Self, PrimitivesError> {
        Self::from_bytes(&base58::decode(s)?)
    }

    /// The raw key bytes.
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.0
    }

    /// Base58 string form, as exchanged through the API.
    pub fn to_base58(&self) -> String {
        base58::encode(&self.0)
    }

    /// Verify an Ed25519 signature over `message`.
    ///
    /// Returns `false` for both invalid signatures and keys that do not
    /// decode to a curve point.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        let Ok(vk) = VerifyingKey::from_bytes(&self.0) else {
            return false;
        };
        let sig = ed25519_dalek::Signature::from_bytes(&signature.0);
        vk.verify_strict(message, &sig).is_ok()
    }
}

impl std::fmt::Display for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl std::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PublicKey({})", self.to_base58())
    }
}

impl std::str::FromStr for PublicKey {
    type Err = PrimitivesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base58(s)
    }
}

/// A detached Ed25519 signature.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Signature([u8; SIGNATURE_LEN]);

impl Signature {
    /// Create a signature from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        let arr: [u8; SIGNATURE_LEN] = bytes.try_into().map_err(|_| {
            PrimitivesError::InvalidSignature(format!(
                "expected {} bytes, got {}",
                SIGNATURE_LEN,
                bytes.len()
            ))
        })?;
        Ok(Signature(arr))
    }

    /// Parse a signature from its Base58 string form.
    pub fn from_base58(s: &str) -> Result<Self, PrimitivesError> {
        Self::from_bytes(&base58::decode(s)?)
    }

    /// The raw signature bytes.
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LEN] {
        &self.0
    }

    /// Base58 string form, as exchanged through the API.
    pub fn to_base58(&self) -> String {
        base58::encode(&self.0)
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl std::fmt::Debug for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Signature({})", self.to_base58())
    }
}

/// An account signing key pair.
#[derive(Clone)]
pub struct KeyPair {
    signing: SigningKey,
}

impl KeyPair {
    /// Generate a new random key pair using the OS random number generator.
    pub fn random() -> Self {
        let mut bytes = [0u8; 32];
        rand::rngs::OsRng.fill_bytes(&mut bytes);
        KeyPair {
            signing: SigningKey::from_bytes(&bytes),
        }
    }

    /// Create a key pair from a raw 32-byte secret.
    pub fn from_private_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        let arr: [u8; 32] = bytes.try_into().map_err(|_| {
            PrimitivesError::InvalidPrivateKey(format!(
                "expected 32 bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(KeyPair {
            signing: SigningKey::from_bytes(&arr),
        })
    }

    /// Derive a key pair from a seed phrase and account nonce.
    ///
    /// The account seed is `secure_hash(nonce_be || seed)`; the signing
    /// key is `sha256(account_seed)`. The same seed with different nonces
    /// yields independent accounts.
    pub fn from_seed(seed: &str, nonce: u32) -> Self {
        let mut input = Vec::with_capacity(4 + seed.len());
        input.extend_from_slice(&nonce.to_be_bytes());
        input.extend_from_slice(seed.as_bytes());
        let account_seed = secure_hash(&input);
        KeyPair {
            signing: SigningKey::from_bytes(&sha256(&account_seed)),
        }
    }

    /// The account public key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.signing.verifying_key().to_bytes())
    }

    /// Sign a message with the account key.
    pub fn sign(&self, message: &[u8]) -> Signature {
        Signature(self.signing.sign(message).to_bytes())
    }

    /// Compute the X25519 shared secret with another account's public key.
    ///
    /// Both directions derive the same 32 bytes: the Ed25519 keys are
    /// mapped to their Montgomery form and multiplied by the local scalar.
    pub fn shared_secret(&self, their: &PublicKey) -> Result<[u8; 32], PrimitivesError> {
        let vk = VerifyingKey::from_bytes(their.as_bytes())
            .map_err(|e| PrimitivesError::InvalidPublicKey(e.to_string()))?;
        let montgomery: curve25519_dalek::MontgomeryPoint = vk.to_montgomery();
        let shared = montgomery * self.signing.to_scalar();
        Ok(shared.to_bytes())
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The secret key never appears in debug output.
        write!(f, "KeyPair({})", self.public_key())
    }
}
