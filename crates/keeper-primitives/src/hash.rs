//! Hash function primitives for the Keeper SDK.
//!
//! Provides SHA-256, BLAKE2b-256, Keccak-256, the chained secure hash used
//! for addresses and account seeds, and HMAC-SHA-256.

use blake2::digest::consts::U32;
use blake2::Blake2b;
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use sha3::Keccak256;

type Blake2b256 = Blake2b<U32>;

/// Compute SHA-256 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte SHA-256 digest.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute BLAKE2b-256 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte BLAKE2b digest.
pub fn blake2b256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute Keccak-256 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte Keccak-256 digest.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute the chained secure hash: Keccak-256(BLAKE2b-256(data)).
///
/// Used for address derivation and account seed hashing.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte digest.
pub fn secure_hash(data: &[u8]) -> [u8; 32] {
    keccak256(&blake2b256(data))
}

/// Compute HMAC-SHA-256 of `data` under `key`.
pub fn sha256_hmac(key: &[u8], data: &[u8]) -> [u8; 32] {
    let mut mac = Hmac::<Sha256>::new_from_slice(key)
        .expect("HMAC accepts keys of any length");
    mac.update(data);
    mac.finalize().into_bytes().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vector() {
        // SHA-256("abc")
        let digest = sha256(b"abc");
        assert_eq!(
            hex::encode(digest),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_blake2b256_known_vector() {
        // BLAKE2b-256("")
        let digest = blake2b256(b"");
        assert_eq!(
            hex::encode(digest),
            "0e5751c026e543b2e8ab2eb06099daa1d1e5df47778f7787faab45cdf12fe3a8"
        );
    }

    #[test]
    fn test_keccak256_known_vector() {
        // Keccak-256("")
        let digest = keccak256(b"");
        assert_eq!(
            hex::encode(digest),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_secure_hash_is_chained() {
        let data = b"keeper";
        assert_eq!(secure_hash(data), keccak256(&blake2b256(data)));
    }

    #[test]
    fn test_hmac_differs_by_key() {
        let a = sha256_hmac(b"key-a", b"data");
        let b = sha256_hmac(b"key-b", b"data");
        assert_ne!(a, b);
    }
}
