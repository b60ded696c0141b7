//! Account addresses.
//!
//! An address is 26 bytes: version byte, chain id, the first 20 bytes of
//! `secure_hash(public_key)`, and a 4-byte checksum (the first 4 bytes of
//! `secure_hash` over the preceding 22). Addresses travel as Base58.

use crate::account::PublicKey;
use crate::base58;
use crate::hash::secure_hash;
use crate::PrimitivesError;

/// Address format version byte.
const ADDRESS_VERSION: u8 = 1;

/// Total serialized address length in bytes.
const ADDRESS_LEN: usize = 26;

/// Length of the public key hash portion.
const HASH_LEN: usize = 20;

/// Length of the trailing checksum.
const CHECKSUM_LEN: usize = 4;

/// A 26-byte account address bound to a chain id.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    bytes: [u8; ADDRESS_LEN],
}

impl Address {
    /// Derive the address of a public key on the given chain.
    pub fn from_public_key(public_key: &PublicKey, chain_id: u8) -> Self {
        let mut bytes = [0u8; ADDRESS_LEN];
        bytes[0] = ADDRESS_VERSION;
        bytes[1] = chain_id;
        bytes[2..2 + HASH_LEN]
            .copy_from_slice(&secure_hash(public_key.as_bytes())[..HASH_LEN]);
        let checksum = secure_hash(&bytes[..ADDRESS_LEN - CHECKSUM_LEN]);
        bytes[ADDRESS_LEN - CHECKSUM_LEN..].copy_from_slice(&checksum[..CHECKSUM_LEN]);
        Address { bytes }
    }

    /// Parse an address from raw bytes, verifying version and checksum.
    pub fn from_bytes(data: &[u8]) -> Result<Self, PrimitivesError> {
        let bytes: [u8; ADDRESS_LEN] = data.try_into().map_err(|_| {
            PrimitivesError::InvalidAddress(format!(
                "expected {} bytes, got {}",
                ADDRESS_LEN,
                data.len()
            ))
        })?;
        if bytes[0] != ADDRESS_VERSION {
            return Err(PrimitivesError::InvalidAddress(format!(
                "unknown version byte {}",
                bytes[0]
            )));
        }
        let checksum = secure_hash(&bytes[..ADDRESS_LEN - CHECKSUM_LEN]);
        if bytes[ADDRESS_LEN - CHECKSUM_LEN..] != checksum[..CHECKSUM_LEN] {
            return Err(PrimitivesError::ChecksumMismatch);
        }
        Ok(Address { bytes })
    }

    /// Parse an address from its Base58 string form.
    pub fn from_base58(s: &str) -> Result<Self, PrimitivesError> {
        Self::from_bytes(&base58::decode(s)?)
    }

    /// The chain id the address is bound to.
    pub fn chain_id(&self) -> u8 {
        self.bytes[1]
    }

    /// Whether this address belongs to the given chain.
    pub fn is_on_chain(&self, chain_id: u8) -> bool {
        self.chain_id() == chain_id
    }

    /// The raw 26 address bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.bytes
    }

    /// Base58 string form, as exchanged through the API.
    pub fn to_base58(&self) -> String {
        base58::encode(&self.bytes)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl std::fmt::Debug for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Address({})", self.to_base58())
    }
}

impl std::str::FromStr for Address {
    type Err = PrimitivesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base58(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::KeyPair;

    const MAINNET: u8 = b'W';
    const TESTNET: u8 = b'T';

    #[test]
    fn test_round_trip() {
        let kp = KeyPair::from_seed("address test seed", 0);
        let addr = Address::from_public_key(&kp.public_key(), MAINNET);
        let parsed: Address = addr.to_base58().parse().unwrap();
        assert_eq!(addr, parsed);
        assert_eq!(parsed.chain_id(), MAINNET);
    }

    #[test]
    fn test_chain_id_changes_address() {
        let kp = KeyPair::from_seed("address test seed", 0);
        let mainnet = Address::from_public_key(&kp.public_key(), MAINNET);
        let testnet = Address::from_public_key(&kp.public_key(), TESTNET);
        assert_ne!(mainnet, testnet);
        assert!(testnet.is_on_chain(TESTNET));
        assert!(!testnet.is_on_chain(MAINNET));
    }

    #[test]
    fn test_tampered_checksum_rejected() {
        let kp = KeyPair::from_seed("address test seed", 0);
        let addr = Address::from_public_key(&kp.public_key(), MAINNET);
        let mut bytes = *addr.as_bytes();
        bytes[ADDRESS_LEN - 1] ^= 0xff;
        assert!(matches!(
            Address::from_bytes(&bytes),
            Err(PrimitivesError::ChecksumMismatch)
        ));
    }

    #[test]
    fn test_wrong_version_rejected() {
        let kp = KeyPair::from_seed("address test seed", 0);
        let addr = Address::from_public_key(&kp.public_key(), MAINNET);
        let mut bytes = *addr.as_bytes();
        bytes[0] = 2;
        assert!(Address::from_bytes(&bytes).is_err());
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert!(Address::from_bytes(&[0u8; 25]).is_err());
        assert!(Address::from_base58("3P").is_err());
    }
}
