//! Authenticated symmetric encryption with AES-256-GCM.
//!
//! The encryption format is: nonce (12 bytes) || ciphertext || tag
//! (16 bytes). Keys are typically derived from an X25519 shared secret.

use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, KeyInit, Nonce};
use rand::RngCore;

use crate::PrimitivesError;

/// AES-GCM nonce length in bytes.
const NONCE_LEN: usize = 12;

/// AES-GCM authentication tag length in bytes.
const TAG_LEN: usize = 16;

/// A 32-byte symmetric encryption key.
pub struct SymmetricKey {
    key: [u8; 32],
}

impl SymmetricKey {
    /// Create a SymmetricKey from a byte slice.
    ///
    /// Inputs shorter than 32 bytes are left-padded with zeros; longer
    /// inputs are truncated to the first 32 bytes.
    pub fn new(key: &[u8]) -> Self {
        let mut padded = [0u8; 32];
        if key.len() < 32 {
            padded[32 - key.len()..].copy_from_slice(key);
        } else {
            padded.copy_from_slice(&key[..32]);
        }
        SymmetricKey { key: padded }
    }

    /// Generate a random 32-byte symmetric key.
    pub fn new_random() -> Self {
        let mut key = [0u8; 32];
        rand::rngs::OsRng.fill_bytes(&mut key);
        SymmetricKey { key }
    }

    /// Encrypt a plaintext message.
    ///
    /// The output is nonce || ciphertext || tag with a fresh random nonce.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, PrimitivesError> {
        let cipher = Aes256Gcm::new_from_slice(&self.key)
            .map_err(|e| PrimitivesError::EncryptionError(e.to_string()))?;

        let mut nonce_bytes = [0u8; NONCE_LEN];
        rand::rngs::OsRng.fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = cipher
            .encrypt(nonce, plaintext)
            .map_err(|e| PrimitivesError::EncryptionError(e.to_string()))?;

        let mut result = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        result.extend_from_slice(&nonce_bytes);
        result.extend_from_slice(&ciphertext);
        Ok(result)
    }

    /// Decrypt a message produced by [`encrypt`](Self::encrypt).
    ///
    /// Fails on truncated input and on any tampering with nonce,
    /// ciphertext, or tag.
    pub fn decrypt(&self, message: &[u8]) -> Result<Vec<u8>, PrimitivesError> {
        if message.len() < NONCE_LEN + TAG_LEN {
            return Err(PrimitivesError::DecryptionError(
                "message is too short to be a valid encrypted message".to_string(),
            ));
        }

        let cipher = Aes256Gcm::new_from_slice(&self.key)
            .map_err(|e| PrimitivesError::DecryptionError(e.to_string()))?;

        let nonce = Nonce::from_slice(&message[..NONCE_LEN]);
        cipher
            .decrypt(nonce, &message[NONCE_LEN..])
            .map_err(|_| PrimitivesError::DecryptionError("authentication failed".to_string()))
    }

    /// Get the raw key bytes.
    pub fn to_bytes(&self) -> &[u8; 32] {
        &self.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_decrypt_round_trip() {
        let key = SymmetricKey::new_random();
        let plaintext = b"a thing to encrypt";

        let ciphertext = key.encrypt(plaintext).unwrap();
        assert_ne!(&ciphertext[NONCE_LEN..], plaintext.as_slice());

        let decrypted = key.decrypt(&ciphertext).unwrap();
        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn test_short_key_is_padded() {
        let key = SymmetricKey::new(&[0xab; 31]);
        let ciphertext = key.encrypt(b"test message").unwrap();
        assert_eq!(key.decrypt(&ciphertext).unwrap(), b"test message");
    }

    #[test]
    fn test_tampered_ciphertext_rejected() {
        let key = SymmetricKey::new_random();
        let mut ciphertext = key.encrypt(b"payload").unwrap();
        let last = ciphertext.len() - 1;
        ciphertext[last] ^= 0x01;
        assert!(key.decrypt(&ciphertext).is_err());
    }

    #[test]
    fn test_wrong_key_rejected() {
        let key = SymmetricKey::new_random();
        let other = SymmetricKey::new_random();
        let ciphertext = key.encrypt(b"payload").unwrap();
        assert!(other.decrypt(&ciphertext).is_err());
    }

    #[test]
    fn test_decrypt_too_short() {
        let key = SymmetricKey::new_random();
        assert!(key.decrypt(&[0u8; 10]).is_err());
    }
}
