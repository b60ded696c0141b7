//! Message encryption and decryption between two accounts.
//!
//! The wire form is base64 of `nonce || ciphertext || tag` as produced by
//! [`SymmetricKey`]. The key is derived once per account pair and prefix:
//! `HMAC-SHA-256(key = x25519_shared_secret, data = prefix)`. Both parties
//! derive the same secret, so either side decrypts with the other's public
//! key.

use base64::Engine;

use keeper_primitives::hash::sha256_hmac;
use keeper_primitives::{KeyPair, PublicKey, SymmetricKey};

use crate::MessageError;

/// Derive the pairwise symmetric key for a prefix.
fn derive_key(local: &KeyPair, remote: &PublicKey, prefix: &str) -> Result<SymmetricKey, MessageError> {
    let shared = local.shared_secret(remote)?;
    Ok(SymmetricKey::new(&sha256_hmac(&shared, prefix.as_bytes())))
}

/// Encrypt a string message for the holder of `recipient`.
///
/// `prefix` is the application's secret string; the recipient must use the
/// same prefix to decrypt. Returns base64.
pub fn encrypt_message(
    message: &str,
    sender: &KeyPair,
    recipient: &PublicKey,
    prefix: &str,
) -> Result<String, MessageError> {
    let key = derive_key(sender, recipient, prefix)?;
    let sealed = key.encrypt(message.as_bytes())?;
    Ok(base64::engine::general_purpose::STANDARD.encode(sealed))
}

/// Decrypt a base64 message produced by [`encrypt_message`].
///
/// `sender` is the public key of the account that encrypted the message.
pub fn decrypt_message(
    encoded: &str,
    recipient: &KeyPair,
    sender: &PublicKey,
    prefix: &str,
) -> Result<String, MessageError> {
    let sealed = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .map_err(|e| MessageError::InvalidBase64(e.to_string()))?;
    let key = derive_key(recipient, sender, prefix)?;
    let plaintext = key.decrypt(&sealed)?;
    String::from_utf8(plaintext).map_err(|_| MessageError::InvalidUtf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(seed: &str) -> KeyPair {
        KeyPair::from_seed(seed, 0)
    }

    #[test]
    fn test_encrypt_decrypt_round_trip() {
        let alice = pair("alice message seed");
        let bob = pair("bob message seed");

        let encrypted =
            encrypt_message("meet at dawn", &alice, &bob.public_key(), "myapp").unwrap();
        let decrypted =
            decrypt_message(&encrypted, &bob, &alice.public_key(), "myapp").unwrap();
        assert_eq!(decrypted, "meet at dawn");
    }

    #[test]
    fn test_wrong_prefix_fails() {
        let alice = pair("alice message seed");
        let bob = pair("bob message seed");

        let encrypted =
            encrypt_message("meet at dawn", &alice, &bob.public_key(), "myapp").unwrap();
        assert!(decrypt_message(&encrypted, &bob, &alice.public_key(), "otherapp").is_err());
    }

    #[test]
    fn test_wrong_recipient_fails() {
        let alice = pair("alice message seed");
        let bob = pair("bob message seed");
        let eve = pair("eve message seed");

        let encrypted =
            encrypt_message("meet at dawn", &alice, &bob.public_key(), "myapp").unwrap();
        assert!(decrypt_message(&encrypted, &eve, &alice.public_key(), "myapp").is_err());
    }

    #[test]
    fn test_tampered_message_fails() {
        let alice = pair("alice message seed");
        let bob = pair("bob message seed");

        let encrypted =
            encrypt_message("meet at dawn", &alice, &bob.public_key(), "myapp").unwrap();
        let mut sealed = base64::engine::general_purpose::STANDARD
            .decode(&encrypted)
            .unwrap();
        let last = sealed.len() - 1;
        sealed[last] ^= 0x01;
        let tampered = base64::engine::general_purpose::STANDARD.encode(sealed);

        assert!(decrypt_message(&tampered, &bob, &alice.public_key(), "myapp").is_err());
    }

    #[test]
    fn test_not_base64_fails() {
        let bob = pair("bob message seed");
        let alice = pair("alice message seed");
        assert!(matches!(
            decrypt_message("%%%", &bob, &alice.public_key(), "myapp"),
            Err(MessageError::InvalidBase64(_))
        ));
    }
}
