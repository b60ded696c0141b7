//! ProtoKeeper — a crypto-only signer bound to one key pair and one chain.
//!
//! Handles payload preparation and signing but no origin trust, queueing,
//! or publishing; the stateful host wraps it per selected account.
//!
//! Signatures cover the canonical JSON bytes of the prepared payload
//! (fields sorted, defaults filled, before `id` and `proofs` are attached).
//! The id is the BLAKE2b-256 of the same bytes, base58-encoded.

use serde_json::{json, Map, Value};

use keeper_primitives::hash::blake2b256;
use keeper_primitives::{base58, Address, KeyPair, PublicKey, Signature};
use keeper_types::money::NumberLike;
use keeper_types::versions::latest_version;
use keeper_types::{
    AuthData, AuthResponse, CancelOrderData, OrderData, SignRequestData, TransactionData,
    AUTH_PREFIX,
};
use keeper_types::order::{TYPE_CANCEL_ORDER, TYPE_ORDER};

use crate::error::KeeperError;
use crate::API_VERSION;

/// A signer for one account on one chain.
#[derive(Clone, Debug)]
pub struct ProtoKeeper {
    keys: KeyPair,
    chain_id: u8,
}

impl ProtoKeeper {
    /// Bind a key pair to a chain id.
    pub fn new(keys: KeyPair, chain_id: u8) -> Self {
        ProtoKeeper { keys, chain_id }
    }

    /// The account public key.
    pub fn public_key(&self) -> PublicKey {
        self.keys.public_key()
    }

    /// The account address on this chain.
    pub fn address(&self) -> Address {
        Address::from_public_key(&self.keys.public_key(), self.chain_id)
    }

    /// The byte layout every auth signature covers: the fixed prefix, the
    /// requesting host, and the challenge data, each length-prefixed
    /// (u16, big-endian).
    pub fn auth_payload(host: &str, data: &str) -> Vec<u8> {
        let parts = [AUTH_PREFIX, host, data];
        let mut payload =
            Vec::with_capacity(parts.iter().map(|p| 2 + p.len()).sum());
        for part in parts {
            payload.extend_from_slice(&(part.len() as u16).to_be_bytes());
            payload.extend_from_slice(part.as_bytes());
        }
        payload
    }

    /// Sign an authentication challenge from `host`.
    pub fn sign_auth(&self, host: &str, data: &AuthData) -> AuthResponse {
        let payload = Self::auth_payload(host, &data.data);
        let signature = self.keys.sign(&payload);
        AuthResponse {
            address: self.address().to_base58(),
            host: host.to_string(),
            prefix: AUTH_PREFIX.to_string(),
            public_key: self.public_key().to_base58(),
            signature: signature.to_base58(),
            version: API_VERSION,
            name: data.name.clone().unwrap_or_default(),
        }
    }

    /// Sign arbitrary bytes with the account key.
    pub fn sign_bytes(&self, bytes: &[u8]) -> Signature {
        self.keys.sign(bytes)
    }

    /// Encrypt a string message for the holder of `recipient`.
    pub fn encrypt_message(
        &self,
        message: &str,
        recipient: &PublicKey,
        prefix: &str,
    ) -> Result<String, KeeperError> {
        Ok(keeper_message::encrypt_message(
            message, &self.keys, recipient, prefix,
        )?)
    }

    /// Decrypt a string message from the holder of `sender`.
    pub fn decrypt_message(
        &self,
        message: &str,
        sender: &PublicKey,
        prefix: &str,
    ) -> Result<String, KeeperError> {
        Ok(keeper_message::decrypt_message(
            message, &self.keys, sender, prefix,
        )?)
    }

    /// Prepare and sign a transaction payload.
    ///
    /// Fills the sender public key and timestamp when absent, stamps the
    /// newest supported version, and attaches `id` and `proofs`.
    pub fn sign_transaction(
        &self,
        mut tx: TransactionData,
        timestamp_ms: u64,
    ) -> Result<Value, KeeperError> {
        let code = tx.type_code();
        let common = tx.common_mut();
        if common.sender_public_key.is_none() {
            common.sender_public_key = Some(self.public_key().to_base58());
        }
        if common.timestamp.is_none() {
            common.timestamp = Some(NumberLike::Int(timestamp_ms as i64));
        }

        let Value::Object(body) = tx.payload_json()? else {
            unreachable!("transaction payloads serialize to JSON objects");
        };
        self.seal(body, code)
    }

    /// Prepare and sign a matcher order.
    pub fn sign_order(
        &self,
        mut order: OrderData,
        timestamp_ms: u64,
    ) -> Result<Value, KeeperError> {
        if order.sender_public_key.is_none() {
            order.sender_public_key = Some(self.public_key().to_base58());
        }
        if order.timestamp.is_none() {
            order.timestamp = Some(NumberLike::Int(timestamp_ms as i64));
        }

        let Value::Object(body) = serde_json::to_value(&order)? else {
            unreachable!("orders serialize to JSON objects");
        };
        self.seal(body, TYPE_ORDER)
    }

    /// Prepare and sign an order cancellation.
    pub fn sign_cancel_order(&self, mut cancel: CancelOrderData) -> Result<Value, KeeperError> {
        if cancel.sender_public_key.is_none() {
            cancel.sender_public_key = Some(self.public_key().to_base58());
        }

        let Value::Object(body) = serde_json::to_value(&cancel)? else {
            unreachable!("cancellations serialize to JSON objects");
        };
        self.seal(body, TYPE_CANCEL_ORDER)
    }

    /// Sign a custom request, returning the base58 signature string.
    pub fn sign_request(&self, request: &SignRequestData) -> Result<String, KeeperError> {
        let mut request = request.clone();
        if request.data.sender_public_key.is_none() {
            request.data.sender_public_key = Some(self.public_key().to_base58());
        }
        let bytes = serde_json::to_vec(&request)?;
        Ok(self.keys.sign(&bytes).to_base58())
    }

    /// Stamp type and version, sign the canonical bytes, attach id and proofs.
    fn seal(&self, mut body: Map<String, Value>, code: u16) -> Result<Value, KeeperError> {
        body.insert("type".to_string(), json!(code));
        body.insert("version".to_string(), json!(latest_version(code)));

        // serde_json maps are ordered by key, so this byte form is canonical.
        let bytes = serde_json::to_vec(&body)?;
        let signature = self.keys.sign(&bytes);

        // Cancellations already carry the order id in `id`; everything else
        // gets the hash of the signed bytes.
        body.entry("id".to_string())
            .or_insert_with(|| json!(base58::encode(&blake2b256(&bytes))));
        body.insert("proofs".to_string(), json!([signature.to_base58()]));
        Ok(Value::Object(body))
    }
}

/// Verify the proof attached to a sealed payload against a public key.
///
/// Reconstructs the canonical bytes by stripping `id` and `proofs`.
pub fn verify_sealed(value: &Value, public_key: &PublicKey) -> bool {
    let Value::Object(body) = value else {
        return false;
    };
    let Some(proof) = body
        .get("proofs")
        .and_then(|p| p.get(0))
        .and_then(|p| p.as_str())
    else {
        return false;
    };
    let Ok(signature) = Signature::from_base58(proof) else {
        return false;
    };

    let mut stripped = body.clone();
    stripped.remove("proofs");
    // Generated ids are attached after signing; payload-supplied ids
    // (order cancellations) are covered by the signature. Accept either.
    let Ok(with_id) = serde_json::to_vec(&stripped) else {
        return false;
    };
    stripped.remove("id");
    let Ok(without_id) = serde_json::to_vec(&stripped) else {
        return false;
    };

    public_key.verify(&without_id, &signature) || public_key.verify(&with_id, &signature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use keeper_types::transactions::{TransferTx, TxCommon};
    use keeper_types::{Money, WAVES};

    const TESTNET: u8 = b'T';

    fn proto() -> ProtoKeeper {
        ProtoKeeper::new(KeyPair::from_seed("proto keeper test seed", 0), TESTNET)
    }

    fn transfer() -> TransactionData {
        TransactionData::Transfer(TransferTx {
            amount: Money::coins(WAVES, 100000i64),
            recipient: "3Mtest".into(),
            attachment: None,
            common: TxCommon {
                fee: Money::tokens(WAVES, "0.001"),
                sender_public_key: None,
                timestamp: None,
            },
        })
    }

    #[test]
    fn test_auth_payload_layout() {
        let payload = ProtoKeeper::auth_payload("example.com", "nonce");
        let prefix_len = AUTH_PREFIX.len();
        assert_eq!(payload[0], 0);
        assert_eq!(payload[1] as usize, prefix_len);
        assert_eq!(&payload[2..2 + prefix_len], AUTH_PREFIX.as_bytes());
        assert_eq!(payload.len(), 2 + prefix_len + 2 + "example.com".len() + 2 + 5);
    }

    #[test]
    fn test_auth_signature_verifies() {
        let keeper = proto();
        let response = keeper.sign_auth(
            "example.com",
            &AuthData {
                data: "server nonce".into(),
                name: Some("dex".into()),
                referrer: None,
                icon: None,
                success_path: None,
            },
        );

        assert_eq!(response.prefix, AUTH_PREFIX);
        assert_eq!(response.host, "example.com");
        assert_eq!(response.name, "dex");

        let pk = PublicKey::from_base58(&response.public_key).unwrap();
        let sig = Signature::from_base58(&response.signature).unwrap();
        let payload = ProtoKeeper::auth_payload("example.com", "server nonce");
        assert!(pk.verify(&payload, &sig));

        let addr = Address::from_base58(&response.address).unwrap();
        assert!(addr.is_on_chain(TESTNET));
    }

    #[test]
    fn test_sign_transaction_fills_defaults() {
        let keeper = proto();
        let signed = keeper.sign_transaction(transfer(), 1_700_000_000_000).unwrap();

        assert_eq!(signed["type"], json!(4));
        assert_eq!(signed["version"], json!(2));
        assert_eq!(signed["timestamp"], json!(1_700_000_000_000i64));
        assert_eq!(
            signed["senderPublicKey"],
            json!(keeper.public_key().to_base58())
        );
        assert!(signed["id"].is_string());
        assert!(verify_sealed(&signed, &keeper.public_key()));
    }

    #[test]
    fn test_caller_supplied_fields_kept() {
        let keeper = proto();
        let mut tx = transfer();
        tx.common_mut().timestamp = Some(NumberLike::Int(42));
        let signed = keeper.sign_transaction(tx, 1_700_000_000_000).unwrap();
        assert_eq!(signed["timestamp"], json!(42));
    }

    #[test]
    fn test_tampered_seal_fails_verification() {
        let keeper = proto();
        let mut signed = keeper.sign_transaction(transfer(), 1_700_000_000_000).unwrap();
        signed["recipient"] = json!("3Mevil");
        assert!(!verify_sealed(&signed, &keeper.public_key()));
    }

    #[test]
    fn test_sign_order_shape() {
        use keeper_types::{OrderData, OrderSide};

        let keeper = proto();
        let order = OrderData {
            amount: Money::tokens(WAVES, "10"),
            price: Money::tokens(WAVES, "0.1"),
            order_type: OrderSide::Sell,
            matcher_fee: Money::tokens(WAVES, "0.003"),
            matcher_public_key: keeper.public_key().to_base58(),
            expiration: NumberLike::Int(1_800_000_000_000),
            timestamp: None,
            sender_public_key: None,
        };
        let signed = keeper.sign_order(order, 1_700_000_000_000).unwrap();
        assert_eq!(signed["type"], json!(1002));
        assert_eq!(signed["orderType"], json!("sell"));
        assert!(verify_sealed(&signed, &keeper.public_key()));
    }

    #[test]
    fn test_sign_request_signature_verifies() {
        use keeper_types::request::RequestData;

        let keeper = proto();
        let request = SignRequestData {
            code: 1001,
            data: RequestData {
                timestamp: NumberLike::Int(1_700_000_000_000),
                sender_public_key: Some(keeper.public_key().to_base58()),
            },
        };
        let signature = keeper.sign_request(&request).unwrap();

        let bytes = serde_json::to_vec(&request).unwrap();
        let sig = Signature::from_base58(&signature).unwrap();
        assert!(keeper.public_key().verify(&bytes, &sig));
    }
}
