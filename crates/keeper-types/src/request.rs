//! Custom sign requests (codes 1001 and 1004).
//!
//! Services use these to obtain a bare signature over a typed request;
//! both codes share one body shape, so the envelope keeps the caller's
//! code instead of splitting into two types.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::envelope::{Envelope, EnvelopeRef};
use crate::money::NumberLike;
use crate::ValidationError;

/// Envelope codes accepted for custom sign requests.
pub const REQUEST_CODES: [u16; 2] = [1001, 1004];

/// The body of a custom sign request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestData {
    /// Current time, ms.
    pub timestamp: NumberLike,
    /// Sender's public key in base58. Filled by the keeper when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_public_key: Option<String>,
}

/// A custom sign request: `{"type": 1001|1004, "data": ...}`.
#[derive(Debug, Clone, PartialEq)]
pub struct SignRequestData {
    /// The envelope code the caller supplied.
    pub code: u16,
    /// The request body.
    pub data: RequestData,
}

impl SignRequestData {
    /// Reject codes outside [`REQUEST_CODES`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !REQUEST_CODES.contains(&self.code) {
            return Err(ValidationError::UnsupportedRequestType { code: self.code });
        }
        Ok(())
    }
}

impl Serialize for SignRequestData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        EnvelopeRef {
            code: self.code,
            data: &self.data,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SignRequestData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let envelope = Envelope::<RequestData>::deserialize(deserializer)?;
        if !REQUEST_CODES.contains(&envelope.code) {
            return Err(D::Error::custom(format!(
                "unsupported request type {}",
                envelope.code
            )));
        }
        Ok(SignRequestData {
            code: envelope.code,
            data: envelope.data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_codes_accepted() {
        for code in REQUEST_CODES {
            let json = format!(r#"{{"type":{code},"data":{{"timestamp":1700000000000}}}}"#);
            let req: SignRequestData = serde_json::from_str(&json).unwrap();
            assert_eq!(req.code, code);
            req.validate().unwrap();
        }
    }

    #[test]
    fn test_other_code_rejected() {
        assert!(serde_json::from_str::<SignRequestData>(
            r#"{"type":1002,"data":{"timestamp":1}}"#
        )
        .is_err());
    }

    #[test]
    fn test_round_trip() {
        let req = SignRequestData {
            code: 1001,
            data: RequestData {
                timestamp: NumberLike::Int(1_700_000_000_000),
                sender_public_key: None,
            },
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["type"], serde_json::json!(1001));
        let back: SignRequestData = serde_json::from_value(json).unwrap();
        assert_eq!(back, req);
    }
}
