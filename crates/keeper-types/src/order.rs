//! Matcher order payloads and their signing envelopes (codes 1002/1003).

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::envelope::{Envelope, EnvelopeRef};
use crate::money::{Money, NumberLike};
use crate::ValidationError;

/// Envelope code for placing an order.
pub const TYPE_ORDER: u16 = 1002;
/// Envelope code for cancelling an order.
pub const TYPE_CANCEL_ORDER: u16 = 1003;

/// Which side of the book an order sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// Sell the amount asset.
    Sell,
    /// Buy the amount asset.
    Buy,
}

/// An order to the matcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderData {
    /// Amount to trade.
    pub amount: Money,
    /// Price per unit.
    pub price: Money,
    /// `sell` or `buy`.
    pub order_type: OrderSide,
    /// Matcher fee (0.003 native tokens minimum).
    pub matcher_fee: Money,
    /// The public key of the exchange service.
    pub matcher_public_key: String,
    /// The order's expiration time, ms.
    pub expiration: NumberLike,
    /// Current time, ms. Filled by the keeper when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<NumberLike>,
    /// Sender's public key in base58. Filled by the keeper when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_public_key: Option<String>,
}

impl OrderData {
    /// Reject negative money fields.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.amount.validate("amount")?;
        self.price.validate("price")?;
        self.matcher_fee.validate("matcherFee")
    }
}

/// A request to cancel an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderData {
    /// The order id.
    pub id: String,
    /// Sender's public key in base58. Filled by the keeper when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_public_key: Option<String>,
}

/// The signing envelope for an order: `{"type": 1002, "data": ...}`.
#[derive(Debug, Clone, PartialEq)]
pub struct SignOrderData {
    /// The order body.
    pub data: OrderData,
}

impl Serialize for SignOrderData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        EnvelopeRef {
            code: TYPE_ORDER,
            data: &self.data,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SignOrderData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let envelope = Envelope::<OrderData>::deserialize(deserializer)?;
        if envelope.code != TYPE_ORDER {
            return Err(D::Error::custom(format!(
                "expected order type {TYPE_ORDER}, got {}",
                envelope.code
            )));
        }
        Ok(SignOrderData {
            data: envelope.data,
        })
    }
}

/// The signing envelope for an order cancellation: `{"type": 1003, "data": ...}`.
#[derive(Debug, Clone, PartialEq)]
pub struct SignCancelOrderData {
    /// The cancellation body.
    pub data: CancelOrderData,
}

impl Serialize for SignCancelOrderData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        EnvelopeRef {
            code: TYPE_CANCEL_ORDER,
            data: &self.data,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SignCancelOrderData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let envelope = Envelope::<CancelOrderData>::deserialize(deserializer)?;
        if envelope.code != TYPE_CANCEL_ORDER {
            return Err(D::Error::custom(format!(
                "expected cancel-order type {TYPE_CANCEL_ORDER}, got {}",
                envelope.code
            )));
        }
        Ok(SignCancelOrderData {
            data: envelope.data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::WAVES;

    fn order() -> SignOrderData {
        SignOrderData {
            data: OrderData {
                amount: Money::tokens("8LQW8f7P5d5PZM7GtZEBgaqRPGSzS3DfPuiXrURJ4AJS", "10"),
                price: Money::tokens(WAVES, "0.1"),
                order_type: OrderSide::Buy,
                matcher_fee: Money::tokens(WAVES, "0.003"),
                matcher_public_key: "7kPFrHDiGw1rCm7LPszuECwWYL3dMf6iMifLRDJQZMzy".into(),
                expiration: NumberLike::Int(1_724_000_000_000),
                timestamp: None,
                sender_public_key: None,
            },
        }
    }

    #[test]
    fn test_order_envelope_round_trip() {
        let json = serde_json::to_value(order()).unwrap();
        assert_eq!(json["type"], serde_json::json!(1002));
        assert_eq!(json["data"]["orderType"], "buy");
        let back: SignOrderData = serde_json::from_value(json).unwrap();
        assert_eq!(back, order());
    }

    #[test]
    fn test_cancel_envelope_round_trip() {
        let cancel = SignCancelOrderData {
            data: CancelOrderData {
                id: "CGWrDwzSgy1pXBC2ryYTTekRRSDJBrJcEhVRCBZNeVbh".into(),
                sender_public_key: None,
            },
        };
        let json = serde_json::to_value(&cancel).unwrap();
        assert_eq!(json["type"], serde_json::json!(1003));
        let back: SignCancelOrderData = serde_json::from_value(json).unwrap();
        assert_eq!(back, cancel);
    }

    #[test]
    fn test_wrong_code_rejected() {
        let err = serde_json::from_str::<SignOrderData>(
            r#"{"type":1003,"data":{"id":"x"}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("expected order type 1002"));
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut o = order();
        o.data.price = Money::tokens(WAVES, "-0.1");
        assert!(matches!(
            o.data.validate(),
            Err(ValidationError::NegativeAmount { field: "price" })
        ));
    }
}
