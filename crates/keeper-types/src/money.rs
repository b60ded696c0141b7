//! Money values and the number-or-string scalars they are built from.

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Asset id of the network's native token.
pub const WAVES: &str = "WAVES";

/// A numeric value that may arrive as a JSON number or a decimal string.
///
/// Amounts can exceed the double-precision safe integer range, so the API
/// accepts strings everywhere it accepts numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberLike {
    /// Integral JSON number.
    Int(i64),
    /// Fractional JSON number (token-denominated values).
    Float(f64),
    /// Decimal string.
    Text(String),
}

impl NumberLike {
    /// Whether the value is negative.
    ///
    /// For strings this inspects the leading sign only; non-numeric text
    /// is treated as non-negative and left for the node to reject.
    pub fn is_negative(&self) -> bool {
        match self {
            NumberLike::Int(v) => *v < 0,
            NumberLike::Float(v) => *v < 0.0,
            NumberLike::Text(s) => s.trim_start().starts_with('-'),
        }
    }
}

impl std::fmt::Display for NumberLike {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumberLike::Int(v) => write!(f, "{v}"),
            NumberLike::Float(v) => write!(f, "{v}"),
            NumberLike::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for NumberLike {
    fn from(v: i64) -> Self {
        NumberLike::Int(v)
    }
}

impl From<&str> for NumberLike {
    fn from(v: &str) -> Self {
        NumberLike::Text(v.to_string())
    }
}

impl From<String> for NumberLike {
    fn from(v: String) -> Self {
        NumberLike::Text(v)
    }
}

/// Token-denominated money: whole-token units with fractions allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyTokens {
    /// Asset identifier in base58, or [`WAVES`] for the native token.
    pub asset_id: String,
    /// Value in whole tokens.
    pub tokens: NumberLike,
}

/// Coin-denominated money: smallest indivisible units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyCoins {
    /// Asset identifier in base58, or [`WAVES`] for the native token.
    pub asset_id: String,
    /// Value in coins.
    pub coins: NumberLike,
}

/// Coin-denominated money under the `amount` alias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyAmount {
    /// Asset identifier in base58, or [`WAVES`] for the native token.
    pub asset_id: String,
    /// Value in coins.
    pub amount: NumberLike,
}

/// A money value expressible three interchangeable ways, all keyed by an
/// asset identifier. The field present in the JSON selects the variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Money {
    /// `{assetId, tokens}`
    Tokens(MoneyTokens),
    /// `{assetId, coins}`
    Coins(MoneyCoins),
    /// `{assetId, amount}` — coins alias.
    Amount(MoneyAmount),
}

impl Money {
    /// Token-denominated constructor.
    pub fn tokens(asset_id: impl Into<String>, value: impl Into<NumberLike>) -> Self {
        Money::Tokens(MoneyTokens {
            asset_id: asset_id.into(),
            tokens: value.into(),
        })
    }

    /// Coin-denominated constructor.
    pub fn coins(asset_id: impl Into<String>, value: impl Into<NumberLike>) -> Self {
        Money::Coins(MoneyCoins {
            asset_id: asset_id.into(),
            coins: value.into(),
        })
    }

    /// Coin-denominated constructor under the `amount` alias.
    pub fn amount(asset_id: impl Into<String>, value: impl Into<NumberLike>) -> Self {
        Money::Amount(MoneyAmount {
            asset_id: asset_id.into(),
            amount: value.into(),
        })
    }

    /// The asset this value is denominated in.
    pub fn asset_id(&self) -> &str {
        match self {
            Money::Tokens(m) => &m.asset_id,
            Money::Coins(m) => &m.asset_id,
            Money::Amount(m) => &m.asset_id,
        }
    }

    /// The scalar value, regardless of denomination.
    pub fn value(&self) -> &NumberLike {
        match self {
            Money::Tokens(m) => &m.tokens,
            Money::Coins(m) => &m.coins,
            Money::Amount(m) => &m.amount,
        }
    }

    /// Reject negative values.
    pub fn validate(&self, field: &'static str) -> Result<(), ValidationError> {
        if self.value().is_negative() {
            return Err(ValidationError::NegativeAmount { field });
        }
        Ok(())
    }
}

/// A value the API types as `number | string | Money`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountLike {
    /// A full money object.
    Money(Money),
    /// A bare number or decimal string.
    Value(NumberLike),
}

impl AmountLike {
    /// Whether the value is negative.
    pub fn is_negative(&self) -> bool {
        match self {
            AmountLike::Money(m) => m.value().is_negative(),
            AmountLike::Value(v) => v.is_negative(),
        }
    }

    /// Reject negative values.
    pub fn validate(&self, field: &'static str) -> Result<(), ValidationError> {
        if self.is_negative() {
            return Err(ValidationError::NegativeAmount { field });
        }
        Ok(())
    }
}

impl From<i64> for AmountLike {
    fn from(v: i64) -> Self {
        AmountLike::Value(NumberLike::Int(v))
    }
}

impl From<Money> for AmountLike {
    fn from(m: Money) -> Self {
        AmountLike::Money(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_three_spellings() {
        let tokens: Money = serde_json::from_str(r#"{"assetId":"WAVES","tokens":"1.5"}"#).unwrap();
        assert!(matches!(tokens, Money::Tokens(_)));
        assert_eq!(tokens.asset_id(), "WAVES");

        let coins: Money = serde_json::from_str(r#"{"assetId":"WAVES","coins":150000000}"#).unwrap();
        assert!(matches!(coins, Money::Coins(_)));

        let amount: Money = serde_json::from_str(r#"{"assetId":"WAVES","amount":150000000}"#).unwrap();
        assert!(matches!(amount, Money::Amount(_)));
    }

    #[test]
    fn test_money_serializes_its_denomination() {
        let m = Money::coins(WAVES, 100000i64);
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json, serde_json::json!({"assetId": "WAVES", "coins": 100000}));
    }

    #[test]
    fn test_number_like_accepts_number_and_string() {
        let n: NumberLike = serde_json::from_str("42").unwrap();
        assert_eq!(n, NumberLike::Int(42));

        let n: NumberLike = serde_json::from_str("0.003").unwrap();
        assert_eq!(n, NumberLike::Float(0.003));

        let n: NumberLike = serde_json::from_str(r#""9007199254740993""#).unwrap();
        assert_eq!(n, NumberLike::Text("9007199254740993".to_string()));
    }

    #[test]
    fn test_negative_detection() {
        assert!(NumberLike::Int(-1).is_negative());
        assert!(NumberLike::Text("-5".into()).is_negative());
        assert!(!NumberLike::Text("5".into()).is_negative());
        assert!(Money::coins(WAVES, -1i64).validate("fee").is_err());
    }

    #[test]
    fn test_amount_like_shapes() {
        let a: AmountLike = serde_json::from_str("1000").unwrap();
        assert!(matches!(a, AmountLike::Value(NumberLike::Int(1000))));

        let a: AmountLike =
            serde_json::from_str(r#"{"assetId":"WAVES","coins":"7"}"#).unwrap();
        assert!(matches!(a, AmountLike::Money(Money::Coins(_))));
    }
}
