//! Typed invocation arguments and data entries.
//!
//! Script invocations and data transactions carry the same four value
//! kinds, tagged by a `type` string; data entries additionally carry a key.

use serde::{Deserialize, Serialize};

use crate::money::NumberLike;

/// A typed argument value: `{"type": ..., "value": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CallArg {
    /// Integral value, number or decimal string.
    Integer { value: NumberLike },
    /// Boolean value.
    Boolean { value: bool },
    /// Binary value, base64-encoded.
    Binary { value: String },
    /// String value.
    String { value: String },
}

/// A function invocation on a dApp: name plus typed arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    /// Function name.
    pub function: String,
    /// Positional arguments.
    pub args: Vec<CallArg>,
}

/// A data-transaction entry: a typed value under a key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEntry {
    /// Entry key.
    pub key: String,
    /// Typed value, flattened alongside the key.
    #[serde(flatten)]
    pub value: CallArg,
}
