//! Keeper SDK - Typed payloads of the Keeper API surface.
//!
//! Everything the Keeper API exchanges with a page, as serde-round-trippable
//! data: money values, transaction payloads and their numeric-tag signing
//! envelopes, matcher orders, custom sign requests, authentication
//! challenges and responses, the public state snapshot, and notifications.
//!
//! Field names serialize in camelCase, matching the JSON the API documents.
//! Structural bounds the API documents (name lengths, precision, attachment
//! size, package membership) are enforced by `validate()` methods.

pub mod money;
pub mod args;
pub mod transactions;
pub mod order;
pub mod request;
pub mod auth;
pub mod state;
pub mod notification;
pub mod versions;

mod envelope;
mod error;

pub use error::ValidationError;

pub use args::{Call, CallArg, DataEntry};
pub use auth::{AuthData, AuthResponse, AUTH_PREFIX};
pub use money::{AmountLike, Money, NumberLike, WAVES};
pub use notification::NotificationData;
pub use order::{CancelOrderData, OrderData, OrderSide, SignCancelOrderData, SignOrderData};
pub use request::{RequestData, SignRequestData};
pub use state::{AccountBalance, MessageState, MessageStatus, NetworkConfig, PublicState, PublicStateAccount};
pub use transactions::{Attachment, TransactionData, TxCommon};
