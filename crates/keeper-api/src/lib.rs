//! Keeper SDK - The Keeper API trait and the stateful host implementation.
//!
//! [`KeeperApi`] names every operation the keeper exposes to a page.
//! [`ProtoKeeper`] is the crypto-only signer behind it; [`Keeper`] is the
//! stateful host (accounts, trust, pending messages, subscriptions), and
//! [`Keeper::session`] produces the per-origin view that implements the
//! trait. Publishing goes through the [`Publisher`] seam so the host
//! carries no transport of its own.

mod api;
mod error;
mod keeper;
mod proto;
mod publish;

pub mod prompt;
pub mod queue;
pub mod trust;

pub use api::{KeeperApi, UpdateSubscription, API_VERSION};
pub use error::KeeperError;
pub use keeper::{Keeper, KeeperConfig, KeeperSession};
pub use proto::{verify_sealed, ProtoKeeper};
pub use publish::{NullPublisher, PublishError, Publisher};
