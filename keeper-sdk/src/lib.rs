#![deny(missing_docs)]

//! Keeper SDK - Complete SDK.
//!
//! Re-exports all Keeper SDK components for convenient single-crate usage.

pub use keeper_primitives as primitives;
pub use keeper_types as types;
pub use keeper_message as message;
pub use keeper_api as api;
pub use keeper_node as node;
