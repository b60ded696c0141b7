//! Authentication challenge and response shapes.

use serde::{Deserialize, Serialize};

/// Fixed prefix participating in every auth signature.
///
/// Binding the prefix into the signed payload keeps auth signatures from
/// being replayed as transaction or order signatures.
pub const AUTH_PREFIX: &str = "WavesWalletAuthentication";

/// Site-supplied authorization challenge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthData {
    /// Arbitrary challenge data chosen by the site.
    pub data: String,
    /// Name of the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The website's full URL for redirect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
    /// Path to the logo relative to the referrer or origin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Relative path to the website's auth API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_path: Option<String>,
}

/// Signed identity response to an auth challenge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// The account address.
    pub address: String,
    /// The host that requested the signature.
    pub host: String,
    /// The prefix participating in the signature ([`AUTH_PREFIX`]).
    pub prefix: String,
    /// The account public key in base58.
    pub public_key: String,
    /// The signature in base58.
    pub signature: String,
    /// API version.
    pub version: u32,
    /// The name of the application that requested the signature.
    pub name: String,
}
