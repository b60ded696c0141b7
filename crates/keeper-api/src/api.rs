//! The Keeper API trait: the full operation set the keeper exposes to a
//! page, one async method per declared operation.

use std::future::Future;

use tokio::sync::broadcast;

use keeper_types::{
    AuthData, AuthResponse, NotificationData, PublicState, SignCancelOrderData, SignOrderData,
    SignRequestData, TransactionData,
};

use crate::error::KeeperError;

/// API version reported in auth responses.
pub const API_VERSION: u32 = 1;

/// The operations the keeper exposes to a page.
///
/// Methods that sign return the signed payload as a JSON string; the
/// publish variants additionally broadcast it before resolving.
pub trait KeeperApi {
    /// Sign site-supplied challenge data, identifying the current account.
    fn auth(&self, data: AuthData) -> impl Future<Output = Result<AuthResponse, KeeperError>> + Send;

    /// Snapshot of the keeper's public data, for trusted origins.
    fn public_state(&self) -> impl Future<Output = Result<PublicState, KeeperError>> + Send;

    /// Sign a transaction.
    fn sign_transaction(
        &self,
        data: TransactionData,
    ) -> impl Future<Output = Result<String, KeeperError>> + Send;

    /// Sign a transaction and broadcast it to the node.
    fn sign_and_publish_transaction(
        &self,
        data: TransactionData,
    ) -> impl Future<Output = Result<String, KeeperError>> + Send;

    /// Sign an order to the matcher.
    fn sign_order(
        &self,
        data: SignOrderData,
    ) -> impl Future<Output = Result<String, KeeperError>> + Send;

    /// Sign an order and send it to the matcher.
    fn sign_and_publish_order(
        &self,
        data: SignOrderData,
    ) -> impl Future<Output = Result<String, KeeperError>> + Send;

    /// Sign a cancellation of an order to the matcher.
    fn sign_cancel_order(
        &self,
        data: SignCancelOrderData,
    ) -> impl Future<Output = Result<String, KeeperError>> + Send;

    /// Sign a cancellation and send it to the matcher.
    fn sign_and_publish_cancel_order(
        &self,
        data: SignCancelOrderData,
    ) -> impl Future<Output = Result<String, KeeperError>> + Send;

    /// Sign a typed request for an external service, returning the base58
    /// signature.
    fn sign_request(
        &self,
        data: SignRequestData,
    ) -> impl Future<Output = Result<String, KeeperError>> + Send;

    /// Sign up to seven transactions under a single approval.
    ///
    /// Only issue, transfer, reissue, burn, create-alias, mass-transfer,
    /// data, and script-invocation payloads are permitted.
    fn sign_transaction_package(
        &self,
        data: Vec<TransactionData>,
        name: Option<String>,
    ) -> impl Future<Output = Result<Vec<String>, KeeperError>> + Send;

    /// Push a notification to the keeper's UI. Trusted origins only, one
    /// per origin per 30 seconds.
    fn notification(
        &self,
        data: NotificationData,
    ) -> impl Future<Output = Result<(), KeeperError>> + Send;

    /// Encrypt a string message for the holder of `public_key` (base58).
    fn encrypt_message(
        &self,
        message: &str,
        public_key: &str,
        prefix: &str,
    ) -> impl Future<Output = Result<String, KeeperError>> + Send;

    /// Decrypt a string message from the holder of `public_key` (base58).
    fn decrypt_message(
        &self,
        message: &str,
        public_key: &str,
        prefix: &str,
    ) -> impl Future<Output = Result<String, KeeperError>> + Send;

    /// Subscribe to public-state updates. Trusted origins only.
    fn updates(&self) -> Result<UpdateSubscription, KeeperError>;

    /// Resolves once the keeper is initialized (the initial-promise
    /// contract: the page waits for the API before using it).
    fn ready(&self) -> impl Future<Output = Result<(), KeeperError>> + Send;
}

/// A subscription to public-state snapshots.
///
/// Emitted on every state transition: lock and unlock, account and network
/// changes, and message status changes.
pub struct UpdateSubscription {
    rx: broadcast::Receiver<PublicState>,
}

impl UpdateSubscription {
    pub(crate) fn new(rx: broadcast::Receiver<PublicState>) -> Self {
        UpdateSubscription { rx }
    }

    /// The next state snapshot, or `None` once the keeper is gone.
    ///
    /// A slow subscriber that misses snapshots resumes with the next one.
    pub async fn recv(&mut self) -> Option<PublicState> {
        loop {
            match self.rx.recv().await {
                Ok(state) => return Some(state),
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}
