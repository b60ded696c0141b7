//! The stateful keeper host and its per-origin sessions.
//!
//! [`Keeper`] owns accounts, the network configuration, the per-origin
//! trust store, and the pending-message queue. A page-facing view is
//! obtained with [`Keeper::session`]; the origin plays the role the page's
//! location plays for the browser extension. Every state transition
//! publishes a fresh public-state snapshot to subscribers.

use std::sync::{Mutex, MutexGuard};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use tokio::sync::{broadcast, Notify};
use tracing::debug;

use keeper_primitives::{Address, KeyPair, PublicKey};
use keeper_types::transactions::validate_package;
use keeper_types::versions::default_tx_versions;
use keeper_types::{
    AccountBalance, AuthData, AuthResponse, MessageState, NetworkConfig, NotificationData,
    PublicState, PublicStateAccount, SignCancelOrderData, SignOrderData, SignRequestData,
    TransactionData,
};

use crate::api::{KeeperApi, UpdateSubscription};
use crate::error::KeeperError;
use crate::prompt::{AutoApprove, Decision, PromptHandler};
use crate::proto::ProtoKeeper;
use crate::publish::{NullPublisher, Publisher};
use crate::queue::{MessageKind, MessageQueue, PendingMessage};
use crate::trust::TrustStore;

/// Snapshots buffered per update subscriber.
const UPDATE_CHANNEL_CAPACITY: usize = 16;

/// Network the keeper starts on.
#[derive(Debug, Clone)]
pub struct KeeperConfig {
    /// Network display name (e.g. `mainnet`).
    pub network_name: String,
    /// Chain code, node, and matcher addresses.
    pub network: NetworkConfig,
}

impl Default for KeeperConfig {
    fn default() -> Self {
        KeeperConfig {
            network_name: "mainnet".to_string(),
            network: NetworkConfig {
                code: "W".to_string(),
                server: "https://nodes.wavesnodes.com".to_string(),
                matcher: "https://matcher.waves.exchange".to_string(),
            },
        }
    }
}

impl KeeperConfig {
    /// The standard testnet configuration.
    pub fn testnet() -> Self {
        KeeperConfig {
            network_name: "testnet".to_string(),
            network: NetworkConfig {
                code: "T".to_string(),
                server: "https://nodes-testnet.wavesnodes.com".to_string(),
                matcher: "https://matcher-testnet.waves.exchange".to_string(),
            },
        }
    }
}

/// One account held by the keeper.
#[derive(Debug, Clone)]
struct StoredAccount {
    name: String,
    keys: KeyPair,
    available: String,
    leased_out: String,
}

#[derive(Debug)]
struct KeeperState {
    accounts: Vec<StoredAccount>,
    selected: Option<usize>,
    locked: bool,
    network_name: String,
    network: NetworkConfig,
    trust: TrustStore,
    queue: MessageQueue,
}

impl KeeperState {
    fn initialized(&self) -> bool {
        !self.accounts.is_empty()
    }

    fn chain_id(&self) -> u8 {
        self.network.code.bytes().next().unwrap_or(b'W')
    }

    fn selected_account(&self) -> Option<&StoredAccount> {
        self.selected.and_then(|i| self.accounts.get(i))
    }

    fn snapshot(&self) -> PublicState {
        let account = self.selected_account().map(|account| PublicStateAccount {
            name: account.name.clone(),
            public_key: account.keys.public_key().to_base58(),
            address: Address::from_public_key(&account.keys.public_key(), self.chain_id())
                .to_base58(),
            network_code: self.network.code.clone(),
            network: self.network_name.clone(),
            balance: AccountBalance {
                available: account.available.clone(),
                leased_out: account.leased_out.clone(),
                network: self.network_name.clone(),
            },
            account_type: "seed".to_string(),
        });

        PublicState {
            initialized: self.initialized(),
            locked: self.locked,
            account,
            network: self.network.clone(),
            messages: self.queue.statuses(),
            tx_version: default_tx_versions(),
        }
    }
}

/// The keeper host.
///
/// Generic over the [`Publisher`] used by the sign-and-publish
/// operations; the default [`NullPublisher`] fails them as unconfigured.
pub struct Keeper<P = NullPublisher> {
    state: Mutex<KeeperState>,
    updates: broadcast::Sender<PublicState>,
    ready: Notify,
    prompt: Box<dyn PromptHandler>,
    publisher: P,
}

impl Keeper<NullPublisher> {
    /// A keeper with no publishing backend.
    pub fn new(config: KeeperConfig) -> Self {
        Self::with_publisher(config, NullPublisher)
    }
}

impl<P: Publisher> Keeper<P> {
    /// A keeper that broadcasts through `publisher`.
    pub fn with_publisher(config: KeeperConfig, publisher: P) -> Self {
        let (updates, _) = broadcast::channel(UPDATE_CHANNEL_CAPACITY);
        Keeper {
            state: Mutex::new(KeeperState {
                accounts: Vec::new(),
                selected: None,
                locked: false,
                network_name: config.network_name,
                network: config.network,
                trust: TrustStore::default(),
                queue: MessageQueue::default(),
            }),
            updates,
            ready: Notify::new(),
            prompt: Box::new(AutoApprove),
            publisher,
        }
    }

    /// Replace the approval seam. Defaults to [`AutoApprove`].
    pub fn set_prompt(&mut self, handler: impl PromptHandler + 'static) {
        self.prompt = Box::new(handler);
    }

    /// Add an account. The first account initializes the keeper and
    /// becomes the selected one.
    pub fn add_account(&self, name: impl Into<String>, keys: KeyPair) {
        let name = name.into();
        {
            let mut state = self.state();
            state.accounts.push(StoredAccount {
                name: name.clone(),
                keys,
                available: "0".to_string(),
                leased_out: "0".to_string(),
            });
            if state.selected.is_none() {
                state.selected = Some(state.accounts.len() - 1);
            }
        }
        debug!(account = %name, "account added");
        self.ready.notify_waiters();
        self.emit_update();
    }

    /// Select the current account by name.
    pub fn select_account(&self, name: &str) -> Result<(), KeeperError> {
        {
            let mut state = self.state();
            let index = state
                .accounts
                .iter()
                .position(|a| a.name == name)
                .ok_or_else(|| KeeperError::UnknownAccount {
                    name: name.to_string(),
                })?;
            state.selected = Some(index);
        }
        self.emit_update();
        Ok(())
    }

    /// Update an account's balance strings, as observed on the network.
    pub fn set_balance(
        &self,
        name: &str,
        available: impl Into<String>,
        leased_out: impl Into<String>,
    ) -> Result<(), KeeperError> {
        {
            let mut state = self.state();
            let account = state
                .accounts
                .iter_mut()
                .find(|a| a.name == name)
                .ok_or_else(|| KeeperError::UnknownAccount {
                    name: name.to_string(),
                })?;
            account.available = available.into();
            account.leased_out = leased_out.into();
        }
        self.emit_update();
        Ok(())
    }

    /// Lock the keeper. Signing operations fail until unlocked.
    pub fn lock(&self) {
        self.state().locked = true;
        debug!("keeper locked");
        self.emit_update();
    }

    /// Unlock the keeper.
    pub fn unlock(&self) {
        self.state().locked = false;
        debug!("keeper unlocked");
        self.emit_update();
    }

    /// Switch networks.
    pub fn set_network(&self, name: impl Into<String>, network: NetworkConfig) {
        {
            let mut state = self.state();
            state.network_name = name.into();
            state.network = network;
        }
        self.emit_update();
    }

    /// Allow an origin without going through `auth`.
    pub fn trust(&self, origin: &str) {
        self.state().trust.grant(origin);
        self.emit_update();
    }

    /// Withdraw an origin's access.
    pub fn revoke(&self, origin: &str) {
        self.state().trust.revoke(origin);
        debug!(origin, "origin revoked");
        self.emit_update();
    }

    /// The publisher backing the sign-and-publish operations.
    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    /// A page-facing view of this keeper for one origin.
    pub fn session(&self, origin: impl Into<String>) -> KeeperSession<'_, P> {
        KeeperSession {
            keeper: self,
            origin: origin.into(),
        }
    }

    fn state(&self) -> MutexGuard<'_, KeeperState> {
        self.state.lock().expect("keeper state lock poisoned")
    }

    fn emit_update(&self) {
        let snapshot = self.state().snapshot();
        // No subscribers is fine.
        let _ = self.updates.send(snapshot);
    }

    fn now_ms() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    }
}

/// A per-origin view of a [`Keeper`], implementing the full API surface.
pub struct KeeperSession<'k, P = NullPublisher> {
    keeper: &'k Keeper<P>,
    origin: String,
}

impl<'k, P: Publisher> KeeperSession<'k, P> {
    /// The origin this session speaks for.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Gate a signing operation and build the signer for the selected
    /// account. `require_trust` is lifted only for `auth`, which is how an
    /// origin earns trust in the first place.
    fn signer(&self, require_trust: bool) -> Result<ProtoKeeper, KeeperError> {
        let state = self.keeper.state();
        if !state.initialized() {
            return Err(KeeperError::NotInitialized);
        }
        if state.locked {
            return Err(KeeperError::Locked);
        }
        if require_trust && !state.trust.is_trusted(&self.origin) {
            return Err(KeeperError::NotTrusted {
                origin: self.origin.clone(),
            });
        }
        let account = state.selected_account().ok_or(KeeperError::NoAccount)?;
        Ok(ProtoKeeper::new(account.keys.clone(), state.chain_id()))
    }

    fn enqueue(&self, kind: MessageKind, title: Option<String>) -> PendingMessage {
        let message = {
            let mut state = self.keeper.state();
            state.queue.enqueue(&self.origin, kind, title)
        };
        self.keeper.emit_update();
        message
    }

    fn finish(&self, id: &str, status: MessageState) {
        self.keeper.state().queue.set_status(id, status);
        debug!(id, %status, origin = %self.origin, "request finished");
        self.keeper.emit_update();
    }

    /// Ask the user; a rejection parks the entry and surfaces as an error.
    fn approve(&self, message: &PendingMessage) -> Result<(), KeeperError> {
        match self.keeper.prompt.decide(message) {
            Decision::Approved => Ok(()),
            Decision::Rejected => {
                self.finish(&message.id, MessageState::Rejected);
                Err(KeeperError::RejectedByUser {
                    id: message.id.clone(),
                })
            }
        }
    }
}

impl<P: Publisher> KeeperApi for KeeperSession<'_, P> {
    async fn auth(&self, data: AuthData) -> Result<AuthResponse, KeeperError> {
        let signer = self.signer(false)?;
        let message = self.enqueue(MessageKind::Auth, data.name.clone());
        self.approve(&message)?;

        // Approval is what makes the origin trusted.
        self.keeper.state().trust.grant(&self.origin);
        let response = signer.sign_auth(&self.origin, &data);
        self.finish(&message.id, MessageState::Signed);
        Ok(response)
    }

    async fn public_state(&self) -> Result<PublicState, KeeperError> {
        let state = self.keeper.state();
        if !state.initialized() {
            return Err(KeeperError::NotInitialized);
        }
        if !state.trust.is_trusted(&self.origin) {
            return Err(KeeperError::NotTrusted {
                origin: self.origin.clone(),
            });
        }
        Ok(state.snapshot())
    }

    async fn sign_transaction(&self, data: TransactionData) -> Result<String, KeeperError> {
        data.validate()?;
        let signer = self.signer(true)?;
        let message = self.enqueue(
            MessageKind::Transaction {
                code: data.type_code(),
            },
            None,
        );
        self.approve(&message)?;

        let signed = signer.sign_transaction(data, Keeper::<P>::now_ms())?;
        self.finish(&message.id, MessageState::Signed);
        Ok(signed.to_string())
    }

    async fn sign_and_publish_transaction(
        &self,
        data: TransactionData,
    ) -> Result<String, KeeperError> {
        data.validate()?;
        let signer = self.signer(true)?;
        let message = self.enqueue(
            MessageKind::Transaction {
                code: data.type_code(),
            },
            None,
        );
        self.approve(&message)?;

        let signed = signer.sign_transaction(data, Keeper::<P>::now_ms())?;
        self.finish(&message.id, MessageState::Signed);

        match self.keeper.publisher.publish_transaction(&signed).await {
            Ok(_) => {
                self.finish(&message.id, MessageState::Published);
                Ok(signed.to_string())
            }
            Err(e) => {
                debug!(id = %message.id, error = %e, "publish failed");
                self.finish(&message.id, MessageState::Failed);
                Err(e.into())
            }
        }
    }

    async fn sign_order(&self, data: SignOrderData) -> Result<String, KeeperError> {
        data.data.validate()?;
        let signer = self.signer(true)?;
        let message = self.enqueue(MessageKind::Order, None);
        self.approve(&message)?;

        let signed = signer.sign_order(data.data, Keeper::<P>::now_ms())?;
        self.finish(&message.id, MessageState::Signed);
        Ok(signed.to_string())
    }

    async fn sign_and_publish_order(&self, data: SignOrderData) -> Result<String, KeeperError> {
        data.data.validate()?;
        let signer = self.signer(true)?;
        let message = self.enqueue(MessageKind::Order, None);
        self.approve(&message)?;

        let signed = signer.sign_order(data.data, Keeper::<P>::now_ms())?;
        self.finish(&message.id, MessageState::Signed);

        match self.keeper.publisher.publish_order(&signed).await {
            Ok(_) => {
                self.finish(&message.id, MessageState::Published);
                Ok(signed.to_string())
            }
            Err(e) => {
                debug!(id = %message.id, error = %e, "order placement failed");
                self.finish(&message.id, MessageState::Failed);
                Err(e.into())
            }
        }
    }

    async fn sign_cancel_order(&self, data: SignCancelOrderData) -> Result<String, KeeperError> {
        let signer = self.signer(true)?;
        let message = self.enqueue(MessageKind::CancelOrder, None);
        self.approve(&message)?;

        let signed = signer.sign_cancel_order(data.data)?;
        self.finish(&message.id, MessageState::Signed);
        Ok(signed.to_string())
    }

    async fn sign_and_publish_cancel_order(
        &self,
        data: SignCancelOrderData,
    ) -> Result<String, KeeperError> {
        let signer = self.signer(true)?;
        let message = self.enqueue(MessageKind::CancelOrder, None);
        self.approve(&message)?;

        let signed = signer.sign_cancel_order(data.data)?;
        self.finish(&message.id, MessageState::Signed);

        match self.keeper.publisher.cancel_order(&signed).await {
            Ok(_) => {
                self.finish(&message.id, MessageState::Published);
                Ok(signed.to_string())
            }
            Err(e) => {
                debug!(id = %message.id, error = %e, "order cancellation failed");
                self.finish(&message.id, MessageState::Failed);
                Err(e.into())
            }
        }
    }

    async fn sign_request(&self, data: SignRequestData) -> Result<String, KeeperError> {
        data.validate()?;
        let signer = self.signer(true)?;
        let message = self.enqueue(MessageKind::Request { code: data.code }, None);
        self.approve(&message)?;

        let signature = signer.sign_request(&data)?;
        self.finish(&message.id, MessageState::Signed);
        Ok(signature)
    }

    async fn sign_transaction_package(
        &self,
        data: Vec<TransactionData>,
        name: Option<String>,
    ) -> Result<Vec<String>, KeeperError> {
        validate_package(&data)?;
        let signer = self.signer(true)?;
        let message = self.enqueue(MessageKind::Package { size: data.len() }, name);
        self.approve(&message)?;

        let now = Keeper::<P>::now_ms();
        let mut signed = Vec::with_capacity(data.len());
        for tx in data {
            match signer.sign_transaction(tx, now) {
                Ok(value) => signed.push(value.to_string()),
                Err(e) => {
                    self.finish(&message.id, MessageState::Failed);
                    return Err(e);
                }
            }
        }
        self.finish(&message.id, MessageState::Signed);
        Ok(signed)
    }

    async fn notification(&self, data: NotificationData) -> Result<(), KeeperError> {
        data.validate()?;
        let mut state = self.keeper.state();
        if !state.initialized() {
            return Err(KeeperError::NotInitialized);
        }
        if !state.trust.is_trusted(&self.origin) {
            return Err(KeeperError::NotTrusted {
                origin: self.origin.clone(),
            });
        }
        state
            .trust
            .record_notification(&self.origin, Instant::now())
            .map_err(|wait| KeeperError::NotificationThrottled {
                origin: self.origin.clone(),
                retry_in_secs: wait.as_secs(),
            })?;
        debug!(origin = %self.origin, title = %data.title, "notification accepted");
        Ok(())
    }

    async fn encrypt_message(
        &self,
        message: &str,
        public_key: &str,
        prefix: &str,
    ) -> Result<String, KeeperError> {
        let signer = self.signer(true)?;
        let recipient = PublicKey::from_base58(public_key)?;
        signer.encrypt_message(message, &recipient, prefix)
    }

    async fn decrypt_message(
        &self,
        message: &str,
        public_key: &str,
        prefix: &str,
    ) -> Result<String, KeeperError> {
        let signer = self.signer(true)?;
        let sender = PublicKey::from_base58(public_key)?;
        signer.decrypt_message(message, &sender, prefix)
    }

    fn updates(&self) -> Result<UpdateSubscription, KeeperError> {
        let state = self.keeper.state();
        if !state.trust.is_trusted(&self.origin) {
            return Err(KeeperError::NotTrusted {
                origin: self.origin.clone(),
            });
        }
        Ok(UpdateSubscription::new(self.keeper.updates.subscribe()))
    }

    async fn ready(&self) -> Result<(), KeeperError> {
        loop {
            let notified = self.keeper.ready.notified();
            if self.keeper.state().initialized() {
                return Ok(());
            }
            notified.await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::AutoReject;
    use keeper_types::transactions::{TransferTx, TxCommon};
    use keeper_types::{Money, WAVES};

    const ORIGIN: &str = "https://dex.example";

    fn keeper() -> Keeper {
        let keeper = Keeper::new(KeeperConfig::testnet());
        keeper.add_account("main", KeyPair::from_seed("host test seed", 0));
        keeper
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

    #[tokio::test]
    async fn test_auth_grants_trust() {
        let keeper = keeper();
        let session = keeper.session(ORIGIN);

        assert!(matches!(
            session.public_state().await,
            Err(KeeperError::NotTrusted { .. })
        ));

        let response = session
            .auth(AuthData {
                data: "nonce".into(),
                name: Some("dex".into()),
                referrer: None,
                icon: None,
                success_path: None,
            })
            .await
            .unwrap();
        assert_eq!(response.host, ORIGIN);

        let state = session.public_state().await.unwrap();
        assert!(state.initialized);
        assert!(!state.locked);
        let account = state.account.unwrap();
        assert_eq!(account.name, "main");
        assert_eq!(account.network_code, "T");
    }

    #[tokio::test]
    async fn test_uninitialized_keeper_refuses() {
        let keeper = Keeper::new(KeeperConfig::default());
        let session = keeper.session(ORIGIN);
        assert!(matches!(
            session.sign_transaction(transfer()).await,
            Err(KeeperError::NotInitialized)
        ));
    }

    #[tokio::test]
    async fn test_locked_keeper_refuses_signing() {
        let keeper = keeper();
        keeper.trust(ORIGIN);
        keeper.lock();
        let session = keeper.session(ORIGIN);
        assert!(matches!(
            session.sign_transaction(transfer()).await,
            Err(KeeperError::Locked)
        ));

        keeper.unlock();
        session.sign_transaction(transfer()).await.unwrap();
    }

    #[tokio::test]
    async fn test_sign_transaction_records_status() {
        let keeper = keeper();
        keeper.trust(ORIGIN);
        let session = keeper.session(ORIGIN);

        let signed = session.sign_transaction(transfer()).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&signed).unwrap();
        assert_eq!(value["type"], 4);
        assert!(value["proofs"][0].is_string());

        let state = session.public_state().await.unwrap();
        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].status, MessageState::Signed);
    }

    #[tokio::test]
    async fn test_rejection_parks_message() {
        let mut keeper = Keeper::new(KeeperConfig::testnet());
        keeper.set_prompt(AutoReject);
        keeper.add_account("main", KeyPair::from_seed("host test seed", 0));
        keeper.trust(ORIGIN);
        let session = keeper.session(ORIGIN);

        let err = session.sign_transaction(transfer()).await.unwrap_err();
        let KeeperError::RejectedByUser { id } = err else {
            panic!("expected rejection, got {err}");
        };

        let state = session.public_state().await.unwrap();
        assert_eq!(state.messages[0].id, id);
        assert_eq!(state.messages[0].status, MessageState::Rejected);
    }

    #[tokio::test]
    async fn test_package_size_and_membership() {
        let keeper = keeper();
        keeper.trust(ORIGIN);
        let session = keeper.session(ORIGIN);

        let signed = session
            .sign_transaction_package(vec![transfer(), transfer()], Some("batch".into()))
            .await
            .unwrap();
        assert_eq!(signed.len(), 2);

        let too_many: Vec<_> = (0..8).map(|_| transfer()).collect();
        assert!(matches!(
            session.sign_transaction_package(too_many, None).await,
            Err(KeeperError::InvalidRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_notification_requires_trust_and_throttles() {
        let keeper = keeper();
        let session = keeper.session(ORIGIN);
        let note = NotificationData {
            title: "hello".into(),
            message: None,
        };

        assert!(matches!(
            session.notification(note.clone()).await,
            Err(KeeperError::NotTrusted { .. })
        ));

        keeper.trust(ORIGIN);
        session.notification(note.clone()).await.unwrap();
        assert!(matches!(
            session.notification(note).await,
            Err(KeeperError::NotificationThrottled { .. })
        ));
    }

    #[tokio::test]
    async fn test_updates_emitted_on_transitions() {
        let keeper = keeper();
        keeper.trust(ORIGIN);
        let session = keeper.session(ORIGIN);
        let mut updates = session.updates().unwrap();

        keeper.lock();
        let snapshot = updates.recv().await.unwrap();
        assert!(snapshot.locked);

        keeper.unlock();
        let snapshot = updates.recv().await.unwrap();
        assert!(!snapshot.locked);
    }

    #[tokio::test]
    async fn test_updates_require_trust() {
        let keeper = keeper();
        let session = keeper.session(ORIGIN);
        assert!(matches!(
            session.updates(),
            Err(KeeperError::NotTrusted { .. })
        ));
    }

    #[tokio::test]
    async fn test_ready_resolves_after_first_account() {
        let keeper = std::sync::Arc::new(Keeper::new(KeeperConfig::default()));

        let waiter = {
            let keeper = keeper.clone();
            tokio::spawn(async move {
                keeper.session("https://any.example").ready().await
            })
        };

        tokio::task::yield_now().await;
        keeper.add_account("main", KeyPair::from_seed("host test seed", 0));
        waiter.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_message_round_trip_between_accounts() {
        let alice_keeper = keeper();
        alice_keeper.trust(ORIGIN);
        let alice = alice_keeper.session(ORIGIN);

        let bob_keys = KeyPair::from_seed("bob host seed", 0);
        let bob_keeper = Keeper::new(KeeperConfig::testnet());
        bob_keeper.add_account("bob", bob_keys.clone());
        bob_keeper.trust(ORIGIN);
        let bob = bob_keeper.session(ORIGIN);

        let alice_pk = alice_keeper.state().selected_account().unwrap().keys.public_key();

        let sealed = alice
            .encrypt_message("rendezvous", &bob_keys.public_key().to_base58(), "app")
            .await
            .unwrap();
        let opened = bob
            .decrypt_message(&sealed, &alice_pk.to_base58(), "app")
            .await
            .unwrap();
        assert_eq!(opened, "rendezvous");
    }

    #[tokio::test]
    async fn test_select_account_switches_state() {
        let keeper = keeper();
        keeper.add_account("second", KeyPair::from_seed("host test seed", 1));
        keeper.trust(ORIGIN);
        let session = keeper.session(ORIGIN);

        keeper.select_account("second").unwrap();
        let state = session.public_state().await.unwrap();
        assert_eq!(state.account.unwrap().name, "second");

        assert!(matches!(
            keeper.select_account("missing"),
            Err(KeeperError::UnknownAccount { .. })
        ));
    }
}
