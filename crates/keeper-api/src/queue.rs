//! The pending-message queue backing the `messages` field of the public
//! state.
//!
//! Every signature request passes through the queue:
//! `unapproved → signed | rejected`, and for the publish variants
//! `signed → published | failed`.

use keeper_types::{MessageState, MessageStatus};

/// What a pending request asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageKind {
    /// An authentication challenge.
    Auth,
    /// A single transaction, by type code.
    Transaction { code: u16 },
    /// A matcher order.
    Order,
    /// An order cancellation.
    CancelOrder,
    /// A custom sign request, by type code.
    Request { code: u16 },
    /// A transaction package.
    Package { size: usize },
}

/// One entry in the pending-message queue.
#[derive(Debug, Clone)]
pub struct PendingMessage {
    /// Request id, as surfaced in the public state.
    pub id: String,
    /// The origin that issued the request.
    pub origin: String,
    /// What the request asks for.
    pub kind: MessageKind,
    /// Optional display title (package name, service name).
    pub title: Option<String>,
    /// Current lifecycle status.
    pub status: MessageState,
}

/// Queue of signature requests with their statuses.
#[derive(Debug, Default)]
pub struct MessageQueue {
    entries: Vec<PendingMessage>,
}

impl MessageQueue {
    /// Add a new `unapproved` entry and return it.
    pub fn enqueue(
        &mut self,
        origin: &str,
        kind: MessageKind,
        title: Option<String>,
    ) -> PendingMessage {
        let message = PendingMessage {
            id: format!("{:016x}", rand::random::<u64>()),
            origin: origin.to_string(),
            kind,
            title,
            status: MessageState::Unapproved,
        };
        self.entries.push(message.clone());
        message
    }

    /// Move an entry to a new status. Unknown ids are ignored.
    pub fn set_status(&mut self, id: &str, status: MessageState) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.status = status;
        }
    }

    /// Statuses in insertion order, as served in the public state.
    pub fn statuses(&self) -> Vec<MessageStatus> {
        self.entries
            .iter()
            .map(|e| MessageStatus {
                id: e.id.clone(),
                status: e.status,
            })
            .collect()
    }

    /// Number of queued entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
