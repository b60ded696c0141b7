//! The user-approval seam.
//!
//! The extension prompts the user for every signature request; an embedder
//! of this host supplies the same decision point through [`PromptHandler`].

use crate::queue::PendingMessage;

/// The user's decision on a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Sign the request.
    Approved,
    /// Refuse the request.
    Rejected,
}

/// Decides pending requests on the user's behalf.
pub trait PromptHandler: Send + Sync {
    /// Decide one pending request.
    fn decide(&self, request: &PendingMessage) -> Decision;
}

/// Approves every request. Suitable for tests and fully trusted embeddings.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoApprove;

impl PromptHandler for AutoApprove {
    fn decide(&self, _request: &PendingMessage) -> Decision {
        Decision::Approved
    }
}

/// Rejects every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoReject;

impl PromptHandler for AutoReject {
    fn decide(&self, _request: &PendingMessage) -> Decision {
        Decision::Rejected
    }
}

impl<F> PromptHandler for F
where
    F: Fn(&PendingMessage) -> Decision + Send + Sync,
{
    fn decide(&self, request: &PendingMessage) -> Decision {
        self(request)
    }
}
