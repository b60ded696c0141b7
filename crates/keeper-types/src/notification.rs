//! Notifications a trusted site may push to the keeper's UI.

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Notification title upper bound, in characters.
pub const TITLE_MAX: usize = 20;
/// Notification message upper bound, in characters.
pub const MESSAGE_MAX: usize = 250;

/// A notification from a trusted site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationData {
    /// Title, up to 20 characters.
    pub title: String,
    /// Body, up to 250 characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl NotificationData {
    /// Enforce the documented length bounds.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let title_len = self.title.chars().count();
        if title_len > TITLE_MAX {
            return Err(ValidationError::TitleTooLong {
                max: TITLE_MAX,
                got: title_len,
            });
        }
        if let Some(message) = &self.message {
            let message_len = message.chars().count();
            if message_len > MESSAGE_MAX {
                return Err(ValidationError::MessageTooLong {
                    max: MESSAGE_MAX,
                    got: message_len,
                });
            }
        }
        Ok(())
    }
}
