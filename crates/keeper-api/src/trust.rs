//! Per-origin trust and the notification throttle.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Minimum spacing between notifications from one origin.
pub const NOTIFICATION_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Debug, Default)]
struct OriginEntry {
    last_notification: Option<Instant>,
}

/// The set of origins the user has allowed, with per-origin notification
/// timestamps.
#[derive(Debug, Default)]
pub struct TrustStore {
    origins: HashMap<String, OriginEntry>,
}

impl TrustStore {
    /// Allow an origin.
    pub fn grant(&mut self, origin: &str) {
        self.origins.entry(origin.to_string()).or_default();
    }

    /// Remove an origin.
    pub fn revoke(&mut self, origin: &str) {
        self.origins.remove(origin);
    }

    /// Whether an origin is allowed.
    pub fn is_trusted(&self, origin: &str) -> bool {
        self.origins.contains_key(origin)
    }

    /// Record a notification from `origin` if the throttle allows one.
    ///
    /// Returns `Ok(())` and stamps the origin, or the remaining wait.
    pub fn record_notification(&mut self, origin: &str, now: Instant) -> Result<(), Duration> {
        let Some(entry) = self.origins.get_mut(origin) else {
            // Untrusted origins are refused before throttling applies.
            return Err(NOTIFICATION_INTERVAL);
        };
        if let Some(last) = entry.last_notification {
            let elapsed = now.duration_since(last);
            if elapsed < NOTIFICATION_INTERVAL {
                return Err(NOTIFICATION_INTERVAL - elapsed);
            }
        }
        entry.last_notification = Some(now);
        Ok(())
    }
}
