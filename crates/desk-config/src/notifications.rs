//! Notification polling settings.

use serde::{Deserialize, Serialize};

const fn default_poll_interval_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotificationsConfig {
    /// Seconds between unread-notification fetches.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
        }
    }
}

impl NotificationsConfig {
    /// Poll interval, never shorter than one second.
    pub fn poll_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.poll_interval_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_interval_is_thirty_seconds() {
        let config = NotificationsConfig::default();
        assert_eq!(config.poll_interval(), std::time::Duration::from_secs(30));
    }

    #[test]
    fn zero_interval_is_clamped() {
        let config = NotificationsConfig {
            poll_interval_secs: 0,
        };
        assert_eq!(config.poll_interval(), std::time::Duration::from_secs(1));
    }
}
