//! Fixed-interval refresh of the unread notification list.
//!
//! Each tick awaits the previous fetch, so polls never overlap; ticks that
//! fall behind are delayed rather than bunched. The loop runs in the
//! caller's task and stops when its [`CancellationToken`] fires or the
//! backend reports the session as unauthenticated.

use std::time::Duration;

use desk_core::entities::Notification;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::{ApiError, HelpdeskApi};

/// Why [`NotificationPoller::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollStop {
    Cancelled,
    /// The backend answered 401; a new login is needed.
    SessionEnded,
}

#[derive(Debug, Clone)]
pub struct NotificationPoller {
    interval: Duration,
    token: CancellationToken,
}

impl NotificationPoller {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            token: CancellationToken::new(),
        }
    }

    /// Token that stops the loop; clone it into the host's shutdown path.
    #[must_use]
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Poll until cancelled, passing every successful fetch to `on_update`.
    ///
    /// The first fetch happens immediately. Errors other than
    /// [`ApiError::Unauthenticated`] are logged and the next tick retries.
    pub async fn run<A, F>(&self, api: &A, mut on_update: F) -> PollStop
    where
        A: HelpdeskApi,
        F: FnMut(&[Notification]),
    {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                () = self.token.cancelled() => {
                    tracing::debug!("notification polling cancelled");
                    return PollStop::Cancelled;
                }
                _ = ticker.tick() => {}
            }

            let fetched = tokio::select! {
                biased;
                () = self.token.cancelled() => return PollStop::Cancelled,
                fetched = api.unread_notifications() => fetched,
            };

            match fetched {
                Ok(unread) => {
                    tracing::trace!(unread = unread.len(), "notifications refreshed");
                    on_update(&unread);
                }
                Err(ApiError::Unauthenticated) => {
                    tracing::warn!("session ended; notification polling stopped");
                    return PollStop::SessionEnded;
                }
                Err(err) => tracing::warn!(%err, "notification refresh failed"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::testing::FakeApi;

    fn notification(id: i64, read: bool) -> Notification {
        Notification {
            id,
            recipient: None,
            message: format!("Ticket {id} updated"),
            read,
            ticket: None,
            created_at: NaiveDate::from_ymd_opt(2024, 5, 1)
                .and_then(|d| d.and_hms_opt(8, 0, 0))
                .unwrap(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn polls_on_interval_until_cancelled() {
        let api = FakeApi::default()
            .with_notification(notification(1, false))
            .with_notification(notification(2, true));
        let poller = NotificationPoller::new(Duration::from_secs(30));
        let token = poller.token();
        let mut seen = Vec::new();

        let started = tokio::time::Instant::now();
        let stop = poller
            .run(&api, |unread| {
                seen.push(unread.len());
                if seen.len() == 3 {
                    token.cancel();
                }
            })
            .await;

        assert_eq!(stop, PollStop::Cancelled);
        assert_eq!(seen, vec![1, 1, 1]);
        assert_eq!(api.calls().len(), 3);
        assert_eq!(started.elapsed(), Duration::from_secs(60));
    }

    #[tokio::test(start_paused = true)]
    async fn stops_when_session_ends() {
        let api = FakeApi::default().failing("unread_notifications", 401);
        let poller = NotificationPoller::new(Duration::from_secs(30));

        let stop = poller.run(&api, |_| panic!("no update expected")).await;
        assert_eq!(stop, PollStop::SessionEnded);
        assert_eq!(api.calls(), vec!["unread_notifications"]);
    }

    #[tokio::test]
    async fn cancelled_token_stops_before_first_fetch() {
        let api = FakeApi::default();
        let poller = NotificationPoller::new(Duration::from_secs(30));
        poller.token().cancel();

        assert_eq!(poller.run(&api, |_| {}).await, PollStop::Cancelled);
        assert!(api.calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn transient_errors_keep_polling() {
        let api = FakeApi::default().failing("unread_notifications", 500);
        let poller = NotificationPoller::new(Duration::from_secs(5));
        let token = poller.token();

        let cancel = async {
            tokio::time::sleep(Duration::from_secs(12)).await;
            token.cancel();
        };
        let (stop, ()) = tokio::join!(poller.run(&api, |_| {}), cancel);

        assert_eq!(stop, PollStop::Cancelled);
        assert_eq!(api.calls().len(), 3);
    }
}
