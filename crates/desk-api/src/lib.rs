//! # desk-api
//!
//! Typed client for the Deskline helpdesk REST backend.
//!
//! - [`DeskClient`]: one method per endpoint, grouped by resource
//! - [`http`]: the single response boundary (status classification, notices)
//! - [`HelpdeskApi`]: the trait the workflows and poller are written against
//! - [`session::SessionGate`]: cached identity, login URL, auth-failure handling
//! - [`workflow`]: multi-request ticket and team operations
//! - [`poller::NotificationPoller`]: fixed-interval unread-notification refresh
//!
//! Credentials are ambient: the configured session cookie is attached to
//! every request. The client never handles tokens.

pub mod api;
pub mod dashboard;
pub mod http;
pub mod notifications;
pub mod parameters;
pub mod poller;
pub mod session;
pub mod teams;
pub mod tickets;
pub mod users;
pub mod workflow;

mod error;

#[cfg(test)]
mod testing;

pub use api::HelpdeskApi;
pub use error::{ApiError, NOTICE_LIFE_MS, Notice};
pub use tickets::{TicketFilters, TicketQuery};

use desk_config::ApiConfig;
use reqwest::header::{COOKIE, HeaderMap, HeaderValue};

/// HTTP client for the helpdesk backend.
#[derive(Debug, Clone)]
pub struct DeskClient {
    http: reqwest::Client,
    base_url: String,
}

impl DeskClient {
    /// Build a client from the `[api]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the session cookie is not a valid
    /// header value or the HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        if config.has_session_cookie() {
            let mut cookie = HeaderValue::from_str(config.session_cookie.trim())
                .map_err(|err| ApiError::Config(format!("session cookie: {err}")))?;
            cookie.set_sensitive(true);
            headers.insert(COOKIE, cookie);
        }

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|err| ApiError::Config(err.to_string()))?;

        tracing::debug!(base_url = config.base_url(), "helpdesk client ready");
        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/tickets/3`.
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
