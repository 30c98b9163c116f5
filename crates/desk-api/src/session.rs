//! Session gate: cached identity check and external login hand-off.
//!
//! `/users/me` is fetched at most once per session. Any call observed
//! through [`SessionGate::observe`] that fails with
//! [`ApiError::Unauthenticated`] expires the session, as does a workflow
//! report passed to [`SessionGate::observe_report`] with a rejected step.

use desk_core::entities::User;
use desk_core::session::Session;
use desk_core::workflow::WorkflowReport;

use crate::parameters::AUTH_PROVIDERS;
use crate::{ApiError, HelpdeskApi};

/// Provider used when none is given.
pub const DEFAULT_PROVIDER: &str = "google";

/// External login URL for `provider`.
#[must_use]
pub fn login_url(server_url: &str, provider: &str) -> String {
    format!(
        "{}/oauth2/authorization/{}",
        server_url.trim_end_matches('/'),
        urlencoding::encode(provider)
    )
}

#[derive(Debug, Default)]
pub struct SessionGate {
    session: Session,
}

impl SessionGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Resolve the session once. Returns whether a user is logged in.
    ///
    /// A failed identity fetch counts as resolved-anonymous and is not
    /// retried until [`Self::logout`].
    pub async fn check_auth<A: HelpdeskApi>(&mut self, api: &A) -> bool {
        self.resolve(api).await.is_ok() && self.session.is_authenticated()
    }

    /// The logged-in user, resolving the session first if needed.
    ///
    /// # Errors
    ///
    /// The identity fetch error when this call resolved the session and
    /// the fetch failed, otherwise [`ApiError::Unauthenticated`] when
    /// nobody is logged in.
    pub async fn require_user<A: HelpdeskApi>(&mut self, api: &A) -> Result<User, ApiError> {
        self.resolve(api).await?;
        self.session
            .current_user()
            .cloned()
            .ok_or(ApiError::Unauthenticated)
    }

    async fn resolve<A: HelpdeskApi>(&mut self, api: &A) -> Result<(), ApiError> {
        if self.session.is_resolved() {
            return Ok(());
        }
        match api.current_user().await {
            Ok(user) => {
                tracing::debug!(user_id = user.id, role = %user.role, "session resolved");
                self.session.populate(Some(user));
                Ok(())
            }
            Err(err) => {
                tracing::debug!(%err, "identity check failed; session is anonymous");
                self.session.populate(None);
                Err(err)
            }
        }
    }

    /// Pass a call result through, expiring the session on a 401.
    pub fn observe<T>(&mut self, result: Result<T, ApiError>) -> Result<T, ApiError> {
        if matches!(result, Err(ApiError::Unauthenticated)) {
            self.expire();
        }
        result
    }

    /// Expire the session when a step of `report` failed with a 401.
    ///
    /// Workflows keep going after a failed step, so their 401s arrive here
    /// rather than through [`Self::observe`].
    pub fn observe_report(&mut self, report: &WorkflowReport) {
        if report.session_rejected {
            self.expire();
        }
    }

    fn expire(&mut self) {
        if !self.session.needs_login() {
            tracing::warn!("authentication rejected; login required");
            self.session.expire();
        }
    }

    /// Forget the cached identity so the next check fetches it again.
    pub fn logout(&mut self) {
        self.session.invalidate();
    }
}

/// Enabled login providers from the `AUTH_PROVIDERS` parameter.
///
/// A failed fetch yields an empty list.
pub async fn enabled_providers<A: HelpdeskApi>(api: &A) -> Vec<String> {
    match api.get_parameter(AUTH_PROVIDERS).await {
        Ok(param) => param.list_values(),
        Err(err) => {
            tracing::warn!(%err, "failed to fetch AUTH_PROVIDERS, defaulting to empty");
            Vec::new()
        }
    }
}
