use anyhow::Context;
use desk_api::session::SessionGate;
use desk_api::{ApiError, DeskClient};
use desk_config::DeskConfig;
use desk_core::entities::User;
use desk_core::workflow::WorkflowReport;

/// Shared resources for one CLI invocation.
pub struct AppContext {
    pub config: DeskConfig,
    pub client: DeskClient,
    pub gate: SessionGate,
}

impl AppContext {
    pub fn init(config: DeskConfig) -> anyhow::Result<Self> {
        let client = DeskClient::new(&config.api).context("failed to build helpdesk client")?;
        if !config.api.has_session_cookie() {
            tracing::warn!(
                "api.session_cookie is not set; requests will be anonymous (set DESK_API__SESSION_COOKIE)"
            );
        }
        Ok(Self {
            config,
            client,
            gate: SessionGate::new(),
        })
    }

    /// The logged-in user, resolving the session on first use.
    pub async fn require_user(&mut self) -> anyhow::Result<User> {
        self.gate
            .require_user(&self.client)
            .await
            .map_err(into_anyhow)
            .context("not logged in; run `desk auth login` and configure api.session_cookie")
    }

    /// Pass a backend result through the session gate.
    pub fn observe<T>(&mut self, result: Result<T, ApiError>) -> anyhow::Result<T> {
        self.gate.observe(result).map_err(into_anyhow)
    }

    /// Let the session gate see the 401s a workflow recorded as failed steps.
    pub fn observe_report(&mut self, report: &WorkflowReport) {
        self.gate.observe_report(report);
    }
}

/// Convert an [`ApiError`] into the CLI error, prefixed with its notice summary.
pub fn into_anyhow(err: ApiError) -> anyhow::Error {
    let summary = err.notice().summary;
    anyhow::Error::new(err).context(summary)
}
