//! Fetch-then-aggregate loaders for the dashboard and the status board.

use chrono::NaiveDate;
use desk_core::board::StatusBoard;
use desk_core::dashboard::{Dashboard, ReportingPeriod};
use desk_core::entities::{EntityId, User};

use crate::{ApiError, HelpdeskApi, TicketFilters, TicketQuery};

/// What the dashboard should cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardRequest {
    pub period: ReportingPeriod,
    pub team: Option<EntityId>,
    pub query: Option<String>,
    /// Page size used to pull the whole current period in one request.
    pub fetch_size: u32,
}

impl DashboardRequest {
    /// The month containing `today`, unfiltered.
    #[must_use]
    pub fn for_month_of(today: NaiveDate, fetch_size: u32) -> Self {
        Self {
            period: ReportingPeriod::month_of(today),
            team: None,
            query: None,
            fetch_size,
        }
    }

    #[must_use]
    pub const fn team(mut self, team: Option<EntityId>) -> Self {
        self.team = team;
        self
    }

    #[must_use]
    pub fn search(mut self, query: Option<String>) -> Self {
        self.query = query;
        self
    }

    fn period_query(&self, period: ReportingPeriod, size: u32) -> TicketQuery {
        TicketQuery::new(0, size).filters(TicketFilters {
            assigned_team: self.team,
            start_date: Some(period.start),
            end_date: Some(period.end),
            ..TicketFilters::default()
        })
    }
}

/// Load the current period in full and the previous period's total, then
/// aggregate for `user`.
///
/// # Errors
///
/// The first [`ApiError`] from either listing.
pub async fn load_dashboard<A: HelpdeskApi>(
    api: &A,
    user: &User,
    request: &DashboardRequest,
) -> Result<Dashboard, ApiError> {
    let current = api
        .list_tickets(&request.period_query(request.period, request.fetch_size))
        .await?;
    // Only totalElements is read from the previous period.
    let previous = api
        .list_tickets(&request.period_query(request.period.previous(), 1))
        .await?;

    if current.total_elements > current.content.len() as u64 {
        tracing::warn!(
            fetched = current.content.len(),
            total = current.total_elements,
            "dashboard period exceeds fetch size; figures cover the first page only"
        );
    }

    Ok(Dashboard::build(
        user,
        request.period,
        &current.content,
        previous.total_elements,
        request.query.as_deref(),
    ))
}

/// Fetch one page and group it by status.
///
/// # Errors
///
/// Any [`ApiError`] from the listing.
pub async fn load_board<A: HelpdeskApi>(
    api: &A,
    query: &TicketQuery,
) -> Result<StatusBoard, ApiError> {
    let page = api.list_tickets(query).await?;
    Ok(StatusBoard::build(page.content))
}
