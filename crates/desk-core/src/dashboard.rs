//! Dashboard aggregation.
//!
//! Reduces the tickets of one reporting period into status counts, growth
//! against the previous period, and two role-dependent lists:
//!
//! | Role  | primary                     | secondary              |
//! |-------|-----------------------------|------------------------|
//! | ADMIN | 10 most recently created    | all CRITICAL tickets   |
//! | USER  | own tickets IN_PROGRESS     | own tickets PAUSED     |
//!
//! Search narrows the working set before any of the above is computed.

use chrono::{Datelike, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Ticket, User};
use crate::enums::{TicketPriority, TicketStatus};
use crate::ordering;

/// Size of the admin "recent tickets" list.
pub const RECENT_LIMIT: usize = 10;

// ---------------------------------------------------------------------------
// Reporting period
// ---------------------------------------------------------------------------

/// A calendar month, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReportingPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReportingPeriod {
    /// The calendar month containing `date`.
    #[must_use]
    pub fn month_of(date: NaiveDate) -> Self {
        let start = date.with_day(1).unwrap_or(date);
        let next_month = if start.month() == 12 {
            NaiveDate::from_ymd_opt(start.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(start.year(), start.month() + 1, 1)
        };
        let end = next_month
            .and_then(|first| first.pred_opt())
            .unwrap_or(start);
        Self { start, end }
    }

    /// The month before this one.
    #[must_use]
    pub fn previous(self) -> Self {
        self.start
            .pred_opt()
            .map_or(self, Self::month_of)
    }

    /// `yyyy-MM-dd` form of the start date.
    #[must_use]
    pub fn start_param(self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    /// `yyyy-MM-dd` form of the end date.
    #[must_use]
    pub fn end_param(self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}

// ---------------------------------------------------------------------------
// KPIs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Kpis {
    pub total: u64,
    pub open: u64,
    pub in_progress: u64,
    pub resolved: u64,
}

#[must_use]
pub fn kpis(tickets: &[Ticket]) -> Kpis {
    let count = |status: TicketStatus| {
        tickets
            .iter()
            .filter(|ticket| ticket.status == status)
            .count() as u64
    };
    Kpis {
        total: tickets.len() as u64,
        open: count(TicketStatus::Open),
        in_progress: count(TicketStatus::InProgress),
        resolved: count(TicketStatus::Resolved),
    }
}

/// Period-over-period growth in percent.
///
/// With no previous tickets growth is 100 when there are current tickets
/// and 0 otherwise.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn growth(current: u64, previous: u64) -> f64 {
    if previous == 0 {
        return if current > 0 { 100.0 } else { 0.0 };
    }
    (current as f64 - previous as f64) / previous as f64 * 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum GrowthDirection {
    Up,
    Down,
}

impl GrowthDirection {
    #[must_use]
    pub fn of(growth: f64) -> Self {
        if growth >= 0.0 { Self::Up } else { Self::Down }
    }
}

/// Share of one status in the total, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MeterShare {
    pub status: TicketStatus,
    pub percent: f64,
}

/// Open, in-progress and resolved shares. An empty period divides by one.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn meter_shares(kpis: &Kpis) -> Vec<MeterShare> {
    let total = kpis.total.max(1) as f64;
    [
        (TicketStatus::Open, kpis.open),
        (TicketStatus::InProgress, kpis.in_progress),
        (TicketStatus::Resolved, kpis.resolved),
    ]
    .into_iter()
    .map(|(status, count)| MeterShare {
        status,
        percent: count as f64 / total * 100.0,
    })
    .collect()
}

// ---------------------------------------------------------------------------
// Lists and search
// ---------------------------------------------------------------------------

/// Case-insensitive substring match on ticket number or title.
///
/// The query is trimmed; an empty query returns every ticket unchanged.
#[must_use]
pub fn search(tickets: &[Ticket], query: &str) -> Vec<Ticket> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return tickets.to_vec();
    }
    tickets
        .iter()
        .filter(|ticket| {
            ticket.ticket_number.to_lowercase().contains(&needle)
                || ticket.title.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

fn own_with_status(user: &User, tickets: &[Ticket], status: TicketStatus) -> Vec<Ticket> {
    tickets
        .iter()
        .filter(|ticket| ticket.is_assigned_to(user.id) && ticket.status == status)
        .cloned()
        .collect()
}

#[must_use]
pub fn primary_list(user: &User, tickets: &[Ticket]) -> Vec<Ticket> {
    if user.is_admin() {
        let mut recent = tickets.to_vec();
        ordering::sort_newest_first(&mut recent);
        recent.truncate(RECENT_LIMIT);
        recent
    } else {
        own_with_status(user, tickets, TicketStatus::InProgress)
    }
}

#[must_use]
pub fn secondary_list(user: &User, tickets: &[Ticket]) -> Vec<Ticket> {
    if user.is_admin() {
        tickets
            .iter()
            .filter(|ticket| ticket.priority == TicketPriority::Critical)
            .cloned()
            .collect()
    } else {
        own_with_status(user, tickets, TicketStatus::Paused)
    }
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// Fully aggregated dashboard for one user and period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Dashboard {
    pub period: ReportingPeriod,
    pub query: Option<String>,
    pub kpis: Kpis,
    pub previous_total: u64,
    pub growth: f64,
    pub direction: GrowthDirection,
    pub meter: Vec<MeterShare>,
    pub primary: Vec<Ticket>,
    pub secondary: Vec<Ticket>,
}

impl Dashboard {
    /// Aggregate `period_tickets` after applying `query`.
    #[must_use]
    pub fn build(
        user: &User,
        period: ReportingPeriod,
        period_tickets: &[Ticket],
        previous_total: u64,
        query: Option<&str>,
    ) -> Self {
        let working = search(period_tickets, query.unwrap_or_default());
        let kpis = kpis(&working);
        let growth = growth(kpis.total, previous_total);
        Self {
            period,
            query: query
                .map(str::trim)
                .filter(|q| !q.is_empty())
                .map(ToString::to_string),
            meter: meter_shares(&kpis),
            direction: GrowthDirection::of(growth),
            primary: primary_list(user, &working),
            secondary: secondary_list(user, &working),
            kpis,
            previous_total,
            growth,
        }
    }
}
