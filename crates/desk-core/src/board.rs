//! Status board: a ticket list grouped by status.
//!
//! Groups appear in lifecycle order. Each group is sorted with
//! [`crate::ordering::compare`]. Resolved and closed groups show only their
//! first [`FINISHED_VISIBLE_LIMIT`] tickets; the full count is kept in
//! `total`. Non-empty groups are the expanded ones.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Ticket;
use crate::enums::{Severity, TicketStatus};
use crate::ordering;

pub const FINISHED_VISIBLE_LIMIT: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusGroup {
    pub status: TicketStatus,
    pub label: String,
    pub severity: Severity,
    pub total: usize,
    pub tickets: Vec<Ticket>,
}

impl StatusGroup {
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        self.total > self.tickets.len()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusBoard {
    pub groups: Vec<StatusGroup>,
    pub expanded: Vec<TicketStatus>,
}

impl StatusBoard {
    /// Group `tickets` by status.
    #[must_use]
    pub fn build(mut tickets: Vec<Ticket>) -> Self {
        ordering::sort_tickets(&mut tickets);

        let groups: Vec<StatusGroup> = TicketStatus::ALL
            .into_iter()
            .map(|status| {
                let all: Vec<Ticket> = tickets
                    .iter()
                    .filter(|ticket| ticket.status == status)
                    .cloned()
                    .collect();
                let total = all.len();
                let visible = if status.is_finished() {
                    all.into_iter().take(FINISHED_VISIBLE_LIMIT).collect()
                } else {
                    all
                };
                StatusGroup {
                    status,
                    label: status.label().to_string(),
                    severity: status.severity(),
                    total,
                    tickets: visible,
                }
            })
            .collect();

        let expanded = groups
            .iter()
            .filter(|group| group.total > 0)
            .map(|group| group.status)
            .collect();

        Self { groups, expanded }
    }

    #[must_use]
    pub fn group(&self, status: TicketStatus) -> Option<&StatusGroup> {
        self.groups.iter().find(|group| group.status == status)
    }
}
