use chrono::{NaiveDate, NaiveDateTime};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{EntityId, Team, User};
use crate::enums::{TicketPriority, TicketStatus};

/// An append-only log entry describing work performed on a ticket.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TicketAction {
    pub id: EntityId,
    pub description: String,
    pub timestamp: NaiveDateTime,
    pub actor: User,
}

/// A trackable unit of work.
///
/// Timestamps are backend local date-times without an offset.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: EntityId,
    pub ticket_number: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: TicketStatus,
    #[serde(default)]
    pub priority: TicketPriority,
    pub created_by: User,
    #[serde(default)]
    pub assigned_to: Option<User>,
    #[serde(default)]
    pub assigned_team: Option<Team>,
    #[serde(default)]
    pub estimated_time: Option<String>,
    #[serde(default)]
    pub estimated_finish_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub actions: Vec<TicketAction>,
}

impl Ticket {
    #[must_use]
    pub fn assignee_id(&self) -> Option<EntityId> {
        self.assigned_to.as_ref().map(|user| user.id)
    }

    #[must_use]
    pub fn team_id(&self) -> Option<EntityId> {
        self.assigned_team.as_ref().map(|team| team.id)
    }

    #[must_use]
    pub fn is_assigned_to(&self, user_id: EntityId) -> bool {
        self.assignee_id() == Some(user_id)
    }

    #[must_use]
    pub fn is_created_by(&self, user_id: EntityId) -> bool {
        self.created_by.id == user_id
    }

    /// Actions newest first, as shown in the ticket history.
    #[must_use]
    pub fn actions_newest_first(&self) -> Vec<&TicketAction> {
        let mut actions: Vec<&TicketAction> = self.actions.iter().collect();
        actions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        actions
    }
}
