use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{EntityId, Ticket, User};

/// A message delivered to a user about a ticket.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: EntityId,
    #[serde(default)]
    pub recipient: Option<User>,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub ticket: Option<Ticket>,
    pub created_at: NaiveDateTime,
}
