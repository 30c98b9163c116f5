use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{EntityId, User};

const fn default_active() -> bool {
    true
}

/// A named group of users with one designated leader.
///
/// When embedded in a ticket the backend omits `leader` and `members`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Team {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub leader: Option<User>,
    #[serde(default)]
    pub members: Vec<User>,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Team {
    #[must_use]
    pub fn has_member(&self, user_id: EntityId) -> bool {
        self.members.iter().any(|member| member.id == user_id)
    }
}
