use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::EntityId;
use crate::enums::Role;

const fn default_active() -> bool {
    true
}

/// Team membership as embedded in a user record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TeamRef {
    pub id: EntityId,
    #[serde(default)]
    pub name: String,
}

/// A helpdesk user.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    #[serde(default)]
    pub email: String,
    pub name: String,
    pub role: Role,
    /// Absent when the backend embeds the user inside another entity.
    #[serde(default)]
    pub teams: Vec<TeamRef>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_language: Option<String>,
}

impl User {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    #[must_use]
    pub fn is_member_of(&self, team_id: EntityId) -> bool {
        self.teams.iter().any(|team| team.id == team_id)
    }

    /// Comma-separated team names, empty when the user has no teams.
    #[must_use]
    pub fn team_names(&self) -> String {
        self.teams
            .iter()
            .map(|team| team.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
