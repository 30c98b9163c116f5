//! Request payloads for entity mutations.
//!
//! Update structs carry `Option` fields; only `Some` fields are serialized,
//! so the backend leaves everything else untouched. Builders follow the same
//! shape for every entity.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::EntityId;
use crate::enums::{Role, TicketPriority};
use crate::errors::CoreError;

/// Reference to another entity by id, as the backend expects in bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EntityRef {
    pub id: EntityId,
}

impl From<EntityId> for EntityRef {
    fn from(id: EntityId) -> Self {
        Self { id }
    }
}

// ---------------------------------------------------------------------------
// Tickets
// ---------------------------------------------------------------------------

/// Body of `POST /tickets`.
///
/// The backend drops `assignedTo` for non-admin creators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketDraft {
    pub title: String,
    pub description: String,
    pub priority: TicketPriority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_team: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<EntityRef>,
}

impl TicketDraft {
    /// Draft with trimmed title and description.
    ///
    /// # Errors
    ///
    /// [`CoreError::Validation`] when the title or description is blank.
    pub fn new(
        title: &str,
        description: &str,
        priority: TicketPriority,
    ) -> Result<Self, CoreError> {
        let title = title.trim();
        let description = description.trim();
        if title.is_empty() {
            return Err(CoreError::Validation("ticket title must not be empty".into()));
        }
        if description.is_empty() {
            return Err(CoreError::Validation(
                "ticket description must not be empty".into(),
            ));
        }
        Ok(Self {
            title: title.to_string(),
            description: description.to_string(),
            priority,
            assigned_team: None,
            assigned_to: None,
        })
    }

    #[must_use]
    pub fn with_team(mut self, team_id: Option<EntityId>) -> Self {
        self.assigned_team = team_id.map(EntityRef::from);
        self
    }

    #[must_use]
    pub fn with_assignee(mut self, user_id: Option<EntityId>) -> Self {
        self.assigned_to = user_id.map(EntityRef::from);
        self
    }
}

/// Body of `PUT /tickets/{id}`: the detail fields only.
///
/// Status and assignment have dedicated endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_finish_date: Option<NaiveDate>,
}

impl TicketUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.estimated_time.is_none()
            && self.estimated_finish_date.is_none()
    }
}

pub struct TicketUpdateBuilder(TicketUpdate);

impl TicketUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(TicketUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn estimated_time(mut self, estimate: impl Into<String>) -> Self {
        self.0.estimated_time = Some(estimate.into());
        self
    }

    #[must_use]
    pub const fn estimated_finish_date(mut self, date: NaiveDate) -> Self {
        self.0.estimated_finish_date = Some(date);
        self
    }

    #[must_use]
    pub fn build(self) -> TicketUpdate {
        self.0
    }
}

impl Default for TicketUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Effort estimate captured when starting work on a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Estimation {
    pub time: String,
    pub finish_date: NaiveDate,
}

impl Estimation {
    /// The estimate text is trimmed.
    ///
    /// # Errors
    ///
    /// [`CoreError::Validation`] when the estimate is blank.
    pub fn new(time: &str, finish_date: NaiveDate) -> Result<Self, CoreError> {
        let time = time.trim();
        if time.is_empty() {
            return Err(CoreError::Validation(
                "estimated effort must not be empty".into(),
            ));
        }
        Ok(Self {
            time: time.to_string(),
            finish_date,
        })
    }

    #[must_use]
    pub fn to_update(&self) -> TicketUpdate {
        TicketUpdateBuilder::new()
            .estimated_time(self.time.clone())
            .estimated_finish_date(self.finish_date)
            .build()
    }
}

/// Body of `PUT /tickets/{id}/pause`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PauseRequest {
    pub reason: String,
}

impl PauseRequest {
    /// The reason is trimmed.
    ///
    /// # Errors
    ///
    /// [`CoreError::Validation`] when the reason is blank.
    pub fn new(reason: &str) -> Result<Self, CoreError> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(CoreError::Validation("pause reason must not be empty".into()));
        }
        Ok(Self {
            reason: reason.to_string(),
        })
    }
}

/// Body of `POST /tickets/{id}/actions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ActionRequest {
    pub description: String,
}

impl ActionRequest {
    /// # Errors
    ///
    /// [`CoreError::Validation`] when the description is blank.
    pub fn new(description: &str) -> Result<Self, CoreError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(CoreError::Validation(
                "action description must not be empty".into(),
            ));
        }
        Ok(Self {
            description: description.to_string(),
        })
    }
}

/// Target of `PATCH /tickets/{id}/assign`.
///
/// `Unassign` sends neither query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Assignment {
    User(EntityId),
    Team(EntityId),
    Unassign,
}

impl Assignment {
    /// Query pairs for the assign endpoint.
    #[must_use]
    pub fn query(self) -> Vec<(&'static str, String)> {
        match self {
            Self::User(id) => vec![("userId", id.to_string())],
            Self::Team(id) => vec![("teamId", id.to_string())],
            Self::Unassign => Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Teams
// ---------------------------------------------------------------------------

/// Body of `POST /teams` and `PUT /teams/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TeamUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leader: Option<EntityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

pub struct TeamUpdateBuilder(TeamUpdate);

impl TeamUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(TeamUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn leader(mut self, user_id: EntityId) -> Self {
        self.0.leader = Some(EntityRef::from(user_id));
        self
    }

    #[must_use]
    pub const fn active(mut self, active: bool) -> Self {
        self.0.active = Some(active);
        self
    }

    /// Payload for creating a team. `active` defaults to true.
    ///
    /// # Errors
    ///
    /// [`CoreError::Validation`] when the name is missing or blank.
    pub fn build_new(mut self) -> Result<TeamUpdate, CoreError> {
        let name = self
            .0
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| CoreError::Validation("team name must not be empty".into()))?
            .to_string();
        self.0.name = Some(name);
        self.0.active.get_or_insert(true);
        Ok(self.0)
    }

    #[must_use]
    pub fn build(self) -> TeamUpdate {
        self.0
    }
}

impl Default for TeamUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// User fields an admin may change.
///
/// `active` is always written by the backend, so it is always sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    pub active: bool,
}

/// Body of `PUT /users/{id}`. `None` team ids leave memberships as they are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdateRequest {
    pub user: UserPatch,
    pub team_ids: Option<Vec<EntityId>>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn ticket_update_serializes_only_set_fields() {
        let update = TicketUpdateBuilder::new()
            .estimated_time("2d")
            .estimated_finish_date(date(2024, 6, 1))
            .build();
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({ "estimatedTime": "2d", "estimatedFinishDate": "2024-06-01" })
        );
        assert!(!update.is_empty());
        assert!(TicketUpdate::default().is_empty());
        assert_eq!(TicketUpdateBuilder::default().build(), TicketUpdate::default());
    }

    #[test]
    fn draft_trims_and_validates() {
        let draft = TicketDraft::new("  Printer jam ", " Floor 3 ", TicketPriority::High)
            .unwrap()
            .with_team(Some(4));
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            json!({
                "title": "Printer jam",
                "description": "Floor 3",
                "priority": "HIGH",
                "assignedTeam": { "id": 4 }
            })
        );
        assert!(TicketDraft::new(" ", "x", TicketPriority::Low).is_err());
        assert!(TicketDraft::new("x", "", TicketPriority::Low).is_err());
    }

    #[test]
    fn estimation_requires_effort() {
        assert!(Estimation::new("  ", date(2024, 6, 1)).is_err());
        let estimation = Estimation::new(" 2d ", date(2024, 6, 1)).unwrap();
        assert_eq!(estimation.time, "2d");
        assert_eq!(
            estimation.to_update().estimated_finish_date,
            Some(date(2024, 6, 1))
        );
    }

    #[test]
    fn pause_reason_is_trimmed_and_required() {
        assert_eq!(
            PauseRequest::new("   "),
            Err(CoreError::Validation("pause reason must not be empty".into()))
        );
        assert_eq!(PauseRequest::new(" waiting on vendor ").unwrap().reason, "waiting on vendor");
    }

    #[test]
    fn assignment_query_pairs() {
        assert_eq!(Assignment::User(3).query(), vec![("userId", "3".to_string())]);
        assert_eq!(Assignment::Team(9).query(), vec![("teamId", "9".to_string())]);
        assert!(Assignment::Unassign.query().is_empty());
    }

    #[test]
    fn new_team_requires_name_and_defaults_active() {
        assert!(TeamUpdateBuilder::new().name("  ").build_new().is_err());
        let team = TeamUpdateBuilder::new()
            .name(" Ops ")
            .leader(7)
            .build_new()
            .unwrap();
        assert_eq!(
            serde_json::to_value(&team).unwrap(),
            json!({ "name": "Ops", "leader": { "id": 7 }, "active": true })
        );
    }

    #[test]
    fn user_update_body_shape() {
        let body = UserUpdateRequest {
            user: UserPatch {
                name: None,
                role: Some(Role::Admin),
                active: true,
            },
            team_ids: Some(vec![1, 2]),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "user": { "role": "ADMIN", "active": true }, "teamIds": [1, 2] })
        );
    }
}
