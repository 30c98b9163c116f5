//! `/teams` endpoints.

use desk_core::entities::{EntityId, Team};
use desk_core::updates::TeamUpdate;

use crate::{ApiError, DeskClient, http};

impl DeskClient {
    /// `GET /teams?includeInactive=`.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] raised by the response boundary.
    pub async fn list_teams(&self, include_inactive: bool) -> Result<Vec<Team>, ApiError> {
        let request = self
            .http
            .get(self.url("/teams"))
            .query(&[("includeInactive", include_inactive.to_string())]);
        http::send_json(request).await
    }

    /// `POST /teams`. The backend adds the leader to the members.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] raised by the response boundary.
    pub async fn create_team(&self, team: &TeamUpdate) -> Result<Team, ApiError> {
        http::send_json(self.http.post(self.url("/teams")).json(team)).await
    }

    /// `PUT /teams/{id}`.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] raised by the response boundary.
    pub async fn update_team(&self, id: EntityId, team: &TeamUpdate) -> Result<Team, ApiError> {
        let request = self.http.put(self.url(&format!("/teams/{id}"))).json(team);
        http::send_json(request).await
    }

    /// `PATCH /teams/{id}/members?userId=`.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] raised by the response boundary.
    pub async fn add_team_member(
        &self,
        team_id: EntityId,
        user_id: EntityId,
    ) -> Result<Team, ApiError> {
        let request = self
            .http
            .patch(self.url(&format!("/teams/{team_id}/members")))
            .query(&[("userId", user_id.to_string())]);
        http::send_json(request).await
    }
}
