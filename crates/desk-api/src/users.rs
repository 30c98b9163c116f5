//! `/users` endpoints.

use desk_core::entities::{EntityId, User};
use desk_core::updates::UserUpdateRequest;

use crate::{ApiError, DeskClient, http};

impl DeskClient {
    /// `GET /users/me`: the identity behind the session cookie.
    ///
    /// # Errors
    ///
    /// [`ApiError::Unauthenticated`] when no valid session exists.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        http::send_json(self.http.get(self.url("/users/me"))).await
    }

    /// `GET /users?includeInactive=`.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] raised by the response boundary.
    pub async fn list_users(&self, include_inactive: bool) -> Result<Vec<User>, ApiError> {
        let request = self
            .http
            .get(self.url("/users"))
            .query(&[("includeInactive", include_inactive.to_string())]);
        http::send_json(request).await
    }

    /// `PUT /users/{id}` with `{ user, teamIds }`.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] raised by the response boundary.
    pub async fn update_user(
        &self,
        id: EntityId,
        update: &UserUpdateRequest,
    ) -> Result<User, ApiError> {
        let request = self.http.put(self.url(&format!("/users/{id}"))).json(update);
        http::send_json(request).await
    }
}
