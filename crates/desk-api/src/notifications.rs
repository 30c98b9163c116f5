//! `/notifications` endpoints.

use desk_core::entities::{EntityId, Notification};

use crate::{ApiError, DeskClient, http};

impl DeskClient {
    /// `GET /notifications`: the current user's unread notifications.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] raised by the response boundary.
    pub async fn unread_notifications(&self) -> Result<Vec<Notification>, ApiError> {
        http::send_json(self.http.get(self.url("/notifications"))).await
    }

    /// `PUT /notifications/{id}/read`.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] raised by the response boundary.
    pub async fn mark_notification_read(&self, id: EntityId) -> Result<(), ApiError> {
        let request = self
            .http
            .put(self.url(&format!("/notifications/{id}/read")))
            .json(&serde_json::json!({}));
        http::send(request).await.map(|_| ())
    }
}
