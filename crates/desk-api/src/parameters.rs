//! `/parameters` endpoint.

use desk_core::entities::Parameter;

use crate::{ApiError, DeskClient, http};

/// Parameter listing the enabled login providers, comma-separated.
pub const AUTH_PROVIDERS: &str = "AUTH_PROVIDERS";

impl DeskClient {
    /// `GET /parameters/{name}`.
    ///
    /// # Errors
    ///
    /// [`ApiError::NotFound`] for an unknown parameter, or any other
    /// boundary error.
    pub async fn get_parameter(&self, name: &str) -> Result<Parameter, ApiError> {
        let path = format!("/parameters/{}", urlencoding::encode(name));
        http::send_json(self.http.get(self.url(&path))).await
    }
}
