//! The single response boundary shared by every resource module.
//!
//! Every request goes through [`send`]: transport failures and non-success
//! statuses are classified into [`ApiError`], reported once as a
//! [`crate::Notice`] via `tracing`, and re-raised to the caller. Nothing is
//! retried.

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Send a request and check its status.
pub async fn send(request: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
    match request.send().await {
        Ok(resp) => check_response(resp).await,
        Err(err) => Err(report(ApiError::from(err))),
    }
}

/// Send a request and decode its JSON body.
pub async fn send_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, ApiError> {
    let resp = send(request).await?;
    decode(resp).await
}

/// Decode a checked response body as JSON.
pub async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let bytes = resp
        .bytes()
        .await
        .map_err(|err| report(ApiError::from(err)))?;
    serde_json::from_slice(&bytes).map_err(|err| report(ApiError::from(err)))
}

/// Check an HTTP response for failure statuses.
///
/// Returns the response unchanged on success. Failures are reported and
/// returned as [`ApiError`].
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(report(classify(status.as_u16(), &body)))
}

/// Map a failure status and body to an [`ApiError`].
///
/// 401, 403 and 404 are fixed. Any other status becomes
/// [`ApiError::Business`] when the body carries a readable message and
/// [`ApiError::Server`] otherwise.
#[must_use]
pub fn classify(status: u16, body: &str) -> ApiError {
    match status {
        0 => ApiError::Connection("no response".into()),
        401 => ApiError::Unauthenticated,
        403 => ApiError::Forbidden,
        404 => ApiError::NotFound,
        _ => backend_message(body).map_or_else(
            || ApiError::Server {
                status,
                message: format!("Error Code: {status}"),
            },
            |message| ApiError::Business { status, message },
        ),
    }
}

/// Extract the backend's message: a JSON string body, a JSON object's
/// `message` field, or a plain-text body.
fn backend_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::String(message)) => Some(message),
        Ok(serde_json::Value::Object(map)) => map
            .get("message")
            .and_then(serde_json::Value::as_str)
            .filter(|message| !message.trim().is_empty())
            .map(ToString::to_string),
        Ok(_) => None,
        Err(_) if trimmed.starts_with('<') => None,
        Err(_) => Some(trimmed.to_string()),
    }
}

/// Log the notice for `err` and hand the error back.
pub fn report(err: ApiError) -> ApiError {
    let notice = err.notice();
    tracing::error!(
        summary = %notice.summary,
        detail = %notice.detail,
        status = ?err.status(),
        "request failed"
    );
    err
}
