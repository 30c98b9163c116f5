//! API error types and their user-facing notices.

use desk_core::errors::CoreError;
use serde::Serialize;
use thiserror::Error;

/// How long a notice stays visible in an interactive surface.
pub const NOTICE_LIFE_MS: u64 = 5000;

/// Errors that can occur when talking to the helpdesk backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response was received (refused, DNS, timeout).
    #[error("Unable to connect to the server: {0}")]
    Connection(String),

    /// HTTP 401: the session cookie is missing or expired.
    #[error("Session expired. Please login again.")]
    Unauthenticated,

    /// HTTP 403.
    #[error("You do not have permission to perform this action")]
    Forbidden,

    /// HTTP 404.
    #[error("Resource not found")]
    NotFound,

    /// The backend rejected the request with a readable message.
    #[error("{message} ({status})")]
    Business {
        status: u16,
        message: String,
    },

    /// The backend failed without a readable message.
    #[error("Error Code: {status}")]
    Server {
        status: u16,
        message: String,
    },

    /// A response body could not be decoded.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The client could not be built from configuration.
    #[error("Invalid client configuration: {0}")]
    Config(String),

    /// A client-side rule refused the operation before any request was sent.
    #[error(transparent)]
    Refused(#[from] CoreError),
}

impl ApiError {
    /// HTTP status associated with the error; 0 when no response arrived.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Connection(_) => Some(0),
            Self::Unauthenticated => Some(401),
            Self::Forbidden => Some(403),
            Self::NotFound => Some(404),
            Self::Business { status, .. } | Self::Server { status, .. } => Some(*status),
            Self::Decode(_) | Self::Config(_) | Self::Refused(_) => None,
        }
    }

    #[must_use]
    pub const fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::Unauthenticated)
    }

    /// The summary/detail pair shown to the user for this error.
    #[must_use]
    pub fn notice(&self) -> Notice {
        let (summary, detail) = match self {
            Self::Connection(_) => ("Connection Error", "Unable to connect to the server".to_string()),
            Self::Unauthenticated => (
                "Authentication Error",
                "Session expired. Please login again.".to_string(),
            ),
            Self::Forbidden => (
                "Access Denied",
                "You do not have permission to perform this action".to_string(),
            ),
            Self::NotFound => ("Not Found", "Resource not found".to_string()),
            Self::Business { message, .. } | Self::Server { message, .. } => {
                ("Error", message.clone())
            }
            Self::Decode(detail) => ("Error", format!("Unexpected response: {detail}")),
            Self::Config(detail) => ("Configuration Error", detail.clone()),
            Self::Refused(err) => ("Not Permitted", err.to_string()),
        };
        Notice {
            summary: summary.to_string(),
            detail,
            life_ms: NOTICE_LIFE_MS,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Server {
                status: status.as_u16(),
                message: format!("Error Code: {}", status.as_u16()),
            }
        } else {
            Self::Connection(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// An error-severity message for the user ("toast").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub summary: String,
    pub detail: String,
    pub life_ms: u64,
}
