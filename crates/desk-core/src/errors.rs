//! Cross-cutting error types for Deskline.
//!
//! Errors raised by the pure rule layer. Transport errors live in `desk-api`
//! and configuration errors in `desk-config`; the CLI converges them.

use thiserror::Error;

/// Errors that can be raised by the rule layer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The acting user is not permitted to perform an operation on a ticket.
    #[error("Operation '{operation}' is not permitted on ticket {ticket}")]
    NotPermitted { operation: String, ticket: String },

    /// The operation is reserved for administrators.
    #[error("Operation '{operation}' requires an administrator")]
    AdminOnly { operation: String },

    /// No authenticated user is available in the session.
    #[error("Not authenticated: run `desk auth login` first")]
    NotAuthenticated,

    /// A required input was missing or blank.
    #[error("Validation error: {0}")]
    Validation(String),
}
