//! Ticket status, priority, user role and display severity enums.
//!
//! Wire enums serialize as `SCREAMING_SNAKE_CASE`, matching the backend.
//! Each provides `as_str()` (wire form), `label()` (human form) and a
//! `Display` impl that writes the wire form.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Display severity tag attached to statuses and priorities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Danger,
    Secondary,
    Contrast,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Secondary => "secondary",
            Self::Contrast => "contrast",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TicketStatus
// ---------------------------------------------------------------------------

/// Status of a ticket through its lifecycle.
///
/// ```text
/// open → in_progress → paused
///                    → resolved → closed
/// ```
///
/// There is no enforced transition table on the client: admins may set any
/// status through the edit form. The rules that do exist live in
/// [`crate::policy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Open,
    InProgress,
    Paused,
    Resolved,
    Closed,
}

impl TicketStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 5] = [
        Self::Open,
        Self::InProgress,
        Self::Paused,
        Self::Resolved,
        Self::Closed,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::InProgress => "IN_PROGRESS",
            Self::Paused => "PAUSED",
            Self::Resolved => "RESOLVED",
            Self::Closed => "CLOSED",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Paused => "Paused",
            Self::Resolved => "Resolved",
            Self::Closed => "Closed",
        }
    }

    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::Open => Severity::Info,
            Self::InProgress => Severity::Warning,
            Self::Paused => Severity::Secondary,
            Self::Resolved => Severity::Success,
            Self::Closed => Severity::Contrast,
        }
    }

    /// Resolved and closed tickets are finished work.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Resolved | Self::Closed)
    }

    /// Moving from a finished state back into active work.
    #[must_use]
    pub const fn is_reopening(self, next: Self) -> bool {
        self.is_finished() && matches!(next, Self::Open | Self::InProgress)
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TicketPriority
// ---------------------------------------------------------------------------

/// Ticket priority.
///
/// Values the client does not recognise deserialize to `Unknown` and sort
/// after every known priority.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketPriority {
    Critical,
    High,
    #[default]
    Medium,
    Low,
    #[serde(other)]
    Unknown,
}

impl TicketPriority {
    /// Sort rank: lower is more urgent.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
            Self::Unknown => 99,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
            Self::Unknown => "UNKNOWN",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Unknown => "Unknown",
        }
    }

    #[must_use]
    pub const fn severity(self) -> Option<Severity> {
        match self {
            Self::Critical => Some(Severity::Danger),
            Self::High => Some(Severity::Warning),
            Self::Medium => Some(Severity::Info),
            Self::Low => Some(Severity::Success),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// User role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::User => "USER",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::User => "User",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
