//! Table rows for the backend entities.

use desk_core::entities::{Notification, Team, Ticket, User};
use desk_core::workflow::WorkflowStep;

/// An entity that renders as one table row.
pub trait Tabular {
    const HEADERS: &'static [&'static str];

    fn row(&self) -> Vec<String>;
}

fn or_dash(value: Option<String>) -> String {
    value.unwrap_or_else(|| String::from("-"))
}

impl Tabular for Ticket {
    const HEADERS: &'static [&'static str] = &[
        "id", "number", "title", "status", "priority", "assignee", "team", "estimate", "created",
    ];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.ticket_number.clone(),
            self.title.clone(),
            self.status.label().to_string(),
            self.priority.label().to_string(),
            or_dash(self.assigned_to.as_ref().map(|user| user.name.clone())),
            or_dash(self.assigned_team.as_ref().map(|team| team.name.clone())),
            or_dash(self.estimated_time.clone()),
            self.created_at.format("%Y-%m-%d %H:%M").to_string(),
        ]
    }
}

impl Tabular for Team {
    const HEADERS: &'static [&'static str] = &["id", "name", "leader", "members", "active"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            or_dash(self.leader.as_ref().map(|leader| leader.name.clone())),
            self.members.len().to_string(),
            self.active.to_string(),
        ]
    }
}

impl Tabular for User {
    const HEADERS: &'static [&'static str] = &["id", "name", "email", "role", "teams", "active"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.email.clone(),
            self.role.label().to_string(),
            self.team_names(),
            self.active.to_string(),
        ]
    }
}

impl Tabular for Notification {
    const HEADERS: &'static [&'static str] = &["id", "ticket", "message", "read", "created"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            or_dash(self.ticket.as_ref().map(|ticket| ticket.ticket_number.clone())),
            self.message.clone(),
            self.read.to_string(),
            self.created_at.format("%Y-%m-%d %H:%M").to_string(),
        ]
    }
}

impl Tabular for WorkflowStep {
    const HEADERS: &'static [&'static str] = &["step", "outcome", "detail"];

    fn row(&self) -> Vec<String> {
        use desk_core::workflow::StepOutcome;

        let detail = match &self.outcome {
            StepOutcome::Failed(detail) | StepOutcome::Skipped(detail) => detail.clone(),
            StepOutcome::Succeeded | StepOutcome::NotAttempted => String::from("-"),
        };
        vec![
            self.name.clone(),
            self.outcome.as_str().to_string(),
            detail,
        ]
    }
}
