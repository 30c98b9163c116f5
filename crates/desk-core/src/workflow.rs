//! Outcome record for multi-request workflows.
//!
//! Steps are recorded in the order they were attempted. Nothing is rolled
//! back: a failed step leaves the earlier ones applied, and the report says
//! exactly how far the workflow got.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum StepOutcome {
    Succeeded,
    Failed(String),
    /// Not needed for this ticket, e.g. assigning a ticket already owned.
    Skipped(String),
    /// An earlier step failed, so this one was never attempted.
    NotAttempted,
}

impl StepOutcome {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Succeeded => "succeeded",
            Self::Failed(_) => "failed",
            Self::Skipped(_) => "skipped",
            Self::NotAttempted => "not_attempted",
        }
    }

    /// Succeeded or deliberately skipped.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Skipped(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WorkflowStep {
    pub name: String,
    pub outcome: StepOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WorkflowReport {
    pub workflow: String,
    pub steps: Vec<WorkflowStep>,
    /// A step was rejected because the session is no longer valid.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub session_rejected: bool,
}

impl WorkflowReport {
    #[must_use]
    pub fn new(workflow: impl Into<String>) -> Self {
        Self {
            workflow: workflow.into(),
            steps: Vec::new(),
            session_rejected: false,
        }
    }

    pub fn record(&mut self, name: impl Into<String>, outcome: StepOutcome) {
        self.steps.push(WorkflowStep {
            name: name.into(),
            outcome,
        });
    }

    pub fn succeeded(&mut self, name: impl Into<String>) {
        self.record(name, StepOutcome::Succeeded);
    }

    pub fn failed(&mut self, name: impl Into<String>, error: impl ToString) {
        self.record(name, StepOutcome::Failed(error.to_string()));
    }

    /// Record a failure caused by a rejected session.
    pub fn failed_unauthenticated(&mut self, name: impl Into<String>, error: impl ToString) {
        self.session_rejected = true;
        self.failed(name, error);
    }

    pub fn skipped(&mut self, name: impl Into<String>, reason: impl Into<String>) {
        self.record(name, StepOutcome::Skipped(reason.into()));
    }

    /// Mark every remaining step name as not attempted.
    pub fn abandon<I, S>(&mut self, remaining: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in remaining {
            self.record(name, StepOutcome::NotAttempted);
        }
    }

    /// Every step succeeded or was skipped.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.steps.iter().all(|step| step.outcome.is_ok())
    }

    /// Steps that received a response, successful or not.
    #[must_use]
    pub fn resolved_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step.outcome, StepOutcome::Succeeded | StepOutcome::Failed(_)))
            .count()
    }

    #[must_use]
    pub fn succeeded_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| step.outcome == StepOutcome::Succeeded)
            .count()
    }

    #[must_use]
    pub fn failures(&self) -> Vec<&WorkflowStep> {
        self.steps
            .iter()
            .filter(|step| matches!(step.outcome, StepOutcome::Failed(_)))
            .collect()
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures().is_empty()
    }
}
