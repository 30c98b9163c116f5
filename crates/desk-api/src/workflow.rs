//! Ticket, team and user operations that check the policy before calling
//! the backend.
//!
//! Single-request operations return the updated entity. Multi-request
//! operations run their requests one after another and return a
//! [`WorkflowReport`]; nothing is rolled back when a later step fails.

use desk_core::entities::{EntityId, Page, Team, Ticket, User};
use desk_core::enums::TicketStatus;
use desk_core::errors::CoreError;
use desk_core::policy::{self, TicketOperation};
use desk_core::updates::{
    ActionRequest, Assignment, Estimation, PauseRequest, TeamUpdate, TicketDraft, TicketUpdate,
    UserUpdateRequest,
};
use desk_core::workflow::WorkflowReport;
use serde::Serialize;

use crate::{ApiError, HelpdeskApi, TicketQuery};

const STEP_ESTIMATION: &str = "update_estimation";
const STEP_ASSIGN: &str = "assign";
const STEP_STATUS: &str = "set_status";
const STEP_DETAILS: &str = "update_details";
const STEP_REFRESH: &str = "refresh_list";

fn record_failure(report: &mut WorkflowReport, step: impl Into<String>, err: &ApiError) {
    if matches!(err, ApiError::Unauthenticated) {
        report.failed_unauthenticated(step, err);
    } else {
        report.failed(step, err);
    }
}

/// Result of [`start_ticket`].
#[derive(Debug, Clone, Serialize)]
pub struct StartOutcome {
    pub report: WorkflowReport,
    /// The refreshed listing, fetched only when every step succeeded and
    /// present only when that fetch worked.
    pub refreshed: Option<Page<Ticket>>,
}

/// Start work on a ticket.
///
/// Runs, in order: persist the estimate, assign the ticket to `user` unless
/// it already is, set the status to `IN_PROGRESS`. Then refreshes the list
/// with `refresh`. A failing step ends the sequence. The refresh is
/// recorded as its own step, so a failed refresh keeps the report.
///
/// # Errors
///
/// [`ApiError::Refused`] when the policy denies starting; no request is
/// sent in that case. Backend failures are recorded in the report.
pub async fn start_ticket<A: HelpdeskApi>(
    api: &A,
    user: &User,
    ticket: &Ticket,
    estimation: &Estimation,
    refresh: &TicketQuery,
) -> Result<StartOutcome, ApiError> {
    policy::ensure(TicketOperation::Start, Some(user), ticket)?;
    let mut report = WorkflowReport::new("start_ticket");

    if let Err(err) = api.update_ticket(ticket.id, &estimation.to_update()).await {
        record_failure(&mut report, STEP_ESTIMATION, &err);
        report.abandon([STEP_ASSIGN, STEP_STATUS]);
        return Ok(StartOutcome {
            report,
            refreshed: None,
        });
    }
    report.succeeded(STEP_ESTIMATION);

    if ticket.is_assigned_to(user.id) {
        report.skipped(STEP_ASSIGN, "already assigned to the acting user");
    } else if let Err(err) = api.assign_ticket(ticket.id, Assignment::User(user.id)).await {
        record_failure(&mut report, STEP_ASSIGN, &err);
        report.abandon([STEP_STATUS]);
        return Ok(StartOutcome {
            report,
            refreshed: None,
        });
    } else {
        report.succeeded(STEP_ASSIGN);
    }

    match api.update_status(ticket.id, TicketStatus::InProgress).await {
        Ok(_) => report.succeeded(STEP_STATUS),
        Err(err) => {
            record_failure(&mut report, STEP_STATUS, &err);
            return Ok(StartOutcome {
                report,
                refreshed: None,
            });
        }
    }

    tracing::info!(ticket = %ticket.ticket_number, user_id = user.id, "ticket started");
    let refreshed = match api.list_tickets(refresh).await {
        Ok(page) => {
            report.succeeded(STEP_REFRESH);
            Some(page)
        }
        Err(err) => {
            tracing::warn!(%err, "ticket started but the list refresh failed");
            record_failure(&mut report, STEP_REFRESH, &err);
            None
        }
    };
    Ok(StartOutcome { report, refreshed })
}

/// Pause an in-progress ticket with a reason.
///
/// # Errors
///
/// [`ApiError::Refused`] for a blank reason or a ticket that is not in
/// progress, or any backend error.
pub async fn pause_ticket<A: HelpdeskApi>(
    api: &A,
    user: &User,
    ticket: &Ticket,
    reason: &str,
) -> Result<Ticket, ApiError> {
    policy::ensure(TicketOperation::Pause, Some(user), ticket)?;
    let pause = PauseRequest::new(reason)?;
    api.pause_ticket(ticket.id, &pause).await
}

/// Assign the ticket to the acting user.
///
/// # Errors
///
/// [`ApiError::Refused`] when the policy denies it, or any backend error.
pub async fn assign_to_me<A: HelpdeskApi>(
    api: &A,
    user: &User,
    ticket: &Ticket,
) -> Result<Ticket, ApiError> {
    policy::ensure(TicketOperation::AssignToMe, Some(user), ticket)?;
    api.assign_ticket(ticket.id, Assignment::User(user.id)).await
}

/// Remove the user assignee. Sends neither `userId` nor `teamId`.
///
/// # Errors
///
/// [`ApiError::Refused`] when the policy denies it, or any backend error.
pub async fn unassign<A: HelpdeskApi>(
    api: &A,
    user: &User,
    ticket: &Ticket,
) -> Result<Ticket, ApiError> {
    policy::ensure(TicketOperation::Unassign, Some(user), ticket)?;
    api.assign_ticket(ticket.id, Assignment::Unassign).await
}

/// Hand the ticket to another team; the backend clears the user assignee.
///
/// # Errors
///
/// [`ApiError::Refused`] without a user, or any backend error.
pub async fn forward<A: HelpdeskApi>(
    api: &A,
    user: &User,
    ticket: &Ticket,
    team_id: EntityId,
) -> Result<Ticket, ApiError> {
    policy::ensure(TicketOperation::Forward, Some(user), ticket)?;
    api.assign_ticket(ticket.id, Assignment::Team(team_id)).await
}

/// Close the ticket (admin) or approve its resolution (creator).
///
/// # Errors
///
/// [`ApiError::Refused`] when the policy denies it, or any backend error.
pub async fn approve<A: HelpdeskApi>(
    api: &A,
    user: &User,
    ticket: &Ticket,
) -> Result<Ticket, ApiError> {
    policy::ensure(TicketOperation::Close, Some(user), ticket)?;
    api.update_status(ticket.id, TicketStatus::Closed).await
}

/// Append a work log entry.
///
/// # Errors
///
/// [`ApiError::Refused`] for a blank description or when the policy denies
/// it, or any backend error.
pub async fn add_action<A: HelpdeskApi>(
    api: &A,
    user: &User,
    ticket: &Ticket,
    description: &str,
) -> Result<Ticket, ApiError> {
    policy::ensure(TicketOperation::AddAction, Some(user), ticket)?;
    let action = ActionRequest::new(description)?;
    api.add_action(ticket.id, &action).await
}

/// Create a ticket. Only administrators may name a user assignee.
///
/// # Errors
///
/// [`ApiError::Refused`] when a non-admin names an assignee, or any
/// backend error.
pub async fn create_ticket<A: HelpdeskApi>(
    api: &A,
    user: &User,
    draft: &TicketDraft,
) -> Result<Ticket, ApiError> {
    if draft.assigned_to.is_some() {
        policy::ensure_admin(Some(user), "assign_on_create")?;
    }
    let created = api.create_ticket(draft).await?;
    tracing::info!(ticket = %created.ticket_number, "ticket created");
    Ok(created)
}

/// Changes collected by the ticket edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketForm {
    pub details: TicketUpdate,
    /// Takes precedence over `team` when both are set.
    pub assignee: Option<EntityId>,
    pub team: Option<EntityId>,
    pub status: Option<TicketStatus>,
}

/// Save the edit form: details first, then the assignment, then the status.
///
/// Assignment and status are each attempted once the details are saved,
/// and both count as resolved whether they succeed or fail.
///
/// # Errors
///
/// [`ApiError::Refused`] when the user may not edit the ticket, may not
/// change assignment (non-admins), or may not move it to the requested
/// status. Checks run before any request is sent.
pub async fn save_ticket_form<A: HelpdeskApi>(
    api: &A,
    user: &User,
    ticket: &Ticket,
    form: &TicketForm,
) -> Result<WorkflowReport, ApiError> {
    policy::ensure(TicketOperation::Edit, Some(user), ticket)?;
    if form.assignee.is_some() || form.team.is_some() {
        policy::ensure_admin(Some(user), "assign")?;
    }
    if let Some(status) = form.status {
        policy::ensure_status_change(Some(user), ticket, status)?;
    }

    let mut report = WorkflowReport::new("save_ticket");
    if let Err(err) = api.update_ticket(ticket.id, &form.details).await {
        record_failure(&mut report, STEP_DETAILS, &err);
        return Ok(report);
    }
    report.succeeded(STEP_DETAILS);

    let assignment = form
        .assignee
        .map(Assignment::User)
        .or_else(|| form.team.map(Assignment::Team));
    if let Some(assignment) = assignment {
        match api.assign_ticket(ticket.id, assignment).await {
            Ok(_) => report.succeeded(STEP_ASSIGN),
            Err(err) => record_failure(&mut report, STEP_ASSIGN, &err),
        }
    }

    if let Some(status) = form.status {
        match api.update_status(ticket.id, status).await {
            Ok(_) => report.succeeded(STEP_STATUS),
            Err(err) => record_failure(&mut report, STEP_STATUS, &err),
        }
    }
    Ok(report)
}

/// Add each user to the team, one request per user.
///
/// Every request is issued regardless of earlier failures.
pub async fn add_team_members<A: HelpdeskApi>(
    api: &A,
    team_id: EntityId,
    members: &[EntityId],
) -> WorkflowReport {
    let mut report = WorkflowReport::new("add_team_members");
    for user_id in members {
        let step = format!("add_member:{user_id}");
        match api.add_team_member(team_id, *user_id).await {
            Ok(_) => report.succeeded(step),
            Err(err) => record_failure(&mut report, step, &err),
        }
    }
    tracing::debug!(
        team_id,
        resolved = report.resolved_count(),
        failed = report.failures().len(),
        "team members processed"
    );
    report
}

/// Result of [`save_team`].
#[derive(Debug, Clone, Serialize)]
pub struct TeamSaveOutcome {
    pub team: Team,
    pub members: WorkflowReport,
}

/// Create (no `team_id`) or update a team, then add `members`.
///
/// # Errors
///
/// [`ApiError::Refused`] for non-admins or an unnamed new team, or the
/// backend error from the create/update request. Member failures are
/// recorded in the report.
pub async fn save_team<A: HelpdeskApi>(
    api: &A,
    user: &User,
    team_id: Option<EntityId>,
    team: &TeamUpdate,
    members: &[EntityId],
) -> Result<TeamSaveOutcome, ApiError> {
    policy::ensure_admin(Some(user), "save_team")?;
    let saved = match team_id {
        Some(id) => api.update_team(id, team).await?,
        None => {
            if team.name.as_deref().is_none_or(|name| name.trim().is_empty()) {
                return Err(CoreError::Validation("team name must not be empty".into()).into());
            }
            api.create_team(team).await?
        }
    };
    let members = add_team_members(api, saved.id, members).await;
    Ok(TeamSaveOutcome {
        team: saved,
        members,
    })
}

/// Update a user's profile fields and team memberships (admin only).
///
/// # Errors
///
/// [`ApiError::Refused`] for non-admins, or any backend error.
pub async fn update_user<A: HelpdeskApi>(
    api: &A,
    actor: &User,
    id: EntityId,
    request: &UserUpdateRequest,
) -> Result<User, ApiError> {
    policy::ensure_admin(Some(actor), "update_user")?;
    api.update_user(id, request).await
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use desk_core::enums::Role;
    use desk_core::workflow::StepOutcome;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::session::SessionGate;
    use crate::testing::FakeApi;

    fn estimation() -> Estimation {
        Estimation::new("2d", NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn start_runs_three_steps_then_refreshes() {
        let me = FakeApi::user(5, Role::User, &[]);
        let ticket = FakeApi::ticket(42, TicketStatus::Open);
        let api = FakeApi::default().with_me(me.clone()).with_ticket(ticket.clone());

        let outcome = start_ticket(&api, &me, &ticket, &estimation(), &TicketQuery::new(0, 20))
            .await
            .unwrap();

        assert_eq!(
            api.calls(),
            vec!["update_ticket", "assign_ticket", "update_status", "list_tickets"]
        );
        assert!(outcome.report.is_complete());
        assert!(outcome.refreshed.is_some());

        let (_, update) = &api.updates.borrow()[0];
        assert_eq!(update.estimated_time.as_deref(), Some("2d"));
        assert_eq!(update.estimated_finish_date, NaiveDate::from_ymd_opt(2024, 6, 1));
        assert_eq!(api.assignments.borrow()[0], (42, Assignment::User(5)));
        assert_eq!(api.statuses.borrow()[0], (42, TicketStatus::InProgress));

        let stored = api.stored_ticket(42).unwrap();
        assert_eq!(stored.status, TicketStatus::InProgress);
        assert!(stored.is_assigned_to(5));
    }

    #[tokio::test]
    async fn start_skips_assign_when_already_mine() {
        let me = FakeApi::user(5, Role::User, &[]);
        let mut ticket = FakeApi::ticket(42, TicketStatus::Paused);
        ticket.assigned_to = Some(me.clone());
        let api = FakeApi::default().with_ticket(ticket.clone());

        let outcome = start_ticket(&api, &me, &ticket, &estimation(), &TicketQuery::new(0, 20))
            .await
            .unwrap();

        assert_eq!(api.calls(), vec!["update_ticket", "update_status", "list_tickets"]);
        assert!(matches!(outcome.report.steps[1].outcome, StepOutcome::Skipped(_)));
        assert!(outcome.report.is_complete());
    }

    #[tokio::test]
    async fn start_stops_at_failed_assign_without_refresh() {
        let me = FakeApi::user(5, Role::User, &[]);
        let ticket = FakeApi::ticket(42, TicketStatus::Open);
        let api = FakeApi::default()
            .with_ticket(ticket.clone())
            .failing("assign_ticket", 403);

        let outcome = start_ticket(&api, &me, &ticket, &estimation(), &TicketQuery::new(0, 20))
            .await
            .unwrap();

        assert_eq!(api.calls(), vec!["update_ticket", "assign_ticket"]);
        assert!(!outcome.report.is_complete());
        assert_eq!(outcome.report.steps[2].outcome, StepOutcome::NotAttempted);
        assert!(outcome.refreshed.is_none());
        // the estimate stays applied
        assert_eq!(api.stored_ticket(42).unwrap().estimated_time.as_deref(), Some("2d"));
    }

    #[tokio::test]
    async fn start_refused_sends_nothing() {
        let me = FakeApi::user(5, Role::User, &[]);
        let ticket = FakeApi::ticket(42, TicketStatus::InProgress);
        let api = FakeApi::default().with_ticket(ticket.clone());

        let err = start_ticket(&api, &me, &ticket, &estimation(), &TicketQuery::new(0, 20))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Refused(CoreError::NotPermitted { .. })));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn pause_requires_reason() {
        let me = FakeApi::user(5, Role::User, &[]);
        let ticket = FakeApi::ticket(7, TicketStatus::InProgress);
        let api = FakeApi::default().with_ticket(ticket.clone());

        let err = pause_ticket(&api, &me, &ticket, "   ").await.unwrap_err();
        assert!(matches!(err, ApiError::Refused(CoreError::Validation(_))));
        assert!(api.calls().is_empty());

        let paused = pause_ticket(&api, &me, &ticket, "waiting on parts").await.unwrap();
        assert_eq!(paused.status, TicketStatus::Paused);
    }

    #[tokio::test]
    async fn unassign_sends_no_target() {
        let admin = FakeApi::admin();
        let mut ticket = FakeApi::ticket(7, TicketStatus::Open);
        ticket.assigned_to = Some(FakeApi::user(9, Role::User, &[]));
        let api = FakeApi::default().with_ticket(ticket.clone());

        let updated = unassign(&api, &admin, &ticket).await.unwrap();
        assert_eq!(api.assignments.borrow()[0], (7, Assignment::Unassign));
        assert!(updated.assigned_to.is_none());
    }

    #[tokio::test]
    async fn forward_sends_only_team() {
        let me = FakeApi::user(5, Role::User, &[]);
        let mut ticket = FakeApi::ticket(7, TicketStatus::Open);
        ticket.assigned_to = Some(me.clone());
        let api = FakeApi::default().with_ticket(ticket.clone());

        let updated = forward(&api, &me, &ticket, 12).await.unwrap();
        assert_eq!(api.assignments.borrow()[0], (7, Assignment::Team(12)));
        assert_eq!(updated.team_id(), Some(12));
        assert!(updated.assigned_to.is_none());
    }

    #[tokio::test]
    async fn approve_rules() {
        let creator = FakeApi::user(100, Role::User, &[]);
        let open = FakeApi::ticket(1, TicketStatus::Open);
        let resolved = FakeApi::ticket(2, TicketStatus::Resolved);
        let api = FakeApi::default()
            .with_ticket(open.clone())
            .with_ticket(resolved.clone());

        assert!(approve(&api, &creator, &open).await.is_err());
        let closed = approve(&api, &creator, &resolved).await.unwrap();
        assert_eq!(closed.status, TicketStatus::Closed);
        let closed = approve(&api, &FakeApi::admin(), &open).await.unwrap();
        assert_eq!(closed.status, TicketStatus::Closed);
    }

    #[tokio::test]
    async fn add_action_only_while_in_progress() {
        let admin = FakeApi::admin();
        let open = FakeApi::ticket(1, TicketStatus::Open);
        let active = FakeApi::ticket(2, TicketStatus::InProgress);
        let api = FakeApi::default().with_ticket(open.clone()).with_ticket(active.clone());

        assert!(add_action(&api, &admin, &open, "rebooted").await.is_err());
        assert!(add_action(&api, &admin, &active, "rebooted").await.is_ok());
        assert_eq!(api.calls(), vec!["add_action"]);
    }

    #[tokio::test]
    async fn non_admin_cannot_assign_on_create() {
        let me = FakeApi::user(5, Role::User, &[]);
        let draft = TicketDraft::new("Printer", "Jammed", desk_core::enums::TicketPriority::Low)
            .unwrap()
            .with_assignee(Some(9));
        let api = FakeApi::default();
        let err = create_ticket(&api, &me, &draft).await.unwrap_err();
        assert!(matches!(err, ApiError::Refused(CoreError::AdminOnly { .. })));

        let draft = draft.with_assignee(None).with_team(Some(3));
        assert!(create_ticket(&api, &me, &draft).await.is_ok());
    }

    #[tokio::test]
    async fn form_save_runs_details_assign_status() {
        let admin = FakeApi::admin();
        let ticket = FakeApi::ticket(3, TicketStatus::Open);
        let api = FakeApi::default().with_ticket(ticket.clone());
        let form = TicketForm {
            details: TicketUpdate {
                title: Some("Renamed".into()),
                ..Default::default()
            },
            assignee: Some(8),
            team: Some(4),
            status: Some(TicketStatus::Resolved),
        };

        let report = save_ticket_form(&api, &admin, &ticket, &form).await.unwrap();
        assert_eq!(api.calls(), vec!["update_ticket", "assign_ticket", "update_status"]);
        assert_eq!(api.assignments.borrow()[0], (3, Assignment::User(8)));
        assert!(report.is_complete());
    }

    #[tokio::test]
    async fn form_save_counts_failed_followups_as_resolved() {
        let admin = FakeApi::admin();
        let ticket = FakeApi::ticket(3, TicketStatus::Open);
        let api = FakeApi::default()
            .with_ticket(ticket.clone())
            .failing("assign_ticket", 500);
        let form = TicketForm {
            team: Some(4),
            status: Some(TicketStatus::InProgress),
            ..Default::default()
        };

        let report = save_ticket_form(&api, &admin, &ticket, &form).await.unwrap();
        assert_eq!(api.calls(), vec!["update_ticket", "assign_ticket", "update_status"]);
        assert_eq!(report.resolved_count(), 3);
        assert_eq!(report.failures().len(), 1);
    }

    #[tokio::test]
    async fn form_save_refuses_reopen_for_member() {
        let member = FakeApi::user(5, Role::User, &[4]);
        let mut ticket = FakeApi::ticket(3, TicketStatus::Closed);
        ticket.assigned_team = Some(Team {
            id: 4,
            name: "Team 4".into(),
            description: None,
            leader: None,
            members: Vec::new(),
            active: true,
        });
        let api = FakeApi::default().with_ticket(ticket.clone());
        let form = TicketForm {
            status: Some(TicketStatus::Open),
            ..Default::default()
        };

        let err = save_ticket_form(&api, &member, &ticket, &form).await.unwrap_err();
        assert!(matches!(err, ApiError::Refused(CoreError::NotPermitted { .. })));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn member_additions_continue_past_failures() {
        let api = FakeApi::default().failing_member(2);
        let report = add_team_members(&api, 10, &[1, 2, 3]).await;

        assert_eq!(*api.members_added.borrow(), vec![(10, 1), (10, 2), (10, 3)]);
        assert_eq!(report.resolved_count(), 3);
        assert_eq!(report.succeeded_count(), 2);
        assert_eq!(report.failures()[0].name, "add_member:2");
    }

    #[tokio::test]
    async fn save_team_creates_then_adds_members() {
        let admin = FakeApi::admin();
        let api = FakeApi::default();
        let team = desk_core::updates::TeamUpdateBuilder::new()
            .name("Ops")
            .build_new()
            .unwrap();

        let outcome = save_team(&api, &admin, None, &team, &[4, 5]).await.unwrap();
        assert_eq!(outcome.team.name, "Ops");
        assert_eq!(
            api.calls(),
            vec!["create_team", "add_team_member", "add_team_member"]
        );
        assert!(outcome.members.is_complete());
    }

    #[tokio::test]
    async fn save_team_requires_admin() {
        let me = FakeApi::user(5, Role::User, &[]);
        let api = FakeApi::default();
        let err = save_team(&api, &me, Some(1), &TeamUpdate::default(), &[])
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Refused(CoreError::AdminOnly { .. })));
    }

    #[tokio::test]
    async fn start_keeps_report_when_refresh_fails() {
        let me = FakeApi::user(5, Role::User, &[]);
        let ticket = FakeApi::ticket(42, TicketStatus::Open);
        let api = FakeApi::default()
            .with_ticket(ticket.clone())
            .failing("list_tickets", 500);

        let outcome = start_ticket(&api, &me, &ticket, &estimation(), &TicketQuery::new(0, 20))
            .await
            .unwrap();

        assert_eq!(
            api.calls(),
            vec!["update_ticket", "assign_ticket", "update_status", "list_tickets"]
        );
        assert!(outcome.refreshed.is_none());
        assert_eq!(outcome.report.succeeded_count(), 3);
        assert_eq!(outcome.report.failures().len(), 1);
        assert_eq!(outcome.report.failures()[0].name, "refresh_list");
        assert!(!outcome.report.session_rejected);
        assert_eq!(api.stored_ticket(42).unwrap().status, TicketStatus::InProgress);
    }

    #[tokio::test]
    async fn rejected_start_step_expires_session() {
        let me = FakeApi::user(5, Role::User, &[]);
        let ticket = FakeApi::ticket(42, TicketStatus::Open);
        let api = FakeApi::default()
            .with_me(me.clone())
            .with_ticket(ticket.clone())
            .failing("update_ticket", 401);
        let mut gate = SessionGate::new();
        assert!(gate.check_auth(&api).await);

        let result = start_ticket(&api, &me, &ticket, &estimation(), &TicketQuery::new(0, 20)).await;
        let outcome = gate.observe(result).unwrap();
        assert!(outcome.report.session_rejected);
        assert!(gate.session().is_authenticated());

        gate.observe_report(&outcome.report);
        assert!(gate.session().needs_login());
    }

    #[tokio::test]
    async fn rejected_form_status_expires_session() {
        let admin = FakeApi::admin();
        let ticket = FakeApi::ticket(3, TicketStatus::Open);
        let api = FakeApi::default()
            .with_me(admin.clone())
            .with_ticket(ticket.clone())
            .failing("update_status", 401);
        let mut gate = SessionGate::new();
        assert!(gate.check_auth(&api).await);

        let form = TicketForm {
            status: Some(TicketStatus::Resolved),
            ..TicketForm::default()
        };
        let report = save_ticket_form(&api, &admin, &ticket, &form).await.unwrap();
        assert_eq!(report.failures()[0].name, "set_status");

        gate.observe_report(&report);
        assert!(gate.session().needs_login());
    }

    #[tokio::test]
    async fn member_failures_without_401_keep_session() {
        let api = FakeApi::default()
            .with_me(FakeApi::admin())
            .failing("add_team_member", 500);
        let mut gate = SessionGate::new();
        assert!(gate.check_auth(&api).await);

        let report = add_team_members(&api, 10, &[1]).await;
        assert!(report.has_failures());
        gate.observe_report(&report);
        assert!(gate.session().is_authenticated());
    }
}
