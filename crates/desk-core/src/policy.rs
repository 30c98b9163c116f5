//! Ticket permission policy.
//!
//! Every check is a pure function of the acting user and the ticket. With no
//! authenticated user every check denies. These rules mirror the backend's
//! authorization for UI purposes only; the backend remains authoritative.
//!
//! "Team member" below means: the ticket has an assigned team and the user's
//! team list contains it.

use std::collections::BTreeSet;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Ticket, User};
use crate::enums::TicketStatus;
use crate::errors::CoreError;

/// An operation a user may attempt on a ticket.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum TicketOperation {
    Start,
    Pause,
    AssignToMe,
    Unassign,
    Forward,
    Close,
    AddAction,
    Edit,
}

impl TicketOperation {
    pub const ALL: [Self; 8] = [
        Self::Start,
        Self::Pause,
        Self::AssignToMe,
        Self::Unassign,
        Self::Forward,
        Self::Close,
        Self::AddAction,
        Self::Edit,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Pause => "pause",
            Self::AssignToMe => "assign_to_me",
            Self::Unassign => "unassign",
            Self::Forward => "forward",
            Self::Close => "close",
            Self::AddAction => "add_action",
            Self::Edit => "edit",
        }
    }
}

impl fmt::Display for TicketOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The set of operations permitted for one (user, ticket) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct PermissionSet(BTreeSet<TicketOperation>);

impl PermissionSet {
    #[must_use]
    pub fn allows(&self, operation: TicketOperation) -> bool {
        self.0.contains(&operation)
    }

    pub fn iter(&self) -> impl Iterator<Item = TicketOperation> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Evaluate every operation for `user` on `ticket`.
#[must_use]
pub fn permissions(user: Option<&User>, ticket: &Ticket) -> PermissionSet {
    PermissionSet(
        TicketOperation::ALL
            .into_iter()
            .filter(|operation| is_permitted(*operation, user, ticket))
            .collect(),
    )
}

/// Evaluate a single operation.
#[must_use]
pub fn is_permitted(operation: TicketOperation, user: Option<&User>, ticket: &Ticket) -> bool {
    match operation {
        TicketOperation::Start => can_start(user, ticket),
        TicketOperation::Pause => can_pause(user, ticket),
        TicketOperation::AssignToMe => can_assign_to_me(user, ticket),
        TicketOperation::Unassign => can_unassign(user, ticket),
        TicketOperation::Forward => can_forward(user, ticket),
        TicketOperation::Close => can_close(user, ticket),
        TicketOperation::AddAction => can_add_action(user, ticket),
        TicketOperation::Edit => can_edit(user, ticket),
    }
}

/// Fail with [`CoreError::NotPermitted`] unless `operation` is allowed.
///
/// # Errors
///
/// Returns [`CoreError::NotAuthenticated`] when `user` is `None`, otherwise
/// [`CoreError::NotPermitted`] when the rule denies the operation.
pub fn ensure(
    operation: TicketOperation,
    user: Option<&User>,
    ticket: &Ticket,
) -> Result<(), CoreError> {
    if user.is_none() {
        return Err(CoreError::NotAuthenticated);
    }
    if is_permitted(operation, user, ticket) {
        Ok(())
    } else {
        Err(CoreError::NotPermitted {
            operation: operation.to_string(),
            ticket: ticket.ticket_number.clone(),
        })
    }
}

/// Fail unless a direct status change to `target` is allowed.
///
/// # Errors
///
/// [`CoreError::NotAuthenticated`] without a user, otherwise
/// [`CoreError::NotPermitted`] with operation `change_status`.
pub fn ensure_status_change(
    user: Option<&User>,
    ticket: &Ticket,
    target: TicketStatus,
) -> Result<(), CoreError> {
    if user.is_none() {
        return Err(CoreError::NotAuthenticated);
    }
    if can_change_status(user, ticket, target) {
        Ok(())
    } else {
        Err(CoreError::NotPermitted {
            operation: format!("change_status to {target}"),
            ticket: ticket.ticket_number.clone(),
        })
    }
}

/// Fail unless the user is an administrator.
///
/// # Errors
///
/// [`CoreError::NotAuthenticated`] without a user, otherwise
/// [`CoreError::AdminOnly`].
pub fn ensure_admin(user: Option<&User>, operation: &str) -> Result<(), CoreError> {
    match user {
        None => Err(CoreError::NotAuthenticated),
        Some(user) if user.is_admin() => Ok(()),
        Some(_) => Err(CoreError::AdminOnly {
            operation: operation.to_string(),
        }),
    }
}

/// Whether the user belongs to the ticket's assigned team.
#[must_use]
pub fn is_team_member(user: &User, ticket: &Ticket) -> bool {
    ticket
        .team_id()
        .is_some_and(|team_id| user.is_member_of(team_id))
}

/// A ticket held by a team is off limits to non-admin outsiders.
fn passes_team_gate(user: &User, ticket: &Ticket) -> bool {
    ticket.assigned_team.is_none() || user.is_admin() || is_team_member(user, ticket)
}

fn admin_or_team_member(user: &User, ticket: &Ticket) -> bool {
    user.is_admin() || is_team_member(user, ticket)
}

#[must_use]
pub fn can_start(user: Option<&User>, ticket: &Ticket) -> bool {
    let Some(user) = user else {
        return false;
    };
    if !passes_team_gate(user, ticket) {
        return false;
    }
    !matches!(
        ticket.status,
        TicketStatus::InProgress | TicketStatus::Resolved | TicketStatus::Closed
    )
}

#[must_use]
pub fn can_pause(user: Option<&User>, ticket: &Ticket) -> bool {
    user.is_some() && ticket.status == TicketStatus::InProgress
}

#[must_use]
pub fn can_assign_to_me(user: Option<&User>, ticket: &Ticket) -> bool {
    let Some(user) = user else {
        return false;
    };
    passes_team_gate(user, ticket) && !ticket.is_assigned_to(user.id)
}

#[must_use]
pub fn can_unassign(user: Option<&User>, ticket: &Ticket) -> bool {
    let Some(user) = user else {
        return false;
    };
    ticket.is_assigned_to(user.id) || (user.is_admin() && ticket.assigned_to.is_some())
}

#[must_use]
pub const fn can_forward(user: Option<&User>, _ticket: &Ticket) -> bool {
    user.is_some()
}

/// Admins close from any state; a creator may approve a resolved ticket.
#[must_use]
pub fn can_close(user: Option<&User>, ticket: &Ticket) -> bool {
    let Some(user) = user else {
        return false;
    };
    if user.is_admin() {
        return true;
    }
    ticket.status == TicketStatus::Resolved && ticket.is_created_by(user.id)
}

#[must_use]
pub fn can_add_action(user: Option<&User>, ticket: &Ticket) -> bool {
    let Some(user) = user else {
        return false;
    };
    ticket.status == TicketStatus::InProgress && admin_or_team_member(user, ticket)
}

#[must_use]
pub fn can_edit(user: Option<&User>, ticket: &Ticket) -> bool {
    user.is_some_and(|user| admin_or_team_member(user, ticket))
}

/// Whether a direct status change to `target` would be accepted.
///
/// Non-admins may never reopen finished work. Otherwise they need team
/// membership, except for a creator approving a resolved ticket.
#[must_use]
pub fn can_change_status(user: Option<&User>, ticket: &Ticket, target: TicketStatus) -> bool {
    let Some(user) = user else {
        return false;
    };
    if user.is_admin() {
        return true;
    }
    if ticket.status.is_reopening(target) {
        return false;
    }
    let approving = ticket.is_created_by(user.id)
        && ticket.status == TicketStatus::Resolved
        && target == TicketStatus::Closed;
    is_team_member(user, ticket) || approving
}

/// Estimation fields are shown when the ticket is assigned to the user.
#[must_use]
pub fn show_estimation_fields(user: Option<&User>, ticket: &Ticket) -> bool {
    user.is_some_and(|user| ticket.is_assigned_to(user.id))
}
