//! In-memory [`HelpdeskApi`] that records every call.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use desk_core::entities::{
    EntityId, Notification, Page, Parameter, Team, TeamRef, Ticket, User,
};
use desk_core::enums::{Role, TicketPriority, TicketStatus};
use desk_core::updates::{
    ActionRequest, Assignment, PauseRequest, TeamUpdate, TicketDraft, TicketUpdate,
    UserUpdateRequest,
};

use crate::{ApiError, HelpdeskApi, TicketQuery, http};

#[derive(Default)]
pub struct FakeApi {
    me: Option<User>,
    parameters: HashMap<String, String>,
    failing: HashMap<&'static str, u16>,
    failing_members: Vec<EntityId>,
    previous_total: u64,
    calls: RefCell<Vec<String>>,
    tickets: RefCell<BTreeMap<EntityId, Ticket>>,
    teams: RefCell<BTreeMap<EntityId, Team>>,
    notifications: RefCell<Vec<Notification>>,
    pub assignments: RefCell<Vec<(EntityId, Assignment)>>,
    pub statuses: RefCell<Vec<(EntityId, TicketStatus)>>,
    pub updates: RefCell<Vec<(EntityId, TicketUpdate)>>,
    pub members_added: RefCell<Vec<(EntityId, EntityId)>>,
    pub queries: RefCell<Vec<TicketQuery>>,
}

impl FakeApi {
    pub fn user(id: EntityId, role: Role, teams: &[EntityId]) -> User {
        User {
            id,
            email: format!("u{id}@example.com"),
            name: format!("User {id}"),
            role,
            teams: teams
                .iter()
                .map(|team| TeamRef {
                    id: *team,
                    name: format!("Team {team}"),
                })
                .collect(),
            active: true,
            avatar_url: None,
            preferred_language: None,
        }
    }

    pub fn admin() -> User {
        Self::user(1, Role::Admin, &[])
    }

    pub fn ticket(id: EntityId, status: TicketStatus) -> Ticket {
        Ticket {
            id,
            ticket_number: format!("2024{id:06}"),
            title: format!("Ticket {id}"),
            description: String::new(),
            status,
            priority: TicketPriority::Medium,
            created_by: Self::user(100, Role::User, &[]),
            assigned_to: None,
            assigned_team: None,
            estimated_time: None,
            estimated_finish_date: None,
            created_at: NaiveDate::from_ymd_opt(2024, 5, 1)
                .and_then(|d| d.and_hms_opt(9, 0, 0))
                .unwrap(),
            updated_at: None,
            actions: Vec::new(),
        }
    }

    pub fn with_me(mut self, user: User) -> Self {
        self.me = Some(user);
        self
    }

    pub fn with_ticket(self, ticket: Ticket) -> Self {
        self.tickets.borrow_mut().insert(ticket.id, ticket);
        self
    }

    pub fn with_parameter(mut self, name: &str, value: &str) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    pub fn with_notification(self, notification: Notification) -> Self {
        self.notifications.borrow_mut().push(notification);
        self
    }

    pub const fn with_previous_total(mut self, total: u64) -> Self {
        self.previous_total = total;
        self
    }

    /// Make every call to `operation` fail with `status`.
    pub fn failing(mut self, operation: &'static str, status: u16) -> Self {
        self.failing.insert(operation, status);
        self
    }

    /// Make `add_team_member` fail for one user.
    pub fn failing_member(mut self, user_id: EntityId) -> Self {
        self.failing_members.push(user_id);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn stored_ticket(&self, id: EntityId) -> Option<Ticket> {
        self.tickets.borrow().get(&id).cloned()
    }

    fn enter(&self, operation: &'static str) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(operation.to_string());
        match self.failing.get(operation) {
            Some(status) => Err(http::classify(*status, "")),
            None => Ok(()),
        }
    }

    fn with_stored<F>(&self, id: EntityId, change: F) -> Result<Ticket, ApiError>
    where
        F: FnOnce(&mut Ticket),
    {
        let mut tickets = self.tickets.borrow_mut();
        let ticket = tickets.get_mut(&id).ok_or(ApiError::NotFound)?;
        change(ticket);
        Ok(ticket.clone())
    }
}

impl HelpdeskApi for FakeApi {
    async fn current_user(&self) -> Result<User, ApiError> {
        self.enter("current_user")?;
        self.me.clone().ok_or(ApiError::Unauthenticated)
    }

    async fn list_users(&self, _include_inactive: bool) -> Result<Vec<User>, ApiError> {
        self.enter("list_users")?;
        Ok(self.me.clone().into_iter().collect())
    }

    async fn update_user(
        &self,
        id: EntityId,
        update: &UserUpdateRequest,
    ) -> Result<User, ApiError> {
        self.enter("update_user")?;
        let mut user = Self::user(id, update.user.role.unwrap_or(Role::User), &[]);
        user.active = update.user.active;
        Ok(user)
    }

    async fn list_teams(&self, _include_inactive: bool) -> Result<Vec<Team>, ApiError> {
        self.enter("list_teams")?;
        Ok(self.teams.borrow().values().cloned().collect())
    }

    async fn create_team(&self, team: &TeamUpdate) -> Result<Team, ApiError> {
        self.enter("create_team")?;
        let id = self.teams.borrow().len() as EntityId + 50;
        let created = Team {
            id,
            name: team.name.clone().unwrap_or_default(),
            description: team.description.clone(),
            leader: None,
            members: Vec::new(),
            active: team.active.unwrap_or(true),
        };
        self.teams.borrow_mut().insert(id, created.clone());
        Ok(created)
    }

    async fn update_team(&self, id: EntityId, team: &TeamUpdate) -> Result<Team, ApiError> {
        self.enter("update_team")?;
        Ok(Team {
            id,
            name: team.name.clone().unwrap_or_default(),
            description: team.description.clone(),
            leader: None,
            members: Vec::new(),
            active: true,
        })
    }

    async fn add_team_member(
        &self,
        team_id: EntityId,
        user_id: EntityId,
    ) -> Result<Team, ApiError> {
        self.enter("add_team_member")?;
        self.members_added.borrow_mut().push((team_id, user_id));
        if self.failing_members.contains(&user_id) {
            return Err(ApiError::NotFound);
        }
        Ok(Team {
            id: team_id,
            name: String::new(),
            description: None,
            leader: None,
            members: Vec::new(),
            active: true,
        })
    }

    async fn list_tickets(&self, query: &TicketQuery) -> Result<Page<Ticket>, ApiError> {
        self.enter("list_tickets")?;
        self.queries.borrow_mut().push(query.clone());
        let all: Vec<Ticket> = self.tickets.borrow().values().cloned().collect();
        let total = if query.size == 1 {
            self.previous_total
        } else {
            all.len() as u64
        };
        let content: Vec<Ticket> = all.into_iter().take(query.size as usize).collect();
        Ok(Page {
            size: query.size,
            number: query.page,
            total_pages: 1,
            total_elements: total,
            content,
        })
    }

    async fn get_ticket(&self, id: EntityId) -> Result<Ticket, ApiError> {
        self.enter("get_ticket")?;
        self.stored_ticket(id).ok_or(ApiError::NotFound)
    }

    async fn create_ticket(&self, draft: &TicketDraft) -> Result<Ticket, ApiError> {
        self.enter("create_ticket")?;
        let id = self.tickets.borrow().len() as EntityId + 1;
        let mut ticket = Self::ticket(id, TicketStatus::Open);
        ticket.title.clone_from(&draft.title);
        ticket.description.clone_from(&draft.description);
        ticket.priority = draft.priority;
        self.tickets.borrow_mut().insert(id, ticket.clone());
        Ok(ticket)
    }

    async fn update_ticket(
        &self,
        id: EntityId,
        update: &TicketUpdate,
    ) -> Result<Ticket, ApiError> {
        self.enter("update_ticket")?;
        self.updates.borrow_mut().push((id, update.clone()));
        self.with_stored(id, |ticket| {
            if let Some(title) = &update.title {
                ticket.title.clone_from(title);
            }
            if let Some(estimate) = &update.estimated_time {
                ticket.estimated_time = Some(estimate.clone());
            }
            if let Some(date) = update.estimated_finish_date {
                ticket.estimated_finish_date = Some(date);
            }
        })
    }

    async fn update_status(&self, id: EntityId, status: TicketStatus) -> Result<Ticket, ApiError> {
        self.enter("update_status")?;
        self.statuses.borrow_mut().push((id, status));
        self.with_stored(id, |ticket| ticket.status = status)
    }

    async fn assign_ticket(
        &self,
        id: EntityId,
        assignment: Assignment,
    ) -> Result<Ticket, ApiError> {
        self.enter("assign_ticket")?;
        self.assignments.borrow_mut().push((id, assignment));
        let me = self.me.clone();
        self.with_stored(id, |ticket| match assignment {
            Assignment::User(user_id) => {
                ticket.assigned_to = me
                    .filter(|user| user.id == user_id)
                    .or_else(|| Some(Self::user(user_id, Role::User, &[])));
            }
            Assignment::Team(team_id) => {
                ticket.assigned_to = None;
                ticket.assigned_team = Some(Team {
                    id: team_id,
                    name: format!("Team {team_id}"),
                    description: None,
                    leader: None,
                    members: Vec::new(),
                    active: true,
                });
            }
            Assignment::Unassign => ticket.assigned_to = None,
        })
    }

    async fn pause_ticket(&self, id: EntityId, _pause: &PauseRequest) -> Result<Ticket, ApiError> {
        self.enter("pause_ticket")?;
        self.with_stored(id, |ticket| ticket.status = TicketStatus::Paused)
    }

    async fn add_action(&self, id: EntityId, _action: &ActionRequest) -> Result<Ticket, ApiError> {
        self.enter("add_action")?;
        self.with_stored(id, |_| {})
    }

    async fn unread_notifications(&self) -> Result<Vec<Notification>, ApiError> {
        self.enter("unread_notifications")?;
        Ok(self
            .notifications
            .borrow()
            .iter()
            .filter(|n| !n.read)
            .cloned()
            .collect())
    }

    async fn mark_notification_read(&self, id: EntityId) -> Result<(), ApiError> {
        self.enter("mark_notification_read")?;
        let mut notifications = self.notifications.borrow_mut();
        let notification = notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(ApiError::NotFound)?;
        notification.read = true;
        Ok(())
    }

    async fn get_parameter(&self, name: &str) -> Result<Parameter, ApiError> {
        self.enter("get_parameter")?;
        self.parameters
            .get(name)
            .map(|value| Parameter {
                id: 1,
                name: name.to_string(),
                description: None,
                value: Some(value.clone()),
            })
            .ok_or(ApiError::NotFound)
    }
}
