//! The backend operations the workflows are written against.
//!
//! [`DeskClient`] is the production implementation; tests substitute a
//! recording fake so workflow sequencing can be checked without a server.

use desk_core::entities::{EntityId, Notification, Page, Parameter, Team, Ticket, User};
use desk_core::enums::TicketStatus;
use desk_core::updates::{
    ActionRequest, Assignment, PauseRequest, TeamUpdate, TicketDraft, TicketUpdate,
    UserUpdateRequest,
};

use crate::{ApiError, DeskClient, TicketQuery};

#[allow(async_fn_in_trait)]
pub trait HelpdeskApi {
    async fn current_user(&self) -> Result<User, ApiError>;
    async fn list_users(&self, include_inactive: bool) -> Result<Vec<User>, ApiError>;
    async fn update_user(&self, id: EntityId, update: &UserUpdateRequest)
    -> Result<User, ApiError>;

    async fn list_teams(&self, include_inactive: bool) -> Result<Vec<Team>, ApiError>;
    async fn create_team(&self, team: &TeamUpdate) -> Result<Team, ApiError>;
    async fn update_team(&self, id: EntityId, team: &TeamUpdate) -> Result<Team, ApiError>;
    async fn add_team_member(&self, team_id: EntityId, user_id: EntityId)
    -> Result<Team, ApiError>;

    async fn list_tickets(&self, query: &TicketQuery) -> Result<Page<Ticket>, ApiError>;
    async fn get_ticket(&self, id: EntityId) -> Result<Ticket, ApiError>;
    async fn create_ticket(&self, draft: &TicketDraft) -> Result<Ticket, ApiError>;
    async fn update_ticket(&self, id: EntityId, update: &TicketUpdate)
    -> Result<Ticket, ApiError>;
    async fn update_status(&self, id: EntityId, status: TicketStatus) -> Result<Ticket, ApiError>;
    async fn assign_ticket(&self, id: EntityId, assignment: Assignment)
    -> Result<Ticket, ApiError>;
    async fn pause_ticket(&self, id: EntityId, pause: &PauseRequest) -> Result<Ticket, ApiError>;
    async fn add_action(&self, id: EntityId, action: &ActionRequest) -> Result<Ticket, ApiError>;

    async fn unread_notifications(&self) -> Result<Vec<Notification>, ApiError>;
    async fn mark_notification_read(&self, id: EntityId) -> Result<(), ApiError>;

    async fn get_parameter(&self, name: &str) -> Result<Parameter, ApiError>;
}

impl HelpdeskApi for DeskClient {
    async fn current_user(&self) -> Result<User, ApiError> {
        Self::current_user(self).await
    }

    async fn list_users(&self, include_inactive: bool) -> Result<Vec<User>, ApiError> {
        Self::list_users(self, include_inactive).await
    }

    async fn update_user(
        &self,
        id: EntityId,
        update: &UserUpdateRequest,
    ) -> Result<User, ApiError> {
        Self::update_user(self, id, update).await
    }

    async fn list_teams(&self, include_inactive: bool) -> Result<Vec<Team>, ApiError> {
        Self::list_teams(self, include_inactive).await
    }

    async fn create_team(&self, team: &TeamUpdate) -> Result<Team, ApiError> {
        Self::create_team(self, team).await
    }

    async fn update_team(&self, id: EntityId, team: &TeamUpdate) -> Result<Team, ApiError> {
        Self::update_team(self, id, team).await
    }

    async fn add_team_member(
        &self,
        team_id: EntityId,
        user_id: EntityId,
    ) -> Result<Team, ApiError> {
        Self::add_team_member(self, team_id, user_id).await
    }

    async fn list_tickets(&self, query: &TicketQuery) -> Result<Page<Ticket>, ApiError> {
        Self::list_tickets(self, query).await
    }

    async fn get_ticket(&self, id: EntityId) -> Result<Ticket, ApiError> {
        Self::get_ticket(self, id).await
    }

    async fn create_ticket(&self, draft: &TicketDraft) -> Result<Ticket, ApiError> {
        Self::create_ticket(self, draft).await
    }

    async fn update_ticket(
        &self,
        id: EntityId,
        update: &TicketUpdate,
    ) -> Result<Ticket, ApiError> {
        Self::update_ticket(self, id, update).await
    }

    async fn update_status(&self, id: EntityId, status: TicketStatus) -> Result<Ticket, ApiError> {
        Self::update_status(self, id, status).await
    }

    async fn assign_ticket(
        &self,
        id: EntityId,
        assignment: Assignment,
    ) -> Result<Ticket, ApiError> {
        Self::assign_ticket(self, id, assignment).await
    }

    async fn pause_ticket(&self, id: EntityId, pause: &PauseRequest) -> Result<Ticket, ApiError> {
        Self::pause_ticket(self, id, pause).await
    }

    async fn add_action(&self, id: EntityId, action: &ActionRequest) -> Result<Ticket, ApiError> {
        Self::add_action(self, id, action).await
    }

    async fn unread_notifications(&self) -> Result<Vec<Notification>, ApiError> {
        Self::unread_notifications(self).await
    }

    async fn mark_notification_read(&self, id: EntityId) -> Result<(), ApiError> {
        Self::mark_notification_read(self, id).await
    }

    async fn get_parameter(&self, name: &str) -> Result<Parameter, ApiError> {
        Self::get_parameter(self, name).await
    }
}
