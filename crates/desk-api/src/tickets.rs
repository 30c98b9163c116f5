//! `/tickets` endpoints and the list query.

use chrono::NaiveDate;
use desk_core::entities::{EntityId, Page, Ticket};
use desk_core::enums::TicketStatus;
use desk_core::updates::{ActionRequest, Assignment, PauseRequest, TicketDraft, TicketUpdate};

use crate::{ApiError, DeskClient, http};

/// Server-side filters for `GET /tickets`. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketFilters {
    pub assigned_to: Option<EntityId>,
    pub assigned_team: Option<EntityId>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub assigned_to_me: bool,
    pub status: Option<TicketStatus>,
    pub status_changed_from: Option<String>,
}

/// Page, size, sort and filters for a ticket listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketQuery {
    pub page: u32,
    pub size: u32,
    /// Spring-style sort, e.g. `createdAt,desc`.
    pub sort: Option<String>,
    pub filters: TicketFilters,
}

impl TicketQuery {
    #[must_use]
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            sort: None,
            filters: TicketFilters::default(),
        }
    }

    #[must_use]
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    #[must_use]
    pub fn filters(mut self, filters: TicketFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Query-string pairs in the order the backend documents them.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let date = |d: NaiveDate| d.format("%Y-%m-%d").to_string();
        let f = &self.filters;

        let mut pairs = vec![("page", self.page.to_string()), ("size", self.size.to_string())];
        if let Some(sort) = &self.sort {
            pairs.push(("sort", sort.clone()));
        }
        if let Some(id) = f.assigned_to {
            pairs.push(("assignedTo", id.to_string()));
        }
        if let Some(id) = f.assigned_team {
            pairs.push(("assignedTeam", id.to_string()));
        }
        if let Some(d) = f.start_date {
            pairs.push(("startDate", date(d)));
        }
        if let Some(d) = f.end_date {
            pairs.push(("endDate", date(d)));
        }
        if f.assigned_to_me {
            pairs.push(("assignedToMe", "true".into()));
        }
        if let Some(status) = f.status {
            pairs.push(("status", status.as_str().into()));
        }
        if let Some(from) = &f.status_changed_from {
            pairs.push(("statusChangedFrom", from.clone()));
        }
        pairs
    }
}

impl DeskClient {
    /// `GET /tickets` with paging and filters.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] raised by the response boundary.
    pub async fn list_tickets(&self, query: &TicketQuery) -> Result<Page<Ticket>, ApiError> {
        let request = self.http.get(self.url("/tickets")).query(&query.to_pairs());
        http::send_json(request).await
    }

    /// `GET /tickets/{id}`.
    ///
    /// # Errors
    ///
    /// [`ApiError::NotFound`] for an unknown id, or any other boundary error.
    pub async fn get_ticket(&self, id: EntityId) -> Result<Ticket, ApiError> {
        http::send_json(self.http.get(self.url(&format!("/tickets/{id}")))).await
    }

    /// `POST /tickets`.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] raised by the response boundary.
    pub async fn create_ticket(&self, draft: &TicketDraft) -> Result<Ticket, ApiError> {
        http::send_json(self.http.post(self.url("/tickets")).json(draft)).await
    }

    /// `PUT /tickets/{id}`.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] raised by the response boundary.
    pub async fn update_ticket(
        &self,
        id: EntityId,
        update: &TicketUpdate,
    ) -> Result<Ticket, ApiError> {
        let request = self.http.put(self.url(&format!("/tickets/{id}"))).json(update);
        http::send_json(request).await
    }

    /// `PATCH /tickets/{id}/status?status=`.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] raised by the response boundary.
    pub async fn update_status(
        &self,
        id: EntityId,
        status: TicketStatus,
    ) -> Result<Ticket, ApiError> {
        let request = self
            .http
            .patch(self.url(&format!("/tickets/{id}/status")))
            .query(&[("status", status.as_str())]);
        http::send_json(request).await
    }

    /// `PATCH /tickets/{id}/assign` with `userId`, `teamId`, or neither.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] raised by the response boundary.
    pub async fn assign_ticket(
        &self,
        id: EntityId,
        assignment: Assignment,
    ) -> Result<Ticket, ApiError> {
        let request = self
            .http
            .patch(self.url(&format!("/tickets/{id}/assign")))
            .query(&assignment.query());
        http::send_json(request).await
    }

    /// `PUT /tickets/{id}/pause` with `{ reason }`.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] raised by the response boundary.
    pub async fn pause_ticket(
        &self,
        id: EntityId,
        pause: &PauseRequest,
    ) -> Result<Ticket, ApiError> {
        let request = self.http.put(self.url(&format!("/tickets/{id}/pause"))).json(pause);
        http::send_json(request).await
    }

    /// `POST /tickets/{id}/actions` with `{ description }`.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] raised by the response boundary.
    pub async fn add_action(
        &self,
        id: EntityId,
        action: &ActionRequest,
    ) -> Result<Ticket, ApiError> {
        let request = self
            .http
            .post(self.url(&format!("/tickets/{id}/actions")))
            .json(action);
        http::send_json(request).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn keys(pairs: &[(&'static str, String)]) -> Vec<&'static str> {
        pairs.iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn bare_query_sends_only_paging() {
        let pairs = TicketQuery::new(0, 20).to_pairs();
        assert_eq!(
            pairs,
            vec![("page", "0".to_string()), ("size", "20".to_string())]
        );
    }

    #[test]
    fn full_query_serializes_every_filter() {
        let query = TicketQuery::new(2, 50).sort("createdAt,desc").filters(TicketFilters {
            assigned_to: Some(4),
            assigned_team: Some(3),
            start_date: NaiveDate::from_ymd_opt(2024, 5, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 5, 31),
            assigned_to_me: true,
            status: Some(TicketStatus::InProgress),
            status_changed_from: Some("2024-05-10T00:00:00".into()),
        });
        let pairs = query.to_pairs();
        assert_eq!(
            keys(&pairs),
            vec![
                "page",
                "size",
                "sort",
                "assignedTo",
                "assignedTeam",
                "startDate",
                "endDate",
                "assignedToMe",
                "status",
                "statusChangedFrom",
            ]
        );
        assert_eq!(pairs[5].1, "2024-05-01");
        assert_eq!(pairs[6].1, "2024-05-31");
        assert_eq!(pairs[8].1, "IN_PROGRESS");
    }

    #[test]
    fn assigned_to_me_false_is_omitted() {
        let query = TicketQuery::new(0, 1).filters(TicketFilters {
            assigned_team: Some(9),
            ..Default::default()
        });
        assert_eq!(keys(&query.to_pairs()), vec!["page", "size", "assignedTeam"]);
    }

    #[test]
    fn parse_ticket_page() {
        let json = r#"{
            "content": [{
                "id": 7,
                "ticketNumber": "2024000007",
                "title": "Shared drive full",
                "description": "",
                "status": "OPEN",
                "priority": "LOW",
                "createdBy": { "id": 2, "name": "Lin", "role": "USER" },
                "createdAt": "2024-05-02T09:30:00",
                "actions": []
            }],
            "totalElements": 41,
            "totalPages": 41,
            "size": 1,
            "number": 0
        }"#;
        let page: Page<Ticket> = serde_json::from_str(json).unwrap();
        assert_eq!(page.total_elements, 41);
        assert_eq!(page.content[0].ticket_number, "2024000007");
        assert!(!page.is_last());
    }
}
