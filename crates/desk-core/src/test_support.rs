//! Fixture builders shared by unit tests.

use chrono::{NaiveDate, NaiveDateTime};

use crate::entities::{Team, TeamRef, Ticket, User};
use crate::enums::{Role, TicketPriority, TicketStatus};

pub fn at(month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, month, day)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .expect("valid fixture date")
}

pub fn user(id: i64, role: Role, teams: &[i64]) -> User {
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

pub fn team(id: i64) -> Team {
    Team {
        id,
        name: format!("Team {id}"),
        description: None,
        leader: None,
        members: Vec::new(),
        active: true,
    }
}

/// An unassigned ticket created by user 100 on 2024-03-`day`.
pub fn ticket(id: i64, status: TicketStatus, priority: TicketPriority, day: u32) -> Ticket {
    Ticket {
        id,
        ticket_number: format!("INC-{id}"),
        title: format!("Ticket {id}"),
        description: String::new(),
        status,
        priority,
        created_by: user(100, Role::User, &[]),
        assigned_to: None,
        assigned_team: None,
        estimated_time: None,
        estimated_finish_date: None,
        created_at: at(3, day),
        updated_at: None,
        actions: Vec::new(),
    }
}
