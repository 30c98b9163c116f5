//! Ticket list ordering.
//!
//! Lists are ordered by priority rank ascending (critical first, unknown
//! last), then by creation time descending. `sort_by` is stable, so tickets
//! equal on both keys keep their incoming order.

use std::cmp::Ordering;

use crate::entities::Ticket;

/// Compare two tickets by list order.
#[must_use]
pub fn compare(a: &Ticket, b: &Ticket) -> Ordering {
    a.priority
        .rank()
        .cmp(&b.priority.rank())
        .then_with(|| b.created_at.cmp(&a.created_at))
}

/// Sort tickets in place by list order.
pub fn sort_tickets(tickets: &mut [Ticket]) {
    tickets.sort_by(compare);
}

/// Most recently created first, without regard to priority.
pub fn sort_newest_first(tickets: &mut [Ticket]) {
    tickets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
