//! # desk-core
//!
//! Core types and presentation-layer rules for the Deskline helpdesk client.
//!
//! This crate is free of I/O. It provides:
//! - Entity structs mirroring the backend wire format (tickets, teams, users, ...)
//! - Status, priority and role enums
//! - The ticket permission policy (who may start, pause, assign, close, ...)
//! - Ticket list ordering and the status board grouping
//! - Dashboard aggregation (KPIs, growth, role-dependent lists, search)
//! - The explicit session context
//! - Update payload builders and the multi-step workflow report

pub mod board;
pub mod dashboard;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ordering;
pub mod policy;
pub mod session;
pub mod updates;
pub mod workflow;

#[cfg(test)]
mod test_support;
