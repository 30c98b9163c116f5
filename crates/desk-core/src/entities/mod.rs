//! Entity structs for the helpdesk domain objects.
//!
//! Field names follow the backend's camelCase JSON. The server is
//! authoritative: these are transient, read-mostly copies. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema`.

mod notification;
mod page;
mod parameter;
mod team;
mod ticket;
mod user;

pub use notification::Notification;
pub use page::Page;
pub use parameter::Parameter;
pub use team::Team;
pub use ticket::{Ticket, TicketAction};
pub use user::{TeamRef, User};

/// Identifier type shared by every backend entity.
pub type EntityId = i64;
