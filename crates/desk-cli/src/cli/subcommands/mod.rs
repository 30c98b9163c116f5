pub mod auth;
pub mod notification;
pub mod team;
pub mod ticket;
pub mod user;

pub use auth::AuthCommands;
pub use notification::NotificationCommands;
pub use team::TeamCommands;
pub use ticket::TicketCommands;
pub use user::UserCommands;
