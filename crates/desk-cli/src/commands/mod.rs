pub mod auth;
pub mod dashboard;
pub mod dispatch;
pub mod notification;
pub mod param;
pub mod schema;
pub mod shared;
pub mod team;
pub mod ticket;
pub mod user;
