use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AuthCommands, NotificationCommands, TeamCommands, TicketCommands, UserCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Login status and the external login hand-off.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Tickets and their lifecycle.
    Ticket {
        #[command(subcommand)]
        action: TicketCommands,
    },
    /// Team management.
    Team {
        #[command(subcommand)]
        action: TeamCommands,
    },
    /// User administration.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Unread notifications.
    Notification {
        #[command(subcommand)]
        action: NotificationCommands,
    },
    /// Monthly figures and the role-dependent ticket lists.
    Dashboard(DashboardArgs),
    /// Read a backend parameter.
    Param {
        #[command(subcommand)]
        action: ParamCommands,
    },
    /// Dump JSON schema for a wire type.
    Schema(SchemaArgs),
}

/// Arguments for `desk dashboard`.
#[derive(Clone, Debug, Args)]
pub struct DashboardArgs {
    /// Case-insensitive filter on ticket number or title.
    #[arg(long)]
    pub search: Option<String>,
    /// Restrict to one team.
    #[arg(long)]
    pub team: Option<i64>,
    /// Any day of the month to report on, `YYYY-MM-DD` (defaults to today).
    #[arg(long)]
    pub month: Option<chrono::NaiveDate>,
}

/// Parameter commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ParamCommands {
    /// Fetch one parameter by name.
    Get {
        name: String,
    },
}

/// Arguments for `desk schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type name, e.g. `ticket`, `team_update`, `workflow_report`.
    pub type_name: String,
}
