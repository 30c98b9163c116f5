use chrono::NaiveDate;
use clap::{Args, Subcommand};

/// Ticket commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TicketCommands {
    /// List tickets, one backend page at a time.
    List(TicketListArgs),
    /// Group tickets by status.
    Board(TicketBoardArgs),
    /// Show one ticket with its work log.
    Get {
        id: i64,
    },
    /// Open a new ticket.
    Create(TicketCreateArgs),
    /// Edit details, assignment, and status in one go.
    Update(TicketUpdateArgs),
    /// Estimate, take, and start a ticket.
    Start(TicketStartArgs),
    /// Pause an in-progress ticket.
    Pause {
        id: i64,
        #[arg(long)]
        reason: String,
    },
    /// Assign the ticket to yourself.
    AssignMe {
        id: i64,
    },
    /// Remove the user assignee.
    Unassign {
        id: i64,
    },
    /// Hand the ticket to another team.
    Forward {
        id: i64,
        #[arg(long)]
        team: i64,
    },
    /// Close (admin) or approve a resolved ticket (creator).
    Approve {
        id: i64,
    },
    /// Append a work log entry.
    Action {
        id: i64,
        #[arg(long)]
        description: String,
    },
    /// Show which operations you may perform on a ticket.
    Permissions {
        id: i64,
    },
}

#[derive(Clone, Debug, Args)]
pub struct TicketListArgs {
    /// Only tickets assigned to you.
    #[arg(long)]
    pub mine: bool,
    /// open, in_progress, paused, resolved, closed
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub team: Option<i64>,
    #[arg(long, default_value_t = 0)]
    pub page: u32,
    /// Page size (defaults to `general.default_page_size`).
    #[arg(long)]
    pub size: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct TicketBoardArgs {
    #[arg(long)]
    pub mine: bool,
    #[arg(long)]
    pub team: Option<i64>,
}

#[derive(Clone, Debug, Args)]
pub struct TicketCreateArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: String,
    /// critical, high, medium, low
    #[arg(long, default_value = "medium")]
    pub priority: String,
    #[arg(long)]
    pub team: Option<i64>,
    /// Assignee user id (admin only).
    #[arg(long)]
    pub assignee: Option<i64>,
}

#[derive(Clone, Debug, Args)]
pub struct TicketUpdateArgs {
    pub id: i64,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    /// Assignee user id (admin only).
    #[arg(long)]
    pub assignee: Option<i64>,
    /// Team id (admin only).
    #[arg(long)]
    pub team: Option<i64>,
    #[arg(long)]
    pub estimate: Option<String>,
    #[arg(long)]
    pub finish_date: Option<NaiveDate>,
}

#[derive(Clone, Debug, Args)]
pub struct TicketStartArgs {
    pub id: i64,
    /// Estimated effort, free text such as `2d`.
    #[arg(long)]
    pub estimate: String,
    #[arg(long)]
    pub finish_date: NaiveDate,
}
