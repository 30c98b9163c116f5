use clap::{Args, Subcommand};

/// Team management commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TeamCommands {
    /// List teams.
    List {
        #[arg(long)]
        include_inactive: bool,
    },
    /// Create a team and add members (admin).
    Create(TeamCreateArgs),
    /// Update a team and add members (admin).
    Update(TeamUpdateArgs),
    /// Add one user to a team (admin).
    AddMember {
        id: i64,
        #[arg(long)]
        user: i64,
    },
}

#[derive(Clone, Debug, Args)]
pub struct TeamCreateArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub description: Option<String>,
    /// Leader user id; the backend also makes the leader a member.
    #[arg(long)]
    pub leader: Option<i64>,
    /// User to add after creation (repeatable).
    #[arg(long = "member")]
    pub members: Vec<i64>,
}

#[derive(Clone, Debug, Args)]
pub struct TeamUpdateArgs {
    pub id: i64,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub leader: Option<i64>,
    #[arg(long)]
    pub active: Option<bool>,
    /// User to add after the update (repeatable).
    #[arg(long = "member")]
    pub members: Vec<i64>,
}
