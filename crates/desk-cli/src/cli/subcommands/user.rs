use clap::{Args, Subcommand};

/// User administration commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// List users.
    List {
        #[arg(long)]
        include_inactive: bool,
    },
    /// Update a user's profile and team memberships (admin).
    Update(UserUpdateArgs),
}

#[derive(Clone, Debug, Args)]
pub struct UserUpdateArgs {
    pub id: i64,
    #[arg(long)]
    pub name: Option<String>,
    /// admin or user
    #[arg(long)]
    pub role: Option<String>,
    /// The backend always applies this field; omitted means keep current.
    #[arg(long)]
    pub active: Option<bool>,
    /// Replace team memberships (repeatable).
    #[arg(long = "team")]
    pub teams: Vec<i64>,
    /// Remove the user from every team.
    #[arg(long, conflicts_with = "teams")]
    pub clear_teams: bool,
}
