use clap::{Args, Subcommand};

/// Notification commands.
#[derive(Clone, Debug, Subcommand)]
pub enum NotificationCommands {
    /// List unread notifications.
    List,
    /// Mark one notification as read.
    Read {
        id: i64,
    },
    /// Poll for unread notifications until interrupted.
    Watch(WatchArgs),
}

#[derive(Clone, Debug, Args)]
pub struct WatchArgs {
    /// Poll interval in seconds (defaults to `notifications.poll_interval_secs`).
    #[arg(long)]
    pub interval: Option<u64>,
}
