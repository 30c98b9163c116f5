use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Show who the configured session belongs to.
    Status,
    /// Open the provider's login page in a browser.
    Login(AuthLoginArgs),
    /// Forget the cached identity.
    Logout,
    /// List the login providers the backend enables.
    Providers,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Login provider (default: google).
    #[arg(long)]
    pub provider: Option<String>,
    /// Print the login URL instead of opening a browser.
    #[arg(long)]
    pub no_browser: bool,
}
