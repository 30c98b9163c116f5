use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `desk` binary.
#[derive(Debug, Parser)]
#[command(name = "desk", version, about = "Deskline - helpdesk tickets from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Max rows to print
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding `.deskline/config.toml` and `.env` (defaults to cwd)
    #[arg(short, long, global = true)]
    pub project: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            project: self.project.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::subcommands::{
        AuthCommands, NotificationCommands, TeamCommands, TicketCommands, UserCommands,
    };
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "desk", "--format", "json", "--limit", "10", "--verbose", "ticket", "list",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Ticket {
                action: TicketCommands::List(_)
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["desk", "dashboard", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Dashboard(_)));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["desk", "--format", "xml", "dashboard"]).is_err());
    }

    #[test]
    fn ticket_start_requires_estimate_and_date() {
        assert!(Cli::try_parse_from(["desk", "ticket", "start", "4"]).is_err());

        let cli = Cli::try_parse_from([
            "desk", "ticket", "start", "4", "--estimate", "2d", "--finish-date", "2024-06-01",
        ])
        .expect("cli should parse");
        match cli.command {
            Commands::Ticket {
                action: TicketCommands::Start(args),
            } => {
                assert_eq!(args.id, 4);
                assert_eq!(args.estimate, "2d");
                assert_eq!(args.finish_date.to_string(), "2024-06-01");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn ticket_forward_requires_team() {
        assert!(Cli::try_parse_from(["desk", "ticket", "forward", "4"]).is_err());
        assert!(Cli::try_parse_from(["desk", "ticket", "forward", "4", "--team", "2"]).is_ok());
    }

    #[test]
    fn team_create_collects_members() {
        let cli = Cli::try_parse_from([
            "desk", "team", "create", "--name", "Ops", "--member", "3", "--member", "4",
        ])
        .expect("cli should parse");
        match cli.command {
            Commands::Team {
                action: TeamCommands::Create(args),
            } => {
                assert_eq!(args.name, "Ops");
                assert_eq!(args.members, vec![3, 4]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn user_update_parses_active_flag() {
        let cli = Cli::try_parse_from([
            "desk", "user", "update", "9", "--role", "admin", "--active", "false",
        ])
        .expect("cli should parse");
        match cli.command {
            Commands::User {
                action: UserCommands::Update(args),
            } => {
                assert_eq!(args.active, Some(false));
                assert_eq!(args.role.as_deref(), Some("admin"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn auth_and_notification_commands_parse() {
        assert!(matches!(
            Cli::try_parse_from(["desk", "auth", "login", "--provider", "github"])
                .expect("cli should parse")
                .command,
            Commands::Auth {
                action: AuthCommands::Login(_)
            }
        ));
        assert!(matches!(
            Cli::try_parse_from(["desk", "notification", "watch"])
                .expect("cli should parse")
                .command,
            Commands::Notification {
                action: NotificationCommands::Watch(_)
            }
        ));
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["desk", "--project", "/tmp/desk", "dashboard"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.project.as_deref(), Some("/tmp/desk"));
    }
}
