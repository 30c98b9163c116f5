use desk_api::dashboard::load_board;
use desk_api::{TicketFilters, TicketQuery};

use crate::cli::subcommands::ticket::TicketBoardArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, render_list};

pub async fn run(
    args: &TicketBoardArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let query = TicketQuery::new(0, ctx.config.general.dashboard_fetch_size).filters(TicketFilters {
        assigned_to_me: args.mine,
        assigned_team: args.team,
        ..TicketFilters::default()
    });
    let result = load_board(&ctx.client, &query).await;
    let board = ctx.observe(result)?;

    if flags.format != OutputFormat::Table {
        return output(&board, flags.format);
    }

    for group in board.groups.iter().filter(|group| group.total > 0) {
        println!("{} ({})", group.label, group.total);
        println!("{}", render_list(&group.tickets, flags.format)?);
        if group.is_truncated() {
            println!("... {} more", group.total - group.tickets.len());
        }
        println!();
    }
    if board.expanded.is_empty() {
        println!("(no tickets)");
    }
    Ok(())
}
