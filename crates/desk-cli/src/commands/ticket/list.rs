use desk_api::{TicketFilters, TicketQuery};
use desk_core::enums::TicketStatus;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::subcommands::ticket::TicketListArgs;
use crate::commands::shared::limit::{apply_limit, effective_limit};
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::{output, output_list};

pub async fn run(
    args: &TicketListArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let query = build_query(args, ctx.config.general.default_page_size)?;
    let result = ctx.client.list_tickets(&query).await;
    let mut page = ctx.observe(result)?;

    if flags.format != OutputFormat::Table {
        return output(&page, flags.format);
    }

    apply_limit(&mut page.content, flags.limit);
    output_list(&page.content, flags.format)?;
    if !flags.quiet {
        eprintln!(
            "page {} of {} ({} tickets)",
            page.number + 1,
            page.total_pages.max(1),
            page.total_elements
        );
    }
    Ok(())
}

fn build_query(args: &TicketListArgs, default_size: u32) -> anyhow::Result<TicketQuery> {
    let status = args
        .status
        .as_deref()
        .map(|raw| parse_enum::<TicketStatus>(raw, "status"))
        .transpose()?;
    Ok(TicketQuery::new(args.page, effective_limit(args.size, None, default_size))
        .sort("createdAt,desc")
        .filters(TicketFilters {
            assigned_to_me: args.mine,
            assigned_team: args.team,
            status,
            ..TicketFilters::default()
        }))
}
