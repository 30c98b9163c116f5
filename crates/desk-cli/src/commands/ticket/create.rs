use desk_api::workflow;
use desk_core::updates::TicketDraft;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ticket::TicketCreateArgs;
use crate::commands::shared::parse::parse_priority;
use crate::context::AppContext;
use crate::output::output_one;

pub async fn run(
    args: &TicketCreateArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let draft = TicketDraft::new(&args.title, &args.description, parse_priority(&args.priority)?)?
        .with_team(args.team)
        .with_assignee(args.assignee);
    let user = ctx.require_user().await?;

    let result = workflow::create_ticket(&ctx.client, &user, &draft).await;
    let ticket = ctx.observe(result)?;
    output_one(&ticket, flags.format)
}
