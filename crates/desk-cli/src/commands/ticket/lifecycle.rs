//! Single-ticket transitions. Each fetches the ticket first so the policy
//! check sees the current status and assignment.

use desk_api::workflow;
use desk_api::{TicketFilters, TicketQuery};
use desk_core::entities::{EntityId, Ticket, User};
use desk_core::updates::Estimation;

use crate::cli::subcommands::ticket::TicketStartArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::report;
use crate::context::AppContext;
use crate::output::{output, output_list, output_one};

pub async fn start(
    args: &TicketStartArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let estimation = Estimation::new(&args.estimate, args.finish_date)?;
    let user = ctx.require_user().await?;
    let ticket = super::fetch(ctx, args.id).await?;
    let refresh = TicketQuery::new(0, ctx.config.general.default_page_size)
        .sort("createdAt,desc")
        .filters(TicketFilters {
            assigned_to_me: true,
            ..TicketFilters::default()
        });

    let result = workflow::start_ticket(&ctx.client, &user, &ticket, &estimation, &refresh).await;
    let outcome = ctx.observe(result)?;
    ctx.observe_report(&outcome.report);

    if flags.format == OutputFormat::Table {
        output_list(&outcome.report.steps, flags.format)?;
        if let Some(page) = &outcome.refreshed {
            println!();
            output_list(&page.content, flags.format)?;
        }
    } else {
        output(&outcome, flags.format)?;
    }
    report::check(&outcome.report)
}

pub async fn pause(
    id: EntityId,
    reason: &str,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let (user, ticket) = load(ctx, id).await?;
    let result = workflow::pause_ticket(&ctx.client, &user, &ticket, reason).await;
    show(ctx.observe(result)?, flags)
}

pub async fn assign_to_me(
    id: EntityId,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let (user, ticket) = load(ctx, id).await?;
    let result = workflow::assign_to_me(&ctx.client, &user, &ticket).await;
    show(ctx.observe(result)?, flags)
}

pub async fn unassign(id: EntityId, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (user, ticket) = load(ctx, id).await?;
    let result = workflow::unassign(&ctx.client, &user, &ticket).await;
    show(ctx.observe(result)?, flags)
}

pub async fn forward(
    id: EntityId,
    team: EntityId,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let (user, ticket) = load(ctx, id).await?;
    let result = workflow::forward(&ctx.client, &user, &ticket, team).await;
    show(ctx.observe(result)?, flags)
}

pub async fn approve(id: EntityId, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (user, ticket) = load(ctx, id).await?;
    let result = workflow::approve(&ctx.client, &user, &ticket).await;
    show(ctx.observe(result)?, flags)
}

pub async fn add_action(
    id: EntityId,
    description: &str,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let (user, ticket) = load(ctx, id).await?;
    let result = workflow::add_action(&ctx.client, &user, &ticket, description).await;
    show(ctx.observe(result)?, flags)
}

async fn load(
    ctx: &mut AppContext,
    id: EntityId,
) -> anyhow::Result<(User, Ticket)> {
    let user = ctx.require_user().await?;
    let ticket = super::fetch(ctx, id).await?;
    Ok((user, ticket))
}

fn show(ticket: Ticket, flags: &GlobalFlags) -> anyhow::Result<()> {
    output_one(&ticket, flags.format)
}
