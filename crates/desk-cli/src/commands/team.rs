use desk_api::workflow;
use desk_core::policy;
use desk_core::updates::TeamUpdateBuilder;
use desk_core::workflow::WorkflowReport;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TeamCommands;
use crate::cli::subcommands::team::{TeamCreateArgs, TeamUpdateArgs};
use crate::commands::shared::limit::apply_limit;
use crate::commands::shared::report;
use crate::context::AppContext;
use crate::output::{output_list, output_one};

/// Handle `desk team <subcommand>`.
pub async fn handle(
    action: &TeamCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TeamCommands::List { include_inactive } => {
            let result = ctx.client.list_teams(*include_inactive).await;
            let mut teams = ctx.observe(result)?;
            apply_limit(&mut teams, flags.limit);
            output_list(&teams, flags.format)
        }
        TeamCommands::Create(args) => create(args, ctx, flags).await,
        TeamCommands::Update(args) => update(args, ctx, flags).await,
        TeamCommands::AddMember { id, user } => {
            let actor = ctx.require_user().await?;
            policy::ensure_admin(Some(&actor), "add_team_member")?;
            let report = workflow::add_team_members(&ctx.client, *id, &[*user]).await;
            ctx.observe_report(&report);
            report::finish(&report, flags)
        }
    }
}

async fn create(args: &TeamCreateArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut builder = TeamUpdateBuilder::new().name(&args.name);
    if let Some(description) = &args.description {
        builder = builder.description(description);
    }
    if let Some(leader) = args.leader {
        builder = builder.leader(leader);
    }
    let team = builder.build_new()?;

    let actor = ctx.require_user().await?;
    let result = workflow::save_team(&ctx.client, &actor, None, &team, &args.members).await;
    let outcome = ctx.observe(result)?;
    ctx.observe_report(&outcome.members);
    output_one(&outcome.team, flags.format)?;
    finish_members(&outcome.members, flags)
}

async fn update(args: &TeamUpdateArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut builder = TeamUpdateBuilder::new();
    if let Some(name) = &args.name {
        builder = builder.name(name);
    }
    if let Some(description) = &args.description {
        builder = builder.description(description);
    }
    if let Some(leader) = args.leader {
        builder = builder.leader(leader);
    }
    if let Some(active) = args.active {
        builder = builder.active(active);
    }
    let team = builder.build();

    let actor = ctx.require_user().await?;
    let result = workflow::save_team(&ctx.client, &actor, Some(args.id), &team, &args.members).await;
    let outcome = ctx.observe(result)?;
    ctx.observe_report(&outcome.members);
    output_one(&outcome.team, flags.format)?;
    finish_members(&outcome.members, flags)
}

fn finish_members(members: &WorkflowReport, flags: &GlobalFlags) -> anyhow::Result<()> {
    if members.steps.is_empty() {
        return Ok(());
    }
    println!();
    report::finish(members, flags)
}
