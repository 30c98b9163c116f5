mod board;
mod create;
mod get;
mod lifecycle;
mod list;
mod permissions;
mod update;

use desk_core::entities::{EntityId, Ticket};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TicketCommands;
use crate::context::AppContext;

/// Handle `desk ticket <subcommand>`.
pub async fn handle(
    action: &TicketCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TicketCommands::List(args) => list::run(args, ctx, flags).await,
        TicketCommands::Board(args) => board::run(args, ctx, flags).await,
        TicketCommands::Get { id } => get::run(*id, ctx, flags).await,
        TicketCommands::Create(args) => create::run(args, ctx, flags).await,
        TicketCommands::Update(args) => update::run(args, ctx, flags).await,
        TicketCommands::Start(args) => lifecycle::start(args, ctx, flags).await,
        TicketCommands::Pause { id, reason } => lifecycle::pause(*id, reason, ctx, flags).await,
        TicketCommands::AssignMe { id } => lifecycle::assign_to_me(*id, ctx, flags).await,
        TicketCommands::Unassign { id } => lifecycle::unassign(*id, ctx, flags).await,
        TicketCommands::Forward { id, team } => lifecycle::forward(*id, *team, ctx, flags).await,
        TicketCommands::Approve { id } => lifecycle::approve(*id, ctx, flags).await,
        TicketCommands::Action { id, description } => {
            lifecycle::add_action(*id, description, ctx, flags).await
        }
        TicketCommands::Permissions { id } => permissions::run(*id, ctx, flags).await,
    }
}

/// Fetch the current state of a ticket so policy checks see fresh data.
async fn fetch(ctx: &mut AppContext, id: EntityId) -> anyhow::Result<Ticket> {
    let result = ctx.client.get_ticket(id).await;
    ctx.observe(result)
}
