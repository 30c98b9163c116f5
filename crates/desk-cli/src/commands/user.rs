use desk_api::workflow;
use desk_core::enums::Role;
use desk_core::updates::{UserPatch, UserUpdateRequest};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::cli::subcommands::user::UserUpdateArgs;
use crate::commands::shared::limit::apply_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::{output_list, output_one};

/// Handle `desk user <subcommand>`.
pub async fn handle(
    action: &UserCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        UserCommands::List { include_inactive } => {
            let result = ctx.client.list_users(*include_inactive).await;
            let mut users = ctx.observe(result)?;
            apply_limit(&mut users, flags.limit);
            output_list(&users, flags.format)
        }
        UserCommands::Update(args) => update(args, ctx, flags).await,
    }
}

async fn update(args: &UserUpdateArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let actor = ctx.require_user().await?;
    desk_core::policy::ensure_admin(Some(&actor), "update_user")?;

    // The backend always applies `active`, so an omitted flag keeps the
    // current value rather than defaulting.
    let active = match args.active {
        Some(active) => active,
        None => {
            let result = ctx.client.list_users(true).await;
            ctx.observe(result)?
                .into_iter()
                .find(|user| user.id == args.id)
                .map(|user| user.active)
                .ok_or_else(|| anyhow::anyhow!("user {} not found", args.id))?
        }
    };
    let request = build_request(args, active)?;

    let result = workflow::update_user(&ctx.client, &actor, args.id, &request).await;
    let user = ctx.observe(result)?;
    output_one(&user, flags.format)
}

fn build_request(args: &UserUpdateArgs, active: bool) -> anyhow::Result<UserUpdateRequest> {
    let role = args
        .role
        .as_deref()
        .map(|raw| parse_enum::<Role>(raw, "role"))
        .transpose()?;
    let team_ids = if args.clear_teams {
        Some(Vec::new())
    } else if args.teams.is_empty() {
        None
    } else {
        Some(args.teams.clone())
    };
    Ok(UserUpdateRequest {
        user: UserPatch {
            name: args.name.clone(),
            role,
            active,
        },
        team_ids,
    })
}
