use std::time::Duration;

use desk_api::poller::{NotificationPoller, PollStop};
use desk_core::entities::{EntityId, Notification};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::NotificationCommands;
use crate::cli::subcommands::notification::WatchArgs;
use crate::context::AppContext;
use crate::output::{output_list, render_list};

/// Handle `desk notification <subcommand>`.
pub async fn handle(
    action: &NotificationCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        NotificationCommands::List => {
            let result = ctx.client.unread_notifications().await;
            let unread = ctx.observe(result)?;
            output_list(&unread, flags.format)
        }
        NotificationCommands::Read { id } => {
            let result = ctx.client.mark_notification_read(*id).await;
            ctx.observe(result)?;
            if !flags.quiet {
                eprintln!("notification {id} marked as read");
            }
            Ok(())
        }
        NotificationCommands::Watch(args) => watch(args, ctx, flags).await,
    }
}

async fn watch(args: &WatchArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_user().await?;
    let interval = args.interval.map_or_else(
        || ctx.config.notifications.poll_interval(),
        |secs| Duration::from_secs(secs.max(1)),
    );
    let poller = NotificationPoller::new(interval);
    if !flags.quiet {
        eprintln!("watching notifications every {}s; Ctrl-C to stop", interval.as_secs());
    }

    let mut last_seen: Option<Vec<EntityId>> = None;
    let on_update = |unread: &[Notification]| {
        let ids: Vec<EntityId> = unread.iter().map(|n| n.id).collect();
        if last_seen.as_ref() == Some(&ids) {
            return;
        }
        last_seen = Some(ids);
        match render_list(unread, flags.format) {
            Ok(rendered) => {
                println!("{} unread at {}", unread.len(), chrono::Local::now().format("%H:%M:%S"));
                println!("{rendered}");
            }
            Err(error) => tracing::warn!(%error, "failed to render notifications"),
        }
    };

    let stop = tokio::select! {
        stop = poller.run(&ctx.client, on_update) => stop,
        signal = tokio::signal::ctrl_c() => {
            signal?;
            PollStop::Cancelled
        }
    };

    match stop {
        PollStop::Cancelled => Ok(()),
        PollStop::SessionEnded => {
            ctx.gate.logout();
            anyhow::bail!("session ended; run `desk auth login` to sign in again")
        }
    }
}
