use desk_api::workflow::{self, TicketForm};
use desk_core::enums::TicketStatus;
use desk_core::policy;
use desk_core::updates::TicketUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ticket::TicketUpdateArgs;
use crate::commands::shared::parse::parse_enum;
use crate::commands::shared::report;
use crate::context::AppContext;

pub async fn run(
    args: &TicketUpdateArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let form = build_form(args)?;
    let user = ctx.require_user().await?;
    let ticket = super::fetch(ctx, args.id).await?;

    let touches_estimate = args.estimate.is_some() || args.finish_date.is_some();
    if touches_estimate && !policy::show_estimation_fields(Some(&user), &ticket) {
        anyhow::bail!(
            "estimation of ticket {} can only be edited by its assignee",
            ticket.ticket_number
        );
    }

    let result = workflow::save_ticket_form(&ctx.client, &user, &ticket, &form).await;
    let report = ctx.observe(result)?;
    ctx.observe_report(&report);
    report::finish(&report, flags)
}

fn build_form(args: &TicketUpdateArgs) -> anyhow::Result<TicketForm> {
    let mut details = TicketUpdateBuilder::new();
    if let Some(title) = args.title.as_deref() {
        anyhow::ensure!(!title.trim().is_empty(), "--title must not be empty");
        details = details.title(title.trim());
    }
    if let Some(description) = args.description.as_deref() {
        anyhow::ensure!(!description.trim().is_empty(), "--description must not be empty");
        details = details.description(description.trim());
    }
    if let Some(estimate) = args.estimate.as_deref() {
        details = details.estimated_time(estimate.trim());
    }
    if let Some(date) = args.finish_date {
        details = details.estimated_finish_date(date);
    }
    let status = args
        .status
        .as_deref()
        .map(|raw| parse_enum::<TicketStatus>(raw, "status"))
        .transpose()?;

    let form = TicketForm {
        details: details.build(),
        assignee: args.assignee,
        team: args.team,
        status,
    };
    if form.details.is_empty()
        && form.assignee.is_none()
        && form.team.is_none()
        && form.status.is_none()
    {
        anyhow::bail!(
            "At least one of --title, --description, --status, --assignee, --team, --estimate, or --finish-date must be provided"
        );
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn args(id: i64) -> TicketUpdateArgs {
        TicketUpdateArgs {
            id,
            title: None,
            description: None,
            status: None,
            assignee: None,
            team: None,
            estimate: None,
            finish_date: None,
        }
    }

    #[test]
    fn rejects_noop_update() {
        assert!(build_form(&args(1)).is_err());
    }

    #[test]
    fn builds_form_from_flags() {
        let form = build_form(&TicketUpdateArgs {
            title: Some("  Renamed ".into()),
            status: Some("resolved".into()),
            team: Some(3),
            ..args(1)
        })
        .unwrap();
        assert_eq!(form.details.title.as_deref(), Some("Renamed"));
        assert_eq!(form.status, Some(TicketStatus::Resolved));
        assert_eq!(form.team, Some(3));
        assert_eq!(form.assignee, None);
    }

    #[test]
    fn rejects_blank_title() {
        let result = build_form(&TicketUpdateArgs {
            title: Some("   ".into()),
            ..args(1)
        });
        assert!(result.is_err());
    }
}
