use desk_core::enums::TicketStatus;
use desk_core::policy::{self, TicketOperation};
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, table};

#[derive(Serialize)]
struct PermissionsResponse {
    ticket: String,
    status: TicketStatus,
    allowed: Vec<TicketOperation>,
    status_targets: Vec<TicketStatus>,
    show_estimation_fields: bool,
}

pub async fn run(id: i64, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = ctx.require_user().await?;
    let ticket = super::fetch(ctx, id).await?;
    let allowed = policy::permissions(Some(&user), &ticket);

    let response = PermissionsResponse {
        ticket: ticket.ticket_number.clone(),
        status: ticket.status,
        allowed: allowed.iter().collect(),
        status_targets: TicketStatus::ALL
            .into_iter()
            .filter(|target| *target != ticket.status)
            .filter(|target| policy::can_change_status(Some(&user), &ticket, *target))
            .collect(),
        show_estimation_fields: policy::show_estimation_fields(Some(&user), &ticket),
    };

    if flags.format != OutputFormat::Table {
        return output(&response, flags.format);
    }

    let rows = TicketOperation::ALL
        .into_iter()
        .map(|operation| {
            vec![
                operation.as_str().to_string(),
                allowed.allows(operation).to_string(),
            ]
        })
        .collect::<Vec<_>>();
    let options = table::TableOptions {
        max_width: crate::ui::prefs().term_width,
        color: crate::ui::prefs().table_color,
    };
    println!("{}", table::render_table(&["operation", "allowed"], &rows, options));
    Ok(())
}
