use anyhow::bail;
use desk_core::board::StatusBoard;
use desk_core::dashboard::Dashboard;
use desk_core::entities::{Notification, Page, Parameter, Team, Ticket, User};
use desk_core::policy::PermissionSet;
use desk_core::updates::{
    ActionRequest, PauseRequest, TeamUpdate, TicketDraft, TicketUpdate, UserUpdateRequest,
};
use desk_core::workflow::WorkflowReport;
use schemars::schema_for;
use serde_json::Value;

use crate::cli::root_commands::SchemaArgs;
use crate::cli::{GlobalFlags, OutputFormat};

/// Names accepted by `desk schema`.
pub const SCHEMA_NAMES: &[&str] = &[
    "ticket",
    "ticket_page",
    "user",
    "team",
    "notification",
    "parameter",
    "ticket_draft",
    "ticket_update",
    "pause_request",
    "action_request",
    "team_update",
    "user_update_request",
    "permission_set",
    "workflow_report",
    "dashboard",
    "status_board",
];

/// Handle `desk schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_value(&args.type_name)?;
    let rendered = if flags.format == OutputFormat::Raw {
        serde_json::to_string(&schema)?
    } else {
        serde_json::to_string_pretty(&schema)?
    };
    println!("{rendered}");
    Ok(())
}

fn schema_value(type_name: &str) -> anyhow::Result<Value> {
    let normalized = type_name.trim().to_ascii_lowercase().replace('-', "_");
    let schema = match normalized.as_str() {
        "ticket" => schema_for!(Ticket),
        "ticket_page" => schema_for!(Page<Ticket>),
        "user" => schema_for!(User),
        "team" => schema_for!(Team),
        "notification" => schema_for!(Notification),
        "parameter" => schema_for!(Parameter),
        "ticket_draft" => schema_for!(TicketDraft),
        "ticket_update" => schema_for!(TicketUpdate),
        "pause_request" => schema_for!(PauseRequest),
        "action_request" => schema_for!(ActionRequest),
        "team_update" => schema_for!(TeamUpdate),
        "user_update_request" => schema_for!(UserUpdateRequest),
        "permission_set" => schema_for!(PermissionSet),
        "workflow_report" => schema_for!(WorkflowReport),
        "dashboard" => schema_for!(Dashboard),
        "status_board" => schema_for!(StatusBoard),
        _ => bail!(
            "unknown schema type '{type_name}'; expected one of: {}",
            SCHEMA_NAMES.join(", ")
        ),
    };
    Ok(serde_json::to_value(schema)?)
}
