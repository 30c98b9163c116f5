use crate::cli::root_commands::ParamCommands;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

/// Handle `desk param <subcommand>`.
pub async fn handle(
    action: &ParamCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ParamCommands::Get { name } => {
            let result = ctx.client.get_parameter(name).await;
            let parameter = ctx.observe(result)?;
            if flags.format == OutputFormat::Raw {
                println!("{}", parameter.value.unwrap_or_default());
                return Ok(());
            }
            output(&parameter, flags.format)
        }
    }
}
