use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, output_one, table};

pub async fn run(id: i64, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let ticket = super::fetch(ctx, id).await?;
    if flags.format != OutputFormat::Table {
        return output(&ticket, flags.format);
    }

    output_one(&ticket, flags.format)?;
    if !ticket.description.is_empty() {
        println!("\n{}", ticket.description);
    }

    let rows = ticket
        .actions_newest_first()
        .into_iter()
        .map(|action| {
            vec![
                action.timestamp.format("%Y-%m-%d %H:%M").to_string(),
                action.actor.name.clone(),
                action.description.clone(),
            ]
        })
        .collect::<Vec<_>>();
    if !rows.is_empty() {
        let options = table::TableOptions {
            max_width: crate::ui::prefs().term_width,
            color: false,
        };
        println!("\n{}", table::render_table(&["when", "by", "action"], &rows, options));
    }
    Ok(())
}
