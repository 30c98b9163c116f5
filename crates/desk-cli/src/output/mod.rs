use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;
pub mod views;

pub use views::Tabular;

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Render any serializable response in the requested format.
///
/// Tables show the top-level fields as key/value rows; use
/// [`render_list`] for entity lists.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => {
            let rows = match serde_json::to_value(value)? {
                Value::Object(map) => map
                    .into_iter()
                    .map(|(key, value)| vec![key, value_to_cell(&value)])
                    .collect(),
                Value::Array(items) => items.iter().map(|item| vec![value_to_cell(item)]).collect(),
                scalar => vec![vec![value_to_cell(&scalar)]],
            };
            Ok(table::render_table(&["field", "value"], &rows, table_options()))
        }
    }
}

/// Render a list of entities: full JSON objects, or one table row each.
pub fn render_list<T: Serialize + Tabular>(
    items: &[T],
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(items)?),
        OutputFormat::Raw => Ok(serde_json::to_string(items)?),
        OutputFormat::Table if items.is_empty() => Ok(String::from("(no rows)")),
        OutputFormat::Table => {
            let rows = items.iter().map(Tabular::row).collect::<Vec<_>>();
            Ok(table::render_table(T::HEADERS, &rows, table_options()))
        }
    }
}

/// Render one entity: the full object, or its table row laid out vertically.
pub fn render_one<T: Serialize + Tabular>(item: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => {
            let rows = T::HEADERS
                .iter()
                .zip(item.row())
                .map(|(header, cell)| vec![(*header).to_string(), cell])
                .collect::<Vec<_>>();
            Ok(table::render_table(&["field", "value"], &rows, table_options()))
        }
        _ => render(item, format),
    }
}

pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

pub fn output_list<T: Serialize + Tabular>(items: &[T], format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render_list(items, format)?);
    Ok(())
}

pub fn output_one<T: Serialize + Tabular>(item: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render_one(item, format)?);
    Ok(())
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
