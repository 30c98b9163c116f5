use desk_core::enums::TicketPriority;
use serde::de::DeserializeOwned;

/// Parse a wire enum (`IN_PROGRESS`, `ADMIN`) from lenient user input such
/// as `in-progress` or `admin`.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().replace(['-', ' '], "_").to_ascii_uppercase();
    let json = serde_json::Value::String(normalized);
    serde_json::from_value(json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse a priority; the wire fallback `UNKNOWN` is not accepted as input.
pub fn parse_priority(raw: &str) -> anyhow::Result<TicketPriority> {
    match parse_enum(raw, "priority")? {
        TicketPriority::Unknown => {
            anyhow::bail!("invalid priority '{raw}': expected critical, high, medium or low")
        }
        priority => Ok(priority),
    }
}
