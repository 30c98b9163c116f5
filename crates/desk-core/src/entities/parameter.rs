use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::EntityId;

/// A server-held named configuration value.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Parameter {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

impl Parameter {
    /// Split a comma-separated value into trimmed, non-empty items.
    #[must_use]
    pub fn list_values(&self) -> Vec<String> {
        self.value
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(ToString::to_string)
            .collect()
    }
}
