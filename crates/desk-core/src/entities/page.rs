use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Pagination envelope returned by list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    pub size: u32,
    pub number: u32,
}

impl<T> Page<T> {
    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.number + 1 >= self.total_pages
    }
}
