//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default page size for ticket listings.
const fn default_page_size() -> u32 {
    20
}

/// Page size used to load a whole reporting period for the dashboard.
const fn default_dashboard_fetch_size() -> u32 {
    1000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default page size for list commands.
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,

    #[serde(default = "default_dashboard_fetch_size")]
    pub dashboard_fetch_size: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            dashboard_fetch_size: default_dashboard_fetch_size(),
        }
    }
}
