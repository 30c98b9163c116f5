//! # desk-config
//!
//! Layered configuration loading for Deskline using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DESK_*` prefix, `__` as separator)
//! 2. Project-level `.deskline/config.toml`
//! 3. User-level `~/.config/deskline/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `DESK_API__BASE_URL` -> `api.base_url`,
//! `DESK_NOTIFICATIONS__POLL_INTERVAL_SECS` -> `notifications.poll_interval_secs`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use desk_config::DeskConfig;
//!
//! let config = DeskConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.api.base_url());
//! ```

mod api;
mod error;
mod general;
mod notifications;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use notifications::NotificationsConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".deskline/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DeskConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl DeskConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env`
    /// support.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.api.validate()?;
        Ok(config)
    }

    /// Like [`Self::load`], reading the project file under `project_root`.
    pub fn load_from(project_root: &Path) -> Result<Self, ConfigError> {
        let project = project_root.join(PROJECT_CONFIG_PATH);
        let config: Self =
            Self::figment_with(Self::global_config_path().as_deref(), &project).extract()?;
        config.api.validate()?;
        Ok(config)
    }

    /// Load `.env` from the current directory, then [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests and the CLI can add providers on top.
    pub fn figment() -> Figment {
        Self::figment_with(Self::global_config_path().as_deref(), Path::new(PROJECT_CONFIG_PATH))
    }

    /// Provider chain with explicit file locations.
    pub fn figment_with(global: Option<&Path>, project: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = global.filter(|path| path.exists()) {
            figment = figment.merge(Toml::file(global_path));
        }

        if project.exists() {
            figment = figment.merge(Toml::file(project));
        }

        figment.merge(Env::prefixed("DESK_").split("__"))
    }

    /// Path to the user-global config file.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("deskline").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = DeskConfig::default();
        assert!(config.api.validate().is_ok());
        assert_eq!(config.notifications.poll_interval_secs, 30);
        assert_eq!(config.general.default_page_size, 20);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: DeskConfig = DeskConfig::figment_with(None, Path::new("missing.toml"))
                .extract()?;
            assert_eq!(config.api.base_url, "http://localhost:8080/api");
            assert_eq!(config.general.dashboard_fetch_size, 1000);
            Ok(())
        });
    }
}
