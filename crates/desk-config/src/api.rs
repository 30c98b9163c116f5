//! Backend connection settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_base_url() -> String {
    "http://localhost:8080/api".into()
}

fn default_server_url() -> String {
    "http://localhost:8080".into()
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("deskline/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// REST base path, e.g. `http://localhost:8080/api`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Server root hosting the OAuth2 redirect endpoints.
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Value of the `Cookie` header sent with every request
    /// (e.g. `JSESSIONID=...`). Empty means no ambient credentials.
    #[serde(default)]
    pub session_cookie: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            server_url: default_server_url(),
            session_cookie: String::new(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    pub fn has_session_cookie(&self) -> bool {
        !self.session_cookie.trim().is_empty()
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Server URL without a trailing slash.
    pub fn server_url(&self) -> &str {
        self.server_url.trim_end_matches('/')
    }

    /// Reject URLs that are not http(s) and a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("api.base_url", &self.base_url), ("api.server_url", &self.server_url)] {
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                return Err(ConfigError::InvalidValue {
                    field: field.into(),
                    reason: format!("expected an http(s) URL, got '{value}'"),
                });
            }
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url(), "http://localhost:8080/api");
        assert_eq!(config.server_url(), "http://localhost:8080");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.user_agent.starts_with("deskline/"));
        assert!(!config.has_session_cookie());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = ApiConfig {
            base_url: "https://desk.example.com/api/".into(),
            server_url: "https://desk.example.com/".into(),
            ..Default::default()
        };
        assert_eq!(config.base_url(), "https://desk.example.com/api");
        assert_eq!(config.server_url(), "https://desk.example.com");
    }

    #[test]
    fn validate_rejects_bad_values() {
        let config = ApiConfig {
            base_url: "localhost:8080".into(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "api.base_url"
        ));

        let config = ApiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
