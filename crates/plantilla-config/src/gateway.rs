//! API gateway connection settings.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_base_url() -> String {
    "http://localhost:8001".to_string()
}

fn default_user_agent() -> String {
    "plantilla/0.1".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GatewayConfig {
    /// Gateway address every route is appended to (e.g., `http://localhost:8001`).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds. `0` disables the timeout.
    #[serde(default)]
    pub timeout_secs: u64,

    /// `User-Agent` header sent with each request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: 0,
            user_agent: default_user_agent(),
        }
    }
}

impl GatewayConfig {
    /// Base URL without a trailing slash, ready for route concatenation.
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Check that the base URL is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `base_url` is empty or does
    /// not use the `http` or `https` scheme.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.base_url.trim();
        if base.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "gateway.base_url".into(),
                reason: "must not be empty".into(),
            });
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "gateway.base_url".into(),
                reason: format!("'{base}' is not an http(s) URL"),
            });
        }
        Ok(())
    }
}
