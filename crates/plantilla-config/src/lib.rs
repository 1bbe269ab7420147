//! # plantilla-config
//!
//! Layered configuration loading for Plantilla using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PLANTILLA_*` prefix, `__` as separator)
//! 2. Project-level `.plantilla/config.toml`
//! 3. User-level `~/.config/plantilla/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PLANTILLA_GATEWAY__BASE_URL` -> `gateway.base_url`,
//! `PLANTILLA_GENERAL__OUTPUT` -> `general.output`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use plantilla_config::PlantillaConfig;
//!
//! let config = PlantillaConfig::load_with_dotenv().expect("config");
//! println!("gateway: {}", config.gateway.base());
//! ```

mod error;
mod gateway;
mod general;

pub use error::ConfigError;
pub use gateway::GatewayConfig;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlantillaConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl PlantillaConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.gateway.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".plantilla/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("PLANTILLA_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("plantilla").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = PlantillaConfig::default();
        assert_eq!(config.gateway.base_url, "http://localhost:8001");
        assert_eq!(config.general.output, "raw");
    }

    #[test]
    fn figment_extracts_defaults() {
        figment::Jail::expect_with(|_jail| {
            let config: PlantillaConfig = PlantillaConfig::figment().extract()?;
            assert_eq!(config.gateway.timeout_secs, 0);
            Ok(())
        });
    }
}
