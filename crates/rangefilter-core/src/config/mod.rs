//! Application configuration schemas.
//!
//! Configuration is deserialized from an optional TOML file via the
//! `config` crate, with `RANGEFILTER`-prefixed environment variables
//! layered on top. Each sub-module is one configuration section.

pub mod entity;
pub mod filter;
pub mod logging;

use serde::{Deserialize, Serialize};

use self::entity::EntityConfig;
use self::filter::FilterConfig;
use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Range filter settings.
    #[serde(default)]
    pub filter: FilterConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Entities that can be filtered.
    #[serde(default)]
    pub entities: Vec<EntityConfig>,
}

impl AppConfig {
    /// Load configuration from `path` (if any) and the environment.
    ///
    /// A missing file is only an error when a path was given explicitly.
    pub fn load(path: Option<&str>) -> Result<Self, AppError> {
        let mut builder = config::Config::builder();

        builder = match path {
            Some(path) => builder.add_source(config::File::with_name(path).required(true)),
            None => builder.add_source(config::File::with_name("config/default").required(false)),
        };

        let config = builder
            .add_source(
                config::Environment::with_prefix("RANGEFILTER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Find an entity definition by name.
    pub fn entity(&self, name: &str) -> Option<&EntityConfig> {
        self.entities.iter().find(|e| e.name == name)
    }
}
