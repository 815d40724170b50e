//! Configuration schemas.
//!
//! [`HubConfig`] is deserialized through the `config` crate from an
//! optional TOML file overlaid with `EVENTHUB__*` environment variables.
//! Every field has a default, so an empty source yields a usable config.

pub mod dispatch;
pub mod logging;

use std::path::Path;

use serde::{Deserialize, Serialize};

use self::dispatch::DispatchConfig;
use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HubConfig {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Dispatcher and registry settings.
    #[serde(default)]
    pub dispatch: DispatchConfig,
}

impl HubConfig {
    /// Load configuration from a TOML file and the environment.
    ///
    /// The file is optional. Environment variables use the `EVENTHUB`
    /// prefix with `__` as the section separator, e.g.
    /// `EVENTHUB__DISPATCH__DEFAULT_PRIORITY=5`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(false))
            .add_source(
                config::Environment::with_prefix("EVENTHUB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
