//! EventHub — in-process publish/subscribe dispatch.
//!
//! Wires configuration, logging, the typed dispatcher and the named
//! registry together. Instances are owned by the caller and passed to
//! consumers explicitly; nothing here is process-global except the
//! tracing subscriber.

use std::path::Path;
use std::sync::Arc;

pub use eventhub_core;
pub use eventhub_dispatch;
pub use eventhub_dispatch::prelude;
pub use eventhub_dispatch::{parameters, payload};

use eventhub_core::config::HubConfig;
use eventhub_core::result::AppResult;
use eventhub_dispatch::named::{Invoker, ParameterResolver};
use eventhub_dispatch::{EventDispatcher, EventManager};

/// A typed dispatcher and a named registry built from one configuration.
#[derive(Debug)]
pub struct Hub {
    /// Typed event dispatcher.
    pub dispatcher: EventDispatcher,
    /// Named event registry.
    pub events: EventManager,
}

impl Hub {
    /// Loads configuration from `path` and the environment, installs
    /// logging, and builds both subsystems.
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let config = HubConfig::load(path)?;
        eventhub_core::logging::init(&config.logging)?;
        tracing::info!("Starting EventHub v{}", env!("CARGO_PKG_VERSION"));
        Ok(Self::from_config(&config))
    }

    /// Builds both subsystems with the default parameter resolver.
    pub fn from_config(config: &HubConfig) -> Self {
        Self::with_invoker(config, Arc::new(ParameterResolver::new()))
    }

    /// Builds both subsystems, calling named hooks through `invoker`.
    pub fn with_invoker(config: &HubConfig, invoker: Arc<dyn Invoker>) -> Self {
        Self {
            dispatcher: EventDispatcher::from_config(&config.dispatch),
            events: EventManager::from_config(invoker, &config.dispatch),
        }
    }
}
