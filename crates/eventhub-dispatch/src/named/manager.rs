//! Named event registry.
//!
//! Names are trimmed and lower-cased before every lookup, so `"Demo"`,
//! `" demo "` and `"DEMO"` address the same event. A name that is empty
//! after sanitizing is rejected by every operation.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};

use eventhub_core::config::dispatch::DispatchConfig;
use eventhub_core::error::AppError;
use eventhub_core::result::AppResult;

use super::arguments::{Arguments, CallError, Parameters};
use super::event::NamedEvent;
use super::invoker::{Invoker, ParameterResolver};

/// Registry of named events.
#[derive(Debug)]
pub struct EventManager {
    /// Sanitized name → event.
    events: HashMap<String, NamedEvent>,
    /// Call mechanism handed to every registered event.
    invoker: Arc<dyn Invoker>,
    /// Settings handed to every registered event.
    config: DispatchConfig,
}

impl EventManager {
    /// Creates a registry whose events call hooks through `invoker`.
    pub fn new(invoker: Arc<dyn Invoker>) -> Self {
        Self::from_config(invoker, &DispatchConfig::default())
    }

    /// Creates a registry from configuration.
    pub fn from_config(invoker: Arc<dyn Invoker>, config: &DispatchConfig) -> Self {
        Self {
            events: HashMap::new(),
            invoker,
            config: config.clone(),
        }
    }

    /// Registers a new event.
    pub fn register(&mut self, name: &str) -> AppResult<&mut NamedEvent> {
        let key = sanitize(name)?;
        if self.events.contains_key(&key) {
            return Err(AppError::duplicate_event_name(name));
        }

        info!(event = %name, "Event registered");
        let event = NamedEvent::new(name, self.invoker.clone(), &self.config);
        Ok(self.events.entry(key).or_insert(event))
    }

    /// Returns the event registered under `name`.
    pub fn get(&self, name: &str) -> AppResult<&NamedEvent> {
        let key = sanitize(name)?;
        self.events
            .get(&key)
            .ok_or_else(|| AppError::event_not_defined(name))
    }

    /// Returns the event registered under `name` for mutation.
    pub fn get_mut(&mut self, name: &str) -> AppResult<&mut NamedEvent> {
        let key = sanitize(name)?;
        self.events
            .get_mut(&key)
            .ok_or_else(|| AppError::event_not_defined(name))
    }

    /// Returns whether an event is registered under `name`.
    ///
    /// Fails only when `name` is empty.
    pub fn has(&self, name: &str) -> AppResult<bool> {
        let key = sanitize(name)?;
        Ok(self.events.contains_key(&key))
    }

    /// Removes all hooks from an event, keeping it registered.
    pub fn clear(&mut self, name: &str) -> AppResult<()> {
        self.get_mut(name)?.clear();
        Ok(())
    }

    /// Removes an event and its hooks.
    pub fn deregister(&mut self, name: &str) -> AppResult<()> {
        let key = sanitize(name)?;
        let mut event = self
            .events
            .remove(&key)
            .ok_or_else(|| AppError::event_not_defined(name))?;
        event.clear();

        info!(event = %name, "Event deregistered");
        Ok(())
    }

    /// Attaches `callback` to an event at the default priority.
    pub fn hook<F>(&mut self, name: &str, callback: F) -> AppResult<()>
    where
        F: Fn(&Arguments<'_>) -> Result<(), CallError> + Send + Sync + 'static,
    {
        self.get_mut(name)?.hook(callback);
        Ok(())
    }

    /// Attaches `callback` to an event at `priority`.
    pub fn hook_with_priority<F>(&mut self, name: &str, callback: F, priority: i32) -> AppResult<()>
    where
        F: Fn(&Arguments<'_>) -> Result<(), CallError> + Send + Sync + 'static,
    {
        self.get_mut(name)?.hook_with_priority(callback, priority);
        Ok(())
    }

    /// Triggers an event with `parameters`.
    pub fn trigger(&mut self, name: &str, parameters: &Parameters) -> AppResult<()> {
        self.get_mut(name)?.trigger(parameters)
    }

    /// Names of all registered events, as given at registration.
    pub fn event_names(&self) -> Vec<&str> {
        self.events.values().map(|event| event.name()).collect()
    }

    /// Number of registered events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns whether no event is registered.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for EventManager {
    fn default() -> Self {
        Self::new(Arc::new(ParameterResolver::new()))
    }
}

/// Characters stripped from both ends of an event name.
const TRIMMED: [char; 6] = [' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Trims ASCII whitespace and NUL, then folds ASCII case.
///
/// Non-ASCII characters are kept as-is, so `"Ä"` and `"ä"` stay distinct.
fn sanitize(name: &str) -> AppResult<String> {
    let key = name.trim_matches(TRIMMED).to_ascii_lowercase();
    if key.is_empty() {
        debug!("Rejected empty event name");
        return Err(AppError::empty_event_name());
    }
    Ok(key)
}
