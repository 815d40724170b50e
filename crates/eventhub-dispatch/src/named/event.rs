//! A named event and its prioritized hooks.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace, warn};

use eventhub_core::config::dispatch::DispatchConfig;
use eventhub_core::error::AppError;
use eventhub_core::result::AppResult;

use super::arguments::{Arguments, CallError, Parameters};
use super::hook::EventHook;
use super::invoker::Invoker;
use crate::callbacks::PriorityList;

/// Event entity owned by an [`EventManager`](super::manager::EventManager).
///
/// Triggering runs hooks by descending priority (ties in attach order)
/// and aborts on the first hook whose call fails.
pub struct NamedEvent {
    /// Name as given at registration.
    name: String,
    /// Attached hooks.
    hooks: PriorityList<EventHook>,
    /// Call mechanism used for every hook.
    invoker: Arc<dyn Invoker>,
    /// Priority used by [`NamedEvent::hook`].
    default_priority: i32,
    /// Trace every single hook invocation.
    trace_invocations: bool,
}

impl NamedEvent {
    /// Creates an event with no hooks.
    pub fn new(name: impl Into<String>, invoker: Arc<dyn Invoker>, config: &DispatchConfig) -> Self {
        Self {
            name: name.into(),
            hooks: PriorityList::new(),
            invoker,
            default_priority: config.default_priority,
            trace_invocations: config.trace_invocations,
        }
    }

    /// The event's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attaches `callback` at the default priority.
    pub fn hook<F>(&mut self, callback: F)
    where
        F: Fn(&Arguments<'_>) -> Result<(), CallError> + Send + Sync + 'static,
    {
        self.attach(EventHook::new(callback, self.default_priority));
    }

    /// Attaches `callback` at `priority`.
    pub fn hook_with_priority<F>(&mut self, callback: F, priority: i32)
    where
        F: Fn(&Arguments<'_>) -> Result<(), CallError> + Send + Sync + 'static,
    {
        self.attach(EventHook::new(callback, priority));
    }

    /// Attaches a prepared hook.
    pub fn attach(&mut self, hook: EventHook) {
        let priority = hook.priority();
        self.hooks.insert(hook, priority);
        debug!(
            event = %self.name,
            priority,
            hook_count = self.hooks.len(),
            "Hook attached"
        );
    }

    /// Runs every hook with `parameters`.
    ///
    /// The first failing hook aborts the trigger with `TriggerFailed`;
    /// later hooks do not run.
    pub fn trigger(&mut self, parameters: &Parameters) -> AppResult<()> {
        let hooks = self.hooks.snapshot();
        debug!(event = %self.name, hook_count = hooks.len(), "Triggering event");

        for (index, hook) in hooks.iter().enumerate() {
            if self.trace_invocations {
                trace!(event = %self.name, index, priority = hook.priority(), "Invoking hook");
            }

            if let Err(e) = self.invoker.call(hook, parameters) {
                warn!(
                    event = %self.name,
                    index,
                    priority = hook.priority(),
                    error = %e,
                    "Hook failed, aborting trigger"
                );
                return Err(AppError::trigger_failed(&self.name, e));
            }
        }

        Ok(())
    }

    /// Removes every hook.
    pub fn clear(&mut self) {
        self.hooks.clear();
        debug!(event = %self.name, "Hooks cleared");
    }

    /// Number of attached hooks.
    pub fn hook_count(&self) -> usize {
        self.hooks.len()
    }

    /// Returns whether the hooks are currently in execution order.
    pub fn is_sorted(&self) -> bool {
        self.hooks.is_sorted()
    }
}

impl fmt::Debug for NamedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedEvent")
            .field("name", &self.name)
            .field("hooks", &self.hooks)
            .field("invoker", &self.invoker)
            .finish()
    }
}
