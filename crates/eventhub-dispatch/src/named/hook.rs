//! Hook binding: a callable plus its priority.

use std::fmt;
use std::sync::Arc;

use super::arguments::{Arguments, CallError};

/// Directly invocable hook callback.
pub type HookFn = Arc<dyn Fn(&Arguments<'_>) -> Result<(), CallError> + Send + Sync>;

/// A callback attached to a named event.
#[derive(Clone)]
pub struct EventHook {
    callback: HookFn,
    priority: i32,
}

impl EventHook {
    /// Wraps a closure.
    pub fn new<F>(callback: F, priority: i32) -> Self
    where
        F: Fn(&Arguments<'_>) -> Result<(), CallError> + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
            priority,
        }
    }

    /// Binds `method` to `target`, like an object/method callable pair.
    pub fn bound<T>(
        target: Arc<T>,
        method: fn(&T, &Arguments<'_>) -> Result<(), CallError>,
        priority: i32,
    ) -> Self
    where
        T: Send + Sync + 'static,
    {
        Self::new(move |args| method(&target, args), priority)
    }

    /// Execution priority; higher runs first.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Runs the callback with already-resolved arguments.
    pub fn call(&self, args: &Arguments<'_>) -> Result<(), CallError> {
        (self.callback)(args)
    }
}

impl fmt::Debug for EventHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHook")
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}
