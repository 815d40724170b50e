//! Parameter-resolving call mechanism used by named events.

use std::fmt;

use serde_json::Value;

use super::arguments::{Arguments, CallError, Parameters};
use super::hook::EventHook;

/// Calls a hook with a set of named parameters.
///
/// Injected into [`EventManager`](super::manager::EventManager) so
/// applications can plug in their own resolution (service containers,
/// request-scoped values, ...).
pub trait Invoker: Send + Sync + fmt::Debug {
    /// Resolves the hook's inputs from `parameters` and runs it.
    fn call(&self, hook: &EventHook, parameters: &Parameters) -> Result<(), CallError>;
}

/// Default invoker: resolves by name from the call parameters, falling
/// back to values bound on the resolver.
#[derive(Debug, Clone, Default)]
pub struct ParameterResolver {
    /// Values available to every call.
    bound: Parameters,
}

impl ParameterResolver {
    /// Creates a resolver with nothing bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `value` under `name` for every call.
    pub fn with_bound(mut self, name: &str, value: Value) -> Self {
        self.bind(name, value);
        self
    }

    /// Binds `value` under `name` for every call.
    pub fn bind(&mut self, name: &str, value: Value) {
        self.bound.insert(name.to_string(), value);
    }
}

impl Invoker for ParameterResolver {
    fn call(&self, hook: &EventHook, parameters: &Parameters) -> Result<(), CallError> {
        hook.call(&Arguments::new(parameters, &self.bound))
    }
}
