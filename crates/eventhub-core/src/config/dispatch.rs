//! Dispatcher and named-registry configuration.

use serde::{Deserialize, Serialize};

/// Settings shared by the typed dispatcher and the named registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Priority given to listeners and hooks registered without one.
    #[serde(default)]
    pub default_priority: i32,
    /// Emit a `trace` event for every single listener/hook invocation.
    #[serde(default)]
    pub trace_invocations: bool,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            default_priority: 0,
            trace_invocations: false,
        }
    }
}
