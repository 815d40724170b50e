//! Call parameters and their by-name resolution.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Named values passed to `trigger`.
pub type Parameters = HashMap<String, Value>;

/// Failure reported by an [`Invoker`](super::invoker::Invoker) while
/// calling a hook.
#[derive(Debug, Error)]
pub enum CallError {
    /// The hook asked for a parameter nobody supplied.
    #[error("Missing parameter `{0}`")]
    MissingParameter(String),
    /// A parameter exists but does not convert to the requested type.
    #[error("Parameter `{name}` could not be resolved: {source}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Conversion failure.
        #[source]
        source: serde_json::Error,
    },
    /// The hook body itself failed.
    #[error("Hook failed: {0}")]
    Failed(String),
}

impl CallError {
    /// Create a hook-body failure.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// Parameter view handed to a hook.
///
/// Lookups check the trigger's own parameters first, then the values
/// bound on the invoker.
#[derive(Debug, Clone, Copy)]
pub struct Arguments<'a> {
    parameters: &'a Parameters,
    bound: &'a Parameters,
}

impl<'a> Arguments<'a> {
    /// Creates a view over call parameters and invoker-bound values.
    pub fn new(parameters: &'a Parameters, bound: &'a Parameters) -> Self {
        Self { parameters, bound }
    }

    /// Raw value for `name`.
    pub fn value(&self, name: &str) -> Option<&'a Value> {
        self.parameters.get(name).or_else(|| self.bound.get(name))
    }

    /// Returns whether `name` resolves to anything.
    pub fn contains(&self, name: &str) -> bool {
        self.value(name).is_some()
    }

    /// Resolves `name` as `T`, failing if absent.
    pub fn get<T: DeserializeOwned>(&self, name: &str) -> Result<T, CallError> {
        self.optional(name)?
            .ok_or_else(|| CallError::MissingParameter(name.to_string()))
    }

    /// Resolves `name` as `T` if present.
    pub fn optional<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, CallError> {
        self.value(name)
            .map(|value| {
                serde_json::from_value(value.clone()).map_err(|source| {
                    CallError::InvalidParameter {
                        name: name.to_string(),
                        source,
                    }
                })
            })
            .transpose()
    }
}
