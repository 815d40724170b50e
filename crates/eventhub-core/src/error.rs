//! Unified error types for EventHub.
//!
//! Every failure raised by the dispatcher and the named registry is an
//! [`AppError`] tagged with an [`ErrorKind`], so callers can match on the
//! kind and still walk the `source()` chain for the underlying cause.

use std::fmt;
use thiserror::Error;

/// Error kind categorization used across EventHub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// A dispatch or listen target is not a declared event kind.
    InvalidEventKind,
    /// A listener is neither a callback nor a listener object.
    InvalidListenerKind,
    /// An event name is empty after trimming and case folding.
    EmptyEventName,
    /// An event name is already registered.
    DuplicateEventName,
    /// No event is registered under the given name.
    EventNotDefined,
    /// A hook failed while its event was being triggered.
    TriggerFailed,
    /// A typed listener body reported a failure.
    Listener,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
}

impl ErrorKind {
    /// Returns the stable numeric code for this kind.
    pub fn code(&self) -> u32 {
        match self {
            Self::EmptyEventName => 1301,
            Self::DuplicateEventName => 1302,
            Self::EventNotDefined => 1303,
            Self::TriggerFailed => 1304,
            Self::InvalidEventKind => 1305,
            Self::InvalidListenerKind => 1306,
            Self::Listener => 1307,
            Self::Configuration => 1310,
            Self::Serialization => 1311,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEventKind => write!(f, "INVALID_EVENT_KIND"),
            Self::InvalidListenerKind => write!(f, "INVALID_LISTENER_KIND"),
            Self::EmptyEventName => write!(f, "EMPTY_EVENT_NAME"),
            Self::DuplicateEventName => write!(f, "DUPLICATE_EVENT_NAME"),
            Self::EventNotDefined => write!(f, "EVENT_NOT_DEFINED"),
            Self::TriggerFailed => write!(f, "TRIGGER_FAILED"),
            Self::Listener => write!(f, "LISTENER"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
        }
    }
}

/// The unified error used throughout EventHub.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Numeric code of this error's kind.
    pub fn code(&self) -> u32 {
        self.kind.code()
    }

    /// Create an invalid-event-kind error for the named type.
    pub fn invalid_event_kind(event: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::InvalidEventKind,
            format!("The event type `{event}` is not a declared event kind"),
        )
    }

    /// Create an invalid-listener-kind error for listeners of the named type.
    pub fn invalid_listener_kind(event: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::InvalidListenerKind,
            format!("The listener for `{event}` is neither a callback nor a listener object"),
        )
    }

    /// Create an empty-event-name error.
    pub fn empty_event_name() -> Self {
        Self::new(ErrorKind::EmptyEventName, "An event name cannot be empty")
    }

    /// Create a duplicate-event-name error.
    pub fn duplicate_event_name(name: &str) -> Self {
        Self::new(
            ErrorKind::DuplicateEventName,
            format!("The event `{name}` has already been defined"),
        )
    }

    /// Create an event-not-defined error.
    pub fn event_not_defined(name: &str) -> Self {
        Self::new(
            ErrorKind::EventNotDefined,
            format!("The event `{name}` does not exist"),
        )
    }

    /// Create a trigger-failed error wrapping the hook's failure.
    pub fn trigger_failed(
        name: &str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::with_source(
            ErrorKind::TriggerFailed,
            format!("The event `{name}` was not successfully triggered"),
            source,
        )
    }

    /// Create a listener error.
    pub fn listener(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Listener, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
