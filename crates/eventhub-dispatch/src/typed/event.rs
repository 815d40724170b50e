//! Event capabilities and ready-made event types.

use std::any::Any;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use eventhub_core::types::Payload;

/// Contract every dispatchable event satisfies.
///
/// Events are looked up by their concrete type. Listeners receive `&E`,
/// so the payload is read-only for the whole dispatch.
pub trait Event: Any + Send + Sync {
    /// The data this event carries.
    fn payload(&self) -> &Payload;

    /// Returns the stoppable capability, if this event has one.
    fn as_stoppable(&self) -> Option<&dyn StoppableEvent> {
        None
    }

    /// Name under which this kind can be addressed at runtime.
    fn kind_name() -> &'static str
    where
        Self: Sized,
    {
        std::any::type_name::<Self>()
    }
}

/// Optional capability letting a listener halt the current dispatch.
pub trait StoppableEvent {
    /// Returns whether a listener asked to stop propagation.
    fn is_propagation_stopped(&self) -> bool;

    /// Prevents any later listener from running for this dispatch.
    fn stop_propagation(&self);
}

/// Interior stop flag for stoppable events.
#[derive(Debug, Default)]
pub struct Propagation {
    stopped: AtomicBool,
}

impl Propagation {
    /// Creates a flag in the running state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether propagation was stopped.
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }

    /// Stops propagation.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
    }
}

impl Clone for Propagation {
    fn clone(&self) -> Self {
        Self {
            stopped: AtomicBool::new(self.is_stopped()),
        }
    }
}

/// Plain event with identity, timestamp and payload.
///
/// Embed it in a newtype to give an event its own kind.
#[derive(Debug, Clone)]
pub struct BasicEvent {
    /// Unique event ID.
    pub id: Uuid,
    /// When the event was created.
    pub occurred_at: DateTime<Utc>,
    payload: Payload,
}

impl BasicEvent {
    /// Creates a new event carrying `payload`.
    pub fn new(payload: Payload) -> Self {
        Self {
            id: Uuid::now_v7(),
            occurred_at: Utc::now(),
            payload,
        }
    }
}

impl Event for BasicEvent {
    fn payload(&self) -> &Payload {
        &self.payload
    }
}

/// [`BasicEvent`] that listeners can stop.
#[derive(Debug, Clone)]
pub struct StoppableBasicEvent {
    /// The wrapped event.
    pub inner: BasicEvent,
    propagation: Propagation,
}

impl StoppableBasicEvent {
    /// Creates a new stoppable event carrying `payload`.
    pub fn new(payload: Payload) -> Self {
        Self {
            inner: BasicEvent::new(payload),
            propagation: Propagation::new(),
        }
    }
}

impl Event for StoppableBasicEvent {
    fn payload(&self) -> &Payload {
        self.inner.payload()
    }

    fn as_stoppable(&self) -> Option<&dyn StoppableEvent> {
        Some(self)
    }
}

impl StoppableEvent for StoppableBasicEvent {
    fn is_propagation_stopped(&self) -> bool {
        self.propagation.is_stopped()
    }

    fn stop_propagation(&self) {
        self.propagation.stop();
    }
}
