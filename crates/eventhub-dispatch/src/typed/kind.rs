//! Event kinds and the per-kind listener slot.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use eventhub_core::error::AppError;
use eventhub_core::result::AppResult;

use super::event::Event;
use super::listener::{Callback, Listener, ListenerBinding};
use crate::callbacks::PriorityList;

/// Runtime identity of an event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventKind {
    /// Type identity used for lookups.
    pub id: TypeId,
    /// Name under which the kind is addressed at runtime.
    pub name: &'static str,
}

impl EventKind {
    /// Kind of the event type `E`.
    pub fn of<E: Event>() -> Self {
        Self {
            id: TypeId::of::<E>(),
            name: E::kind_name(),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Type-erased view of a [`Slot`], used when the caller only holds
/// `Any` values and kind names.
pub(crate) trait ErasedSlot: Send + Sync {
    fn kind(&self) -> EventKind;

    fn len(&self) -> usize;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Resolves `listener` into a binding and appends it.
    fn bind(&mut self, listener: Box<dyn Any + Send + Sync>, priority: i32) -> AppResult<()>;

    /// Dispatches an event whose runtime type matches this slot.
    fn dispatch(&mut self, event: &dyn Any, trace_invocations: bool) -> AppResult<()>;
}

/// Listeners registered for one event type.
pub(crate) struct Slot<E> {
    pub(crate) kind: EventKind,
    pub(crate) listeners: PriorityList<ListenerBinding<E>>,
}

impl<E: Event> Slot<E> {
    pub(crate) fn new() -> Self {
        Self {
            kind: EventKind::of::<E>(),
            listeners: PriorityList::new(),
        }
    }
}

impl<E: Event> ErasedSlot for Slot<E> {
    fn kind(&self) -> EventKind {
        self.kind
    }

    fn len(&self) -> usize {
        self.listeners.len()
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn bind(&mut self, listener: Box<dyn Any + Send + Sync>, priority: i32) -> AppResult<()> {
        let binding = resolve_listener::<E>(listener)
            .ok_or_else(|| AppError::invalid_listener_kind(self.kind))?;
        self.listeners.insert(binding, priority);
        Ok(())
    }

    fn dispatch(&mut self, event: &dyn Any, trace_invocations: bool) -> AppResult<()> {
        let event = event
            .downcast_ref::<E>()
            .ok_or_else(|| AppError::invalid_event_kind(self.kind))?;
        let listeners = self.listeners.snapshot();
        invoke_all(self.kind, &listeners, event, trace_invocations)
    }
}

/// Accepts a boxed [`Callback`], `Arc<dyn Listener>`, or [`ListenerBinding`].
fn resolve_listener<E: Event>(listener: Box<dyn Any + Send + Sync>) -> Option<ListenerBinding<E>> {
    let listener = match listener.downcast::<Callback<E>>() {
        Ok(f) => return Some(ListenerBinding::Callback(*f)),
        Err(other) => other,
    };
    let listener = match listener.downcast::<Arc<dyn Listener<E>>>() {
        Ok(object) => return Some(ListenerBinding::Object(*object)),
        Err(other) => other,
    };
    listener
        .downcast::<ListenerBinding<E>>()
        .ok()
        .map(|binding| *binding)
}

/// Runs `listeners` in order, halting once a stoppable event is stopped.
///
/// A listener error is returned as-is and skips the remaining listeners.
pub(crate) fn invoke_all<E: Event>(
    kind: EventKind,
    listeners: &[ListenerBinding<E>],
    event: &E,
    trace_invocations: bool,
) -> AppResult<()> {
    for (index, listener) in listeners.iter().enumerate() {
        if trace_invocations {
            trace!(event = %kind, index, object = listener.is_object(), "Invoking listener");
        }

        listener.invoke(event)?;

        if event
            .as_stoppable()
            .is_some_and(|stoppable| stoppable.is_propagation_stopped())
        {
            debug!(
                event = %kind,
                invoked = index + 1,
                skipped = listeners.len() - index - 1,
                "Propagation stopped"
            );
            break;
        }
    }
    Ok(())
}
