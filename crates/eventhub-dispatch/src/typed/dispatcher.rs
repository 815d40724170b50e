//! Typed event dispatcher.
//!
//! Listeners are stored per concrete event type. Dispatch:
//! - resolves the listener list for the event's type, creating an empty
//!   one on first use;
//! - invokes listeners by descending priority, ties in registration order;
//! - stops early once a stoppable event reports propagation stopped;
//! - returns the first listener error unchanged.

use std::any::{Any, TypeId};
use std::collections::HashMap;

use tracing::{debug, warn};

use eventhub_core::config::dispatch::DispatchConfig;
use eventhub_core::error::AppError;
use eventhub_core::result::AppResult;

use super::event::Event;
use super::kind::{ErasedSlot, EventKind, Slot, invoke_all};
use super::listener::{IntoListener, ListenerBinding};

/// Maps event types to their priority-ordered listeners.
pub struct EventDispatcher {
    /// Event type → listener slot.
    slots: HashMap<TypeId, Box<dyn ErasedSlot>>,
    /// Kind name → event type, for the runtime-checked API.
    names: HashMap<&'static str, TypeId>,
    /// Priority used by [`EventDispatcher::listen`].
    default_priority: i32,
    /// Trace every single listener invocation.
    trace_invocations: bool,
}

impl EventDispatcher {
    /// Creates a dispatcher with default settings.
    pub fn new() -> Self {
        Self::from_config(&DispatchConfig::default())
    }

    /// Creates a dispatcher from configuration.
    pub fn from_config(config: &DispatchConfig) -> Self {
        Self {
            slots: HashMap::new(),
            names: HashMap::new(),
            default_priority: config.default_priority,
            trace_invocations: config.trace_invocations,
        }
    }

    /// Makes `E` known as an event kind without adding a listener.
    pub fn declare<E: Event>(&mut self) -> AppResult<()> {
        self.slot_mut::<E>().map(|_| ())
    }

    /// Registers a listener for `E` at the default priority.
    pub fn listen<E, M>(&mut self, listener: impl IntoListener<E, M>) -> AppResult<()>
    where
        E: Event,
    {
        self.listen_with_priority::<E, M>(listener, self.default_priority)
    }

    /// Registers a listener for `E`; higher priorities run first.
    pub fn listen_with_priority<E, M>(
        &mut self,
        listener: impl IntoListener<E, M>,
        priority: i32,
    ) -> AppResult<()>
    where
        E: Event,
    {
        let binding = listener.into_listener();
        let object = binding.is_object();
        let slot = self.slot_mut::<E>()?;
        slot.listeners.insert(binding, priority);

        debug!(
            event = %slot.kind,
            priority,
            object,
            listener_count = slot.listeners.len(),
            "Listener registered"
        );
        Ok(())
    }

    /// Registers a type-erased listener for the kind called `kind_name`.
    ///
    /// The kind must already be declared. The listener box must hold a
    /// [`Callback`](super::listener::Callback), an
    /// `Arc<dyn Listener<E>>`, or a [`ListenerBinding`].
    pub fn listen_any(
        &mut self,
        kind_name: &str,
        listener: Box<dyn Any + Send + Sync>,
        priority: i32,
    ) -> AppResult<()> {
        let slot = self
            .names
            .get(kind_name)
            .and_then(|id| self.slots.get_mut(id))
            .ok_or_else(|| AppError::invalid_event_kind(kind_name))?;

        slot.bind(listener, priority)?;

        debug!(
            event = %slot.kind(),
            priority,
            listener_count = slot.len(),
            "Listener registered"
        );
        Ok(())
    }

    /// Dispatches `event` to its listeners and hands it back.
    pub fn dispatch<E: Event>(&mut self, event: E) -> AppResult<E> {
        let kind = EventKind::of::<E>();
        let listeners = self.listeners_for::<E>()?;

        debug!(
            event = %kind,
            listener_count = listeners.len(),
            "Dispatching event"
        );

        invoke_all(kind, &listeners, &event, self.trace_invocations)?;
        Ok(event)
    }

    /// Dispatches a type-erased event.
    ///
    /// Fails with `InvalidEventKind` when the runtime type was never
    /// declared; no listener list is consulted in that case.
    pub fn dispatch_any(
        &mut self,
        event: Box<dyn Any + Send>,
    ) -> AppResult<Box<dyn Any + Send>> {
        // Deref first: the box itself has a different type id.
        let id = (*event).type_id();
        let Some(slot) = self.slots.get_mut(&id) else {
            warn!("Rejected dispatch of an undeclared event type");
            return Err(AppError::invalid_event_kind("<undeclared>"));
        };

        debug!(
            event = %slot.kind(),
            listener_count = slot.len(),
            "Dispatching event"
        );

        slot.dispatch(&*event, self.trace_invocations)?;
        Ok(event)
    }

    /// Returns the listeners for `E` in execution order.
    ///
    /// Creates an empty entry for `E` if none exists yet.
    pub fn listeners_for<E: Event>(&mut self) -> AppResult<Vec<ListenerBinding<E>>> {
        Ok(self.slot_mut::<E>()?.listeners.snapshot())
    }

    /// Number of listeners registered for `E`.
    pub fn listener_count<E: Event>(&self) -> usize {
        self.slots
            .get(&TypeId::of::<E>())
            .map(|slot| slot.len())
            .unwrap_or(0)
    }

    /// Returns whether `kind_name` denotes a declared event kind.
    pub fn is_declared(&self, kind_name: &str) -> bool {
        self.names.contains_key(kind_name)
    }

    /// Names of all declared event kinds.
    pub fn declared_kinds(&self) -> Vec<&'static str> {
        self.slots.values().map(|slot| slot.kind().name).collect()
    }

    /// Get-or-insert for the slot of `E`.
    fn slot_mut<E: Event>(&mut self) -> AppResult<&mut Slot<E>> {
        let kind = EventKind::of::<E>();

        if !self.slots.contains_key(&kind.id) {
            let taken = self
                .names
                .get(kind.name)
                .is_some_and(|existing| *existing != kind.id);
            if taken {
                warn!(event = %kind, "Kind name already taken by another type, not addressable by name");
            } else {
                self.names.insert(kind.name, kind.id);
            }
            self.slots.insert(kind.id, Box::new(Slot::<E>::new()));
            debug!(event = %kind, "Event kind declared");
        }

        self.slots
            .get_mut(&kind.id)
            .and_then(|slot| slot.as_any_mut().downcast_mut::<Slot<E>>())
            .ok_or_else(|| AppError::invalid_event_kind(kind))
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("kinds", &self.declared_kinds())
            .field("default_priority", &self.default_priority)
            .field("trace_invocations", &self.trace_invocations)
            .finish()
    }
}
