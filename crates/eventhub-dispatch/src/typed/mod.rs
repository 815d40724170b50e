//! Typed event dispatcher: listeners keyed by concrete event type.

pub mod dispatcher;
pub mod event;
pub mod kind;
pub mod listener;

pub use dispatcher::EventDispatcher;
pub use event::{BasicEvent, Event, Propagation, StoppableBasicEvent, StoppableEvent};
pub use kind::EventKind;
pub use listener::{Callback, IntoListener, Listener, ListenerBinding};
