//! Prelude for convenient imports.

pub use eventhub_core::error::{AppError, ErrorKind};
pub use eventhub_core::result::AppResult;
pub use eventhub_core::types::Payload;

pub use crate::named::{
    Arguments, CallError, EventHook, EventManager, Invoker, NamedEvent, ParameterResolver,
    Parameters,
};
pub use crate::typed::{
    BasicEvent, Callback, Event, EventDispatcher, Listener, ListenerBinding, Propagation,
    StoppableBasicEvent, StoppableEvent,
};

pub use crate::{parameters, payload};
