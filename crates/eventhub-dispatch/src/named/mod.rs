//! Named event registry: string-keyed events with prioritized hooks.

pub mod arguments;
pub mod event;
pub mod hook;
pub mod invoker;
pub mod manager;

pub use arguments::{Arguments, CallError, Parameters};
pub use event::NamedEvent;
pub use hook::{EventHook, HookFn};
pub use invoker::{Invoker, ParameterResolver};
pub use manager::EventManager;
