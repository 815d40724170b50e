//! # eventhub-dispatch
//!
//! Synchronous in-process publish/subscribe. Provides:
//!
//! - A priority-ordered callback list with stable tie ordering
//! - A typed event dispatcher keyed by concrete event type, with
//!   stoppable propagation and listener objects
//! - A named event registry whose hooks are called through a
//!   parameter-resolving [`Invoker`](named::Invoker)

pub mod callbacks;
pub mod macros;
pub mod named;
pub mod prelude;
pub mod typed;

pub use callbacks::PriorityList;
pub use named::{EventManager, NamedEvent};
pub use typed::EventDispatcher;
