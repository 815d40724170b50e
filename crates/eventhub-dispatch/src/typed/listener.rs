//! Listener capability and the callback/object binding.

use std::fmt;
use std::sync::Arc;

use eventhub_core::result::AppResult;

/// Object that reacts to events of type `E`.
pub trait Listener<E>: Send + Sync {
    /// Handles one dispatched event.
    fn handle(&self, event: &E) -> AppResult<()>;
}

/// Directly invocable listener callback.
pub type Callback<E> = Arc<dyn Fn(&E) -> AppResult<()> + Send + Sync>;

/// A registered listener, resolved once at registration time.
pub enum ListenerBinding<E> {
    /// A bare callback.
    Callback(Callback<E>),
    /// An object whose `handle` is invoked.
    Object(Arc<dyn Listener<E>>),
}

impl<E> ListenerBinding<E> {
    /// Wraps a closure.
    pub fn callback<F>(f: F) -> Self
    where
        F: Fn(&E) -> AppResult<()> + Send + Sync + 'static,
    {
        Self::Callback(Arc::new(f))
    }

    /// Wraps a listener object.
    pub fn object(listener: Arc<dyn Listener<E>>) -> Self {
        Self::Object(listener)
    }

    /// Runs the listener against `event`.
    pub fn invoke(&self, event: &E) -> AppResult<()> {
        match self {
            Self::Callback(f) => f(event),
            Self::Object(listener) => listener.handle(event),
        }
    }

    /// Returns whether this binding wraps a listener object.
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }
}

impl<E> Clone for ListenerBinding<E> {
    fn clone(&self) -> Self {
        match self {
            Self::Callback(f) => Self::Callback(Arc::clone(f)),
            Self::Object(listener) => Self::Object(Arc::clone(listener)),
        }
    }
}

impl<E> fmt::Debug for ListenerBinding<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Callback(_) => f.write_str("ListenerBinding::Callback"),
            Self::Object(_) => f.write_str("ListenerBinding::Object"),
        }
    }
}

/// Marker for closures accepted by [`IntoListener`].
pub struct FnMarker;

/// Marker for listener objects accepted by [`IntoListener`].
pub struct ObjectMarker;

/// Marker for already-built bindings.
pub struct BindingMarker;

/// Anything `listen` accepts: a closure, an `Arc` of a listener object,
/// or a prepared [`ListenerBinding`].
pub trait IntoListener<E, M> {
    /// Converts `self` into a binding.
    fn into_listener(self) -> ListenerBinding<E>;
}

impl<E, F> IntoListener<E, FnMarker> for F
where
    F: Fn(&E) -> AppResult<()> + Send + Sync + 'static,
{
    fn into_listener(self) -> ListenerBinding<E> {
        ListenerBinding::callback(self)
    }
}

impl<E, L> IntoListener<E, ObjectMarker> for Arc<L>
where
    L: Listener<E> + 'static,
{
    fn into_listener(self) -> ListenerBinding<E> {
        ListenerBinding::Object(self)
    }
}

impl<E> IntoListener<E, BindingMarker> for ListenerBinding<E> {
    fn into_listener(self) -> ListenerBinding<E> {
        self
    }
}
