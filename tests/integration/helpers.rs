//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use eventhub::prelude::*;

/// Records the order in which callbacks ran.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one entry.
    pub fn push(&self, entry: impl Into<String>) {
        self.calls.lock().expect("call log poisoned").push(entry.into());
    }

    /// Snapshot of all entries so far.
    pub fn entries(&self) -> Vec<String> {
        self.calls.lock().expect("call log poisoned").clone()
    }
}

/// Event announcing a new user account.
pub struct UserRegistered {
    payload: Payload,
}

impl UserRegistered {
    pub fn new(username: &str) -> Self {
        Self {
            payload: Payload::new().with_string("username", username),
        }
    }
}

impl Event for UserRegistered {
    fn payload(&self) -> &Payload {
        &self.payload
    }

    fn kind_name() -> &'static str {
        "user.registered"
    }
}

/// Stoppable event announcing a placed order.
pub struct OrderPlaced {
    payload: Payload,
    propagation: Propagation,
}

impl OrderPlaced {
    pub fn new(payload: Payload) -> Self {
        Self {
            payload,
            propagation: Propagation::new(),
        }
    }
}

impl Event for OrderPlaced {
    fn payload(&self) -> &Payload {
        &self.payload
    }

    fn as_stoppable(&self) -> Option<&dyn StoppableEvent> {
        Some(self)
    }

    fn kind_name() -> &'static str {
        "order.placed"
    }
}

impl StoppableEvent for OrderPlaced {
    fn is_propagation_stopped(&self) -> bool {
        self.propagation.is_stopped()
    }

    fn stop_propagation(&self) {
        self.propagation.stop();
    }
}

/// Listener object that "sends" a welcome email.
pub struct WelcomeEmailListener {
    pub log: CallLog,
}

impl Listener<UserRegistered> for WelcomeEmailListener {
    fn handle(&self, event: &UserRegistered) -> AppResult<()> {
        let username = event
            .payload()
            .get_str("username")
            .ok_or_else(|| AppError::listener("username missing"))?;
        self.log.push(format!("welcome:{username}"));
        Ok(())
    }
}
