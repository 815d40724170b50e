//! Integration tests for the typed event dispatcher.

mod helpers;

use std::sync::Arc;

use serde_json::json;

use eventhub::payload;
use eventhub::prelude::*;

use helpers::{CallLog, OrderPlaced, UserRegistered, WelcomeEmailListener};

#[test]
fn test_basic_dispatching() {
    let mut dispatcher = EventDispatcher::new();
    let log = CallLog::new();

    let sink = log.clone();
    dispatcher
        .listen(move |event: &UserRegistered| {
            let username = event.payload().get_str("username").unwrap_or_default();
            sink.push(format!("registered:{username}"));
            Ok(())
        })
        .expect("listen");

    dispatcher
        .dispatch(UserRegistered::new("Tim"))
        .expect("dispatch");
    assert_eq!(log.entries(), vec!["registered:Tim"]);
}

#[test]
fn test_listener_objects() {
    let mut dispatcher = EventDispatcher::new();
    let log = CallLog::new();
    let listener = Arc::new(WelcomeEmailListener { log: log.clone() });

    dispatcher
        .listen::<UserRegistered, _>(listener)
        .expect("listen");
    dispatcher
        .dispatch(UserRegistered::new("Alice"))
        .expect("dispatch");

    assert_eq!(log.entries(), vec!["welcome:Alice"]);
}

#[test]
fn test_stoppable_events_with_default_priorities() {
    let mut dispatcher = EventDispatcher::new();
    let log = CallLog::new();

    let first = log.clone();
    dispatcher
        .listen(move |event: &OrderPlaced| {
            first.push("processing payment");
            event.stop_propagation();
            Ok(())
        })
        .expect("listen");
    let second = log.clone();
    dispatcher
        .listen(move |_: &OrderPlaced| {
            second.push("should not run");
            Ok(())
        })
        .expect("listen");

    let event = dispatcher
        .dispatch(OrderPlaced::new(payload!({ "order_id" => json!(123) })))
        .expect("dispatch");

    assert!(event.is_propagation_stopped());
    assert_eq!(event.payload().get_i64("order_id"), Some(123));
    assert_eq!(log.entries(), vec!["processing payment"]);
}

#[test]
fn test_descending_priority_with_stable_ties() {
    let mut dispatcher = EventDispatcher::new();
    let log = CallLog::new();
    let plan = [
        ("a", 0),
        ("b", 3),
        ("c", -1),
        ("d", 3),
        ("e", 0),
        ("f", i32::MIN),
        ("g", i32::MAX),
        ("h", 0),
    ];

    for (label, priority) in plan {
        let sink = log.clone();
        dispatcher
            .listen_with_priority(
                move |_: &UserRegistered| {
                    sink.push(label);
                    Ok(())
                },
                priority,
            )
            .expect("listen");
    }

    dispatcher.dispatch(UserRegistered::new("x")).expect("dispatch");
    assert_eq!(log.entries(), vec!["g", "b", "d", "a", "e", "h", "c", "f"]);

    // A second dispatch after a new registration keeps the same contract.
    let sink = log.clone();
    dispatcher
        .listen_with_priority(
            move |_: &UserRegistered| {
                sink.push("i");
                Ok(())
            },
            3,
        )
        .expect("listen");
    dispatcher.dispatch(UserRegistered::new("x")).expect("dispatch");
    assert_eq!(
        log.entries()[8..].to_vec(),
        vec!["g", "b", "d", "i", "a", "e", "h", "c", "f"]
    );
}

#[test]
fn test_events_of_other_types_are_isolated() {
    let mut dispatcher = EventDispatcher::new();
    let log = CallLog::new();

    let sink = log.clone();
    dispatcher
        .listen(move |_: &UserRegistered| {
            sink.push("user");
            Ok(())
        })
        .expect("listen");

    dispatcher
        .dispatch(OrderPlaced::new(Payload::new()))
        .expect("dispatch");
    assert!(log.entries().is_empty());
    assert_eq!(dispatcher.listener_count::<OrderPlaced>(), 0);
    assert_eq!(dispatcher.listener_count::<UserRegistered>(), 1);
}

#[test]
fn test_non_event_values_are_rejected() {
    let mut dispatcher = EventDispatcher::new();
    dispatcher.declare::<UserRegistered>().expect("declare");

    let err = dispatcher
        .dispatch_any(Box::new(String::from("not an event")))
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidEventKind);

    let err = dispatcher
        .listen_any("no.such.kind", Box::new(()), 0)
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidEventKind);

    let err = dispatcher
        .listen_any("user.registered", Box::new(17_i32), 0)
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidListenerKind);
    assert_eq!(dispatcher.listener_count::<UserRegistered>(), 0);
}

#[test]
fn test_erased_listener_joins_typed_order() {
    let mut dispatcher = EventDispatcher::new();
    let log = CallLog::new();

    let typed = log.clone();
    dispatcher
        .listen(move |_: &UserRegistered| {
            typed.push("typed");
            Ok(())
        })
        .expect("listen");

    let erased = log.clone();
    let callback: Callback<UserRegistered> = Arc::new(move |_| {
        erased.push("erased");
        Ok(())
    });
    dispatcher
        .listen_any("user.registered", Box::new(callback), 1)
        .expect("listen_any");

    dispatcher
        .dispatch_any(Box::new(UserRegistered::new("x")))
        .expect("dispatch_any");
    assert_eq!(log.entries(), vec!["erased", "typed"]);
}

#[test]
fn test_basic_events_carry_identity() {
    let mut dispatcher = EventDispatcher::new();
    let log = CallLog::new();

    let sink = log.clone();
    dispatcher
        .listen(move |event: &StoppableBasicEvent| {
            sink.push(event.inner.id.to_string());
            event.stop_propagation();
            Ok(())
        })
        .expect("listen");
    dispatcher
        .listen(|_: &StoppableBasicEvent| Err(AppError::listener("unreachable")))
        .expect("listen");

    let event = dispatcher
        .dispatch(StoppableBasicEvent::new(Payload::new()))
        .expect("dispatch");
    assert_eq!(log.entries(), vec![event.inner.id.to_string()]);
}
