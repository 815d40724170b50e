//! Integration tests for the named event registry.

mod helpers;

use std::error::Error as _;
use std::sync::Arc;

use serde_json::json;

use eventhub::parameters;
use eventhub::prelude::*;

use helpers::CallLog;

/// Owns a registered event, the way application components do.
struct DemoComponent;

impl DemoComponent {
    fn new(events: &mut EventManager) -> AppResult<Self> {
        events.register("demo")?;
        Ok(Self)
    }

    fn on_demo(
        &self,
        events: &mut EventManager,
        log: &CallLog,
        label: &'static str,
        priority: i32,
    ) -> AppResult<()> {
        let log = log.clone();
        events.hook_with_priority(
            "demo",
            move |_| {
                log.push(label);
                Ok(())
            },
            priority,
        )
    }
}

#[test]
fn test_general_usage_priority_order() {
    let mut events = EventManager::default();
    let log = CallLog::new();
    let demo = DemoComponent::new(&mut events).expect("register");

    demo.on_demo(&mut events, &log, "priority 1", 1).expect("hook");
    demo.on_demo(&mut events, &log, "priority -1", -1).expect("hook");
    demo.on_demo(&mut events, &log, "priority 0", 0).expect("hook");

    events.trigger("demo", &parameters!()).expect("trigger");
    assert_eq!(log.entries(), vec!["priority 1", "priority 0", "priority -1"]);
}

#[test]
fn test_names_are_case_folded() {
    let mut events = EventManager::default();
    events.register("Demo").expect("register");

    let err = events.register("demo").unwrap_err();
    assert_eq!(err.kind, ErrorKind::DuplicateEventName);
    assert_eq!(err.code(), 1302);
    assert!(events.has("  DEMO").expect("has"));
}

#[test]
fn test_deregister_then_get_fails() {
    let mut events = EventManager::default();
    events.register("demo").expect("register");
    events.hook("demo", |_| Ok(())).expect("hook");
    events.deregister("demo").expect("deregister");

    let err = events.get("demo").unwrap_err();
    assert_eq!(err.kind, ErrorKind::EventNotDefined);
    assert_eq!(err.code(), 1303);
}

#[test]
fn test_trigger_resolves_parameters_by_name() {
    let mut events = EventManager::new(Arc::new(
        ParameterResolver::new().with_bound("greeting", json!("Hello")),
    ));
    let log = CallLog::new();
    events.register("user.login").expect("register");

    let sink = log.clone();
    events
        .hook("user.login", move |args| {
            let greeting: String = args.get("greeting")?;
            let user: String = args.get("user")?;
            let attempts: Option<u32> = args.optional("attempts")?;
            sink.push(format!("{greeting} {user} ({})", attempts.unwrap_or(1)));
            Ok(())
        })
        .expect("hook");

    events
        .trigger("user.login", &parameters!({ "user" => json!("tim") }))
        .expect("trigger");
    events
        .trigger(
            "USER.LOGIN",
            &parameters!({ "user" => json!("ann"), "attempts" => json!(3) }),
        )
        .expect("trigger");

    assert_eq!(log.entries(), vec!["Hello tim (1)", "Hello ann (3)"]);
}

#[test]
fn test_trigger_failure_is_fail_fast_and_wrapped() {
    let mut events = EventManager::default();
    let log = CallLog::new();
    events.register("Upload").expect("register");

    let before = log.clone();
    events
        .hook_with_priority(
            "upload",
            move |_| {
                before.push("scan");
                Ok(())
            },
            10,
        )
        .expect("hook");
    events
        .hook_with_priority("upload", |_| Err(CallError::failed("quota exceeded")), 5)
        .expect("hook");
    let after = log.clone();
    events
        .hook("upload", move |_| {
            after.push("index");
            Ok(())
        })
        .expect("hook");

    let err = events.trigger("upload", &parameters!()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::TriggerFailed);
    assert_eq!(err.code(), 1304);
    assert!(err.message.contains("`Upload`"));
    let cause = err.source().expect("wrapped cause");
    assert_eq!(cause.to_string(), "Hook failed: quota exceeded");
    assert_eq!(log.entries(), vec!["scan"]);
}

#[test]
fn test_custom_invoker_is_used() {
    #[derive(Debug)]
    struct Refusing;

    impl Invoker for Refusing {
        fn call(&self, _hook: &EventHook, _parameters: &Parameters) -> Result<(), CallError> {
            Err(CallError::failed("container unavailable"))
        }
    }

    let mut events = EventManager::new(Arc::new(Refusing));
    events.register("demo").expect("register");
    events.hook("demo", |_| Ok(())).expect("hook");

    let err = events.trigger("demo", &parameters!()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::TriggerFailed);

    events.clear("demo").expect("clear");
    events.trigger("demo", &parameters!()).expect("no hooks, nothing to refuse");
}
