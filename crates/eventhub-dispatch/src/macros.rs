//! Convenience macros for building payloads and parameters.

/// Builds a [`Payload`](eventhub_core::types::Payload).
///
/// # Example
/// ```
/// use eventhub_dispatch::payload;
/// use serde_json::json;
///
/// let payload = payload!({
///     "order_id" => json!(123),
///     "currency" => json!("EUR"),
/// });
/// assert_eq!(payload.get_i64("order_id"), Some(123));
/// assert_eq!(payload.get_str("currency"), Some("EUR"));
/// ```
#[macro_export]
macro_rules! payload {
    () => {
        $crate::prelude::Payload::new()
    };
    ({ $($key:expr => $value:expr),* $(,)? }) => {{
        let payload = $crate::prelude::Payload::new();
        $(
            let payload = payload.with($key, $value);
        )*
        payload
    }};
}

/// Builds trigger [`Parameters`](crate::named::Parameters).
///
/// # Example
/// ```
/// use eventhub_dispatch::parameters;
/// use eventhub_dispatch::prelude::EventManager;
/// use serde_json::json;
///
/// let mut events = EventManager::default();
/// events.register("user.login").unwrap();
/// events
///     .hook("user.login", |args| {
///         let user: String = args.get("user")?;
///         assert_eq!(user, "tim");
///         Ok(())
///     })
///     .unwrap();
///
/// events
///     .trigger("user.login", &parameters!({ "user" => json!("tim") }))
///     .unwrap();
/// ```
#[macro_export]
macro_rules! parameters {
    () => {
        $crate::prelude::Parameters::new()
    };
    ({ $($key:expr => $value:expr),* $(,)? }) => {{
        let mut parameters = $crate::prelude::Parameters::new();
        $(
            parameters.insert($key.to_string(), $value);
        )*
        parameters
    }};
}
