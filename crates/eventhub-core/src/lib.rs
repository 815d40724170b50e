//! # eventhub-core
//!
//! Core crate for EventHub. Contains the unified error system,
//! configuration schemas, the tracing bootstrap, and the payload type
//! carried by typed events.
//!
//! This crate has **no** internal dependencies on other EventHub crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod result;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
