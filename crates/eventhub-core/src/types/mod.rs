//! Value types shared by both dispatch subsystems.

pub mod payload;

pub use payload::Payload;
