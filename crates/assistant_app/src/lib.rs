//! Platform wiring for the in-page AI writing assistant.
pub mod platform;
