//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and mouse
//! events into [`crate::types::PointerEvent`]. Only the primary (left) button
//! drives drags.

pub mod map;

pub use shapi_types as types;

pub use map::{handle_key_event, pointer_event, should_quit};
