//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`InputAction`]s and keeps the keyboard cursor over the card
//! grid, so the engine only ever sees [`crate::types::GameAction`]s.

pub mod cursor;
pub mod map;

pub use tui_memory_types as types;

pub use cursor::GridCursor;
pub use map::{handle_key_event, should_quit, InputAction};
