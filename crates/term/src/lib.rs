//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids widget
//! toolkits and instead renders a [`SessionSnapshot`](tui_memory_core::SessionSnapshot)
//! into a framebuffer that is then flushed to the terminal.
//!
//! The view only reads snapshots; it never touches the session itself.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{face_glyph, help_line, victory_message, GameView, Layout, Viewport};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, TerminalRenderer};
