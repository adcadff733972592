//! TUI Memory (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_memory::{core,engine,input,term,types}` and owns the
//! binary's logging setup.

pub mod logging;

pub use tui_memory_core as core;
pub use tui_memory_engine as engine;
pub use tui_memory_input as input;
pub use tui_memory_term as term;
pub use tui_memory_types as types;
