//! Clock driver module - runs a session in real time
//!
//! The core [`Session`](tui_memory_core::Session) never reads the clock. This
//! crate supplies the periodic 1-second tick, injects the current instant into
//! clicks, and stops the clock when the game completes or the driver is torn
//! down.
//!
//! # Example
//!
//! ```
//! use tui_memory_engine::{EngineConfig, GameDriver, ManualClock};
//! use tui_memory_engine::types::{GameAction, GameStatus};
//!
//! let clock = ManualClock::new();
//! let config = EngineConfig { seed: Some(7), ..EngineConfig::default() };
//! let mut driver = GameDriver::new(&config, clock.clone());
//!
//! driver.apply(GameAction::ToggleRunning);
//! clock.advance_ms(1000);
//! driver.poll();
//!
//! assert_eq!(driver.session().status(), GameStatus::Playing);
//! assert_eq!(driver.session().elapsed_seconds(), 1);
//! ```

pub mod clock;
pub mod config;
pub mod driver;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::EngineConfig;
pub use driver::GameDriver;
