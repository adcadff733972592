//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the memory (concentration) game: dealing
//! a paired deck, revealing cards two at a time, matching, auto-unflip timing
//! and the session lifecycle. It has **zero dependencies** on terminals or
//! timers, making it:
//!
//! - **Deterministic**: Same seed deals the same deck
//! - **Testable**: The current instant is passed in, never read
//! - **Snapshot-friendly**: Every action returns a new [`Session`] value
//!
//! # Module Structure
//!
//! - [`rng`]: Seeded generator and Fisher-Yates shuffle
//! - [`deck`]: Paired deck generation and validation
//! - [`session`]: The state machine (clicks, ticks, pause/resume, restart)
//! - [`snapshot`]: Serializable read-only view for presentation
//! - [`time`]: Elapsed time formatting
//!
//! # Game Rules
//!
//! - **Pairs**: Each face value appears exactly twice
//! - **Moves**: Every second card revealed counts one move, match or not
//! - **Score**: One point per matched pair
//! - **Auto-unflip**: A pending pair turns back over once it has been shown
//!   for longer than the flip delay (2500ms by default)
//! - **Completion**: The click that matches the last pair completes the game
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//! use tui_memory_core::{Deck, Session};
//! use tui_memory_core::types::GameStatus;
//!
//! let deck = Deck::from_face_values(&[1, 2, 1, 2]).unwrap();
//! let now = Instant::now();
//!
//! let game = Session::from_deck(deck)
//!     .toggle_running()
//!     .handle_card_click(0, now)
//!     .handle_card_click(2, now)
//!     .handle_card_click(1, now)
//!     .handle_card_click(3, now);
//!
//! assert_eq!(game.status(), GameStatus::Completed);
//! assert_eq!(game.moves(), 2);
//! assert_eq!(game.score(), 2);
//! ```
//!
//! # Timing
//!
//! The clock ticks once per second. Call [`Session::tick`] with the current
//! instant; elapsed time only advances while playing.

pub mod deck;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod time;

pub use tui_memory_types as types;

// Re-export commonly used types for convenience
pub use deck::{clamp_pair_count, generate_deck, Deck, DeckError};
pub use rng::SimpleRng;
pub use session::Session;
pub use snapshot::SessionSnapshot;
pub use time::format_time;
