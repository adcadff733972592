//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no behavior beyond small display and layout helpers,
//! making them usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid
//!
//! A session deals `2 * pair_count` cards into a grid. Cards are addressed by
//! their [`Position`] (row-major index) and carry a [`FaceValue`] in
//! `1..=pair_count`, each value appearing exactly twice.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 1000 | Clock granularity; one tick adds one elapsed second |
//! | `DEFAULT_FLIP_DELAY_MS` | 2500 | Time a pending pair stays face-up before auto-unflip |
//!
//! # Examples
//!
//! ```
//! use tui_memory_types::{grid_columns, GameStatus, DEFAULT_PAIR_COUNT};
//!
//! assert!(!GameStatus::Paused.is_running());
//! assert_eq!(GameStatus::Paused.as_str(), "paused");
//!
//! // The standard deal is a 4x4 grid.
//! assert_eq!(grid_columns(2 * DEFAULT_PAIR_COUNT as usize), 4);
//! ```

use serde::{Deserialize, Serialize};

/// Index of a card in the grid (row-major, `0..deck_len`).
pub type Position = usize;

/// Icon id shared by the two cards of a pair (`1..=pair_count`).
pub type FaceValue = u16;

/// Number of pairs in a standard 4x4 game.
pub const DEFAULT_PAIR_COUNT: u16 = 8;

/// Largest supported pair count (an 8x8 grid).
pub const MAX_PAIR_COUNT: u16 = 32;

/// Clock tick interval in milliseconds (1 second)
pub const TICK_MS: u32 = 1000;

/// Delay before a pending pair is turned back face-down (2.5 seconds)
pub const DEFAULT_FLIP_DELAY_MS: u32 = 2500;

/// Session lifecycle status
///
/// - **Idle**: Dealt but not started; the clock does not advance
/// - **Playing**: Clicks are accepted and elapsed time advances
/// - **Paused**: Clicks are ignored and the clock is frozen
/// - **Completed**: Every pair is matched
///
/// The cycle goes: Idle → Playing ⇄ Paused, Playing → Completed.
/// Starting a completed session deals a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Idle,
    Playing,
    Paused,
    Completed,
}

impl GameStatus {
    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Idle => "idle",
            GameStatus::Playing => "playing",
            GameStatus::Paused => "paused",
            GameStatus::Completed => "completed",
        }
    }

    /// Whether elapsed time advances and clicks are accepted.
    pub fn is_running(&self) -> bool {
        matches!(self, GameStatus::Playing)
    }
}

/// Actions a presentation layer can apply to a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameAction {
    /// Reveal the card at the given position
    Flip(Position),
    /// Start, pause or resume (starting a completed session deals a new game)
    ToggleRunning,
    /// Deal a new game and start playing immediately
    Restart,
}

/// A dealt card. Immutable once the deck is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub position: Position,
    pub face_value: FaceValue,
}

impl Card {
    pub const fn new(position: Position, face_value: FaceValue) -> Self {
        Self {
            position,
            face_value,
        }
    }
}

/// Columns of the card grid: the smallest square that holds `card_count`
/// cards (4 for 16 cards, 8 for 64). Always at least 1.
pub fn grid_columns(card_count: usize) -> usize {
    let mut cols = 1;
    while cols * cols < card_count {
        cols += 1;
    }
    cols
}

/// A face-up card that is part of the pending pair.
pub type FlippedCard = Card;

/// Cursor movement directions on the card grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Column/row delta for one step.
    pub fn offset(&self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(TICK_MS, 1000);
        assert_eq!(DEFAULT_FLIP_DELAY_MS, 2500);
        assert!(DEFAULT_PAIR_COUNT <= MAX_PAIR_COUNT);
    }

    #[test]
    fn only_playing_is_running() {
        assert!(GameStatus::Playing.is_running());
        assert!(!GameStatus::Idle.is_running());
        assert!(!GameStatus::Paused.is_running());
        assert!(!GameStatus::Completed.is_running());
        assert_eq!(GameStatus::Completed.as_str(), "completed");
    }

    #[test]
    fn grid_is_square_ish() {
        assert_eq!(grid_columns(0), 1);
        assert_eq!(grid_columns(2), 2);
        assert_eq!(grid_columns(16), 4);
        assert_eq!(grid_columns(10), 4);
        assert_eq!(grid_columns(36), 6);
        assert_eq!(grid_columns(64), 8);
    }

    #[test]
    fn direction_offsets() {
        assert_eq!(Direction::Up.offset(), (0, -1));
        assert_eq!(Direction::Right.offset(), (1, 0));
    }
}
