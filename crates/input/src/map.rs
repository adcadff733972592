//! Key mapping from terminal events to front-end commands.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the front end to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Move the grid cursor one card
    MoveCursor(Direction),
    /// Reveal the card under the cursor
    FlipAtCursor,
    /// Start, pause or resume
    ToggleRunning,
    /// Deal a new game
    Restart,
}

impl InputAction {
    /// Resolve into an engine action, given the card under the cursor.
    ///
    /// Cursor movement stays in the front end and yields `None`.
    pub fn into_game_action(self, cursor: usize) -> Option<GameAction> {
        match self {
            InputAction::MoveCursor(_) => None,
            InputAction::FlipAtCursor => Some(GameAction::Flip(cursor)),
            InputAction::ToggleRunning => Some(GameAction::ToggleRunning),
            InputAction::Restart => Some(GameAction::Restart),
        }
    }
}

/// Map keyboard input to front-end commands.
pub fn handle_key_event(key: KeyEvent) -> Option<InputAction> {
    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(InputAction::MoveCursor(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(InputAction::MoveCursor(Direction::Right))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(InputAction::MoveCursor(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(InputAction::MoveCursor(Direction::Down))
        }

        // Reveal
        KeyCode::Char(' ') | KeyCode::Enter => Some(InputAction::FlipAtCursor),

        // Lifecycle
        KeyCode::Char('p') | KeyCode::Char('P') => Some(InputAction::ToggleRunning),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
