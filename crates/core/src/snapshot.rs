use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::time::format_time;
use crate::types::{Card, FaceValue, GameStatus, Position};

/// Read-only view of a session, handed to presentation every frame.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub status: GameStatus,
    pub moves: u32,
    pub score: u32,
    pub elapsed_seconds: u32,
    pub deck: Vec<Card>,
    pub flipped_positions: ArrayVec<Position, 2>,
    /// Ascending when taken from a session.
    pub matched_face_values: Vec<FaceValue>,
}

impl SessionSnapshot {
    pub fn clear(&mut self) {
        self.status = GameStatus::Idle;
        self.moves = 0;
        self.score = 0;
        self.elapsed_seconds = 0;
        self.deck.clear();
        self.flipped_positions.clear();
        self.matched_face_values.clear();
    }

    pub fn pair_count(&self) -> usize {
        self.deck.len() / 2
    }

    pub fn card(&self, position: Position) -> Option<Card> {
        self.deck.get(position).copied()
    }

    /// Works in any order, so snapshots read back from JSON need no sorting.
    pub fn is_matched(&self, position: Position) -> bool {
        self.card(position)
            .is_some_and(|c| self.matched_face_values.contains(&c.face_value))
    }

    pub fn is_pending(&self, position: Position) -> bool {
        self.flipped_positions.contains(&position)
    }

    pub fn is_face_up(&self, position: Position) -> bool {
        self.is_pending(position) || self.is_matched(position)
    }

    pub fn formatted_time(&self) -> String {
        format_time(self.elapsed_seconds)
    }

    pub fn playable(&self) -> bool {
        self.status.is_running()
    }
}
