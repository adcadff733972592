//! Session module - the game state machine
//!
//! A [`Session`] is one play-through: the dealt deck, the lifecycle status,
//! the pending pair, matched face values and the move/score/time counters.
//!
//! Every action takes `&self` and returns a new session. Nothing is mutated in
//! place, so a caller holding the previous value can compare it against the
//! next one. The deck is shared between copies and is only ever replaced
//! wholesale by a new deal.
//!
//! Time never comes from the system clock here. Clicks and ticks receive the
//! current instant from the caller.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use arrayvec::ArrayVec;

use crate::deck::Deck;
use crate::rng::SimpleRng;
use crate::snapshot::SessionSnapshot;
use crate::types::*;

/// One play-through of the memory game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    deck: Deck,
    status: GameStatus,
    /// The pending pair: face-up cards awaiting (or showing) an evaluation.
    flipped: ArrayVec<FlippedCard, 2>,
    matched: BTreeSet<FaceValue>,
    /// Completed pair evaluations, matched or not.
    moves: u32,
    /// Successful matches.
    score: u32,
    elapsed_seconds: u32,
    /// When the second card of the pending pair was flipped.
    last_flip_at: Option<Instant>,
    flip_delay: Duration,
    /// Source for the next deal.
    rng: SimpleRng,
}

impl Session {
    /// Create an idle session with a randomly seeded deal
    pub fn new(pair_count: u16) -> Self {
        Self::with_rng(pair_count, SimpleRng::from_entropy())
    }

    /// Create an idle session with a deterministic deal
    pub fn with_seed(pair_count: u16, seed: u64) -> Self {
        Self::with_rng(pair_count, SimpleRng::new(seed))
    }

    fn with_rng(pair_count: u16, mut rng: SimpleRng) -> Self {
        let deck = Deck::generate(pair_count, &mut rng);
        Self::idle(deck, rng)
    }

    /// Create an idle session around an existing deck.
    ///
    /// Later deals (restart, or starting after completion) are random.
    pub fn from_deck(deck: Deck) -> Self {
        Self::idle(deck, SimpleRng::from_entropy())
    }

    fn idle(deck: Deck, rng: SimpleRng) -> Self {
        Self {
            deck,
            status: GameStatus::Idle,
            flipped: ArrayVec::new(),
            matched: BTreeSet::new(),
            moves: 0,
            score: 0,
            elapsed_seconds: 0,
            last_flip_at: None,
            flip_delay: Duration::from_millis(DEFAULT_FLIP_DELAY_MS as u64),
            rng,
        }
    }

    /// Use a different auto-unflip delay. Kept across restarts.
    pub fn with_flip_delay(mut self, flip_delay: Duration) -> Self {
        self.flip_delay = flip_delay;
        self
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn flipped(&self) -> &[FlippedCard] {
        &self.flipped
    }

    pub fn matched(&self) -> &BTreeSet<FaceValue> {
        &self.matched
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn last_flip_at(&self) -> Option<Instant> {
        self.last_flip_at
    }

    pub fn flip_delay(&self) -> Duration {
        self.flip_delay
    }

    pub fn pair_count(&self) -> u16 {
        self.deck.pair_count()
    }

    pub fn all_pairs_matched(&self) -> bool {
        self.matched.len() == self.pair_count() as usize
    }

    /// Whether the card at `position` is part of a matched pair.
    pub fn is_matched(&self, position: Position) -> bool {
        self.deck
            .face_value(position)
            .is_some_and(|face| self.matched.contains(&face))
    }

    /// Whether the card at `position` is currently shown face-up.
    pub fn is_face_up(&self, position: Position) -> bool {
        self.flipped.iter().any(|c| c.position == position) || self.is_matched(position)
    }

    /// Reveal the card at `position`.
    ///
    /// Ignored unless playing, when the position is off the grid, already
    /// face-up in the pending pair, or already matched. A third click clears the
    /// previous pair (whatever its outcome) before revealing the new card.
    pub fn handle_card_click(&self, position: Position, now: Instant) -> Session {
        if !self.status.is_running() {
            return self.clone();
        }

        let Some(card) = self.deck.get(position) else {
            tracing::warn!(
                position,
                deck_len = self.deck.len(),
                "ignoring click outside the grid"
            );
            return self.clone();
        };

        // Exclusion is checked before anything counts toward `moves`.
        if self.flipped.iter().any(|c| c.position == position)
            || self.matched.contains(&card.face_value)
        {
            return self.clone();
        }

        let mut next = self.clone();
        if next.flipped.is_full() {
            next.flipped.clear();
            next.last_flip_at = None;
        }
        next.flipped.push(card);

        let pair = match next.flipped.as_slice() {
            [first, second] => Some((*first, *second)),
            _ => None,
        };

        if let Some((first, second)) = pair {
            next.moves += 1;

            if first.face_value == second.face_value {
                next.score += 1;
                next.matched.insert(first.face_value);
                tracing::debug!(
                    face_value = first.face_value,
                    moves = next.moves,
                    "pair matched"
                );

                if next.all_pairs_matched() {
                    next.status = GameStatus::Completed;
                    tracing::info!(
                        moves = next.moves,
                        elapsed_seconds = next.elapsed_seconds,
                        "all pairs matched"
                    );
                }
            } else {
                tracing::debug!(
                    first = first.position,
                    second = second.position,
                    moves = next.moves,
                    "pair mismatched"
                );
            }

            // Starts the auto-unflip countdown.
            next.last_flip_at = Some(now);
        } else {
            next.last_flip_at = None;
        }

        next
    }

    /// Advance the clock by one tick (one second).
    ///
    /// Once every pair is matched this only pins the status to `Completed`.
    /// Otherwise it adds a second while playing and turns a pending pair back
    /// over once it has been shown for longer than the flip delay.
    pub fn tick(&self, now: Instant) -> Session {
        let mut next = self.clone();

        if self.all_pairs_matched() || self.status == GameStatus::Completed {
            next.status = GameStatus::Completed;
            return next;
        }

        if self.status.is_running() {
            next.elapsed_seconds += 1;
        }

        if let (true, Some(flipped_at)) = (next.flipped.is_full(), next.last_flip_at) {
            if now.saturating_duration_since(flipped_at) > next.flip_delay {
                next.flipped.clear();
                next.last_flip_at = None;
            }
        }

        next
    }

    /// Start, pause or resume.
    ///
    /// Starting a completed session deals a new game.
    pub fn toggle_running(&self) -> Session {
        match self.status {
            GameStatus::Completed => self.deal_new_game(),
            GameStatus::Playing => Session {
                status: GameStatus::Paused,
                ..self.clone()
            },
            GameStatus::Idle | GameStatus::Paused => Session {
                status: GameStatus::Playing,
                ..self.clone()
            },
        }
    }

    /// Deal a new game and start playing immediately.
    pub fn restart(&self) -> Session {
        self.deal_new_game()
    }

    /// Apply a presentation action.
    pub fn apply_action(&self, action: GameAction, now: Instant) -> Session {
        match action {
            GameAction::Flip(position) => self.handle_card_click(position, now),
            GameAction::ToggleRunning => self.toggle_running(),
            GameAction::Restart => self.restart(),
        }
    }

    fn deal_new_game(&self) -> Session {
        let mut rng = self.rng.clone();
        let deck = Deck::generate(self.pair_count(), &mut rng);
        tracing::info!(pair_count = deck.pair_count(), "dealt new game");

        Session {
            status: GameStatus::Playing,
            flip_delay: self.flip_delay,
            ..Self::idle(deck, rng)
        }
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.status = self.status;
        out.moves = self.moves;
        out.score = self.score;
        out.elapsed_seconds = self.elapsed_seconds;

        out.deck.clear();
        out.deck.extend_from_slice(self.deck.cards());

        out.flipped_positions.clear();
        out.flipped_positions
            .extend(self.flipped.iter().map(|c| c.position));

        out.matched_face_values.clear();
        out.matched_face_values.extend(self.matched.iter().copied());
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
