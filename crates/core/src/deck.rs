//! Deck module - paired card generation
//!
//! A deck holds `2 * pair_count` cards. Face values `1..=pair_count` each
//! appear exactly twice, dealt to positions in shuffled order.
//!
//! Decks are immutable and cheap to clone: every session copy shares the same
//! card slice, and a new deal always builds a new one.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rng::SimpleRng;
use crate::types::{Card, FaceValue, Position, MAX_PAIR_COUNT};

/// Why a card list is not a valid deck.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("deck has no cards")]
    Empty,
    #[error("deck has an odd number of cards ({0})")]
    OddLength(usize),
    #[error("deck has {0} pairs, more than the supported maximum")]
    TooManyPairs(usize),
    #[error("card at index {index} claims position {position}")]
    PositionMismatch { index: usize, position: Position },
    #[error("card at position {position} has face value {face_value} outside 1..={pair_count}")]
    FaceValueOutOfRange {
        position: Position,
        face_value: FaceValue,
        pair_count: u16,
    },
    #[error("face value {face_value} appears {count} times, expected 2")]
    NotPaired { face_value: FaceValue, count: usize },
}

/// Clamp a requested pair count to the supported range.
pub fn clamp_pair_count(pair_count: u16) -> u16 {
    pair_count.clamp(1, MAX_PAIR_COUNT)
}

/// Generate a freshly shuffled deck.
///
/// `pair_count` is clamped to `1..=MAX_PAIR_COUNT`.
pub fn generate_deck(pair_count: u16, rng: &mut SimpleRng) -> Deck {
    Deck::generate(pair_count, rng)
}

/// An ordered, immutable sequence of paired cards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Card>", try_from = "Vec<Card>")]
pub struct Deck {
    cards: Arc<[Card]>,
}

impl Deck {
    /// Deal `2 * pair_count` cards in shuffled order.
    pub fn generate(pair_count: u16, rng: &mut SimpleRng) -> Self {
        let pair_count = clamp_pair_count(pair_count);

        let mut faces: Vec<FaceValue> = (1..=pair_count).chain(1..=pair_count).collect();
        rng.shuffle(&mut faces);

        let cards = faces
            .into_iter()
            .enumerate()
            .map(|(position, face_value)| Card::new(position, face_value))
            .collect();

        Self { cards }
    }

    /// Build a deck from face values in position order.
    ///
    /// Useful for laying out a known grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_memory_core::Deck;
    ///
    /// let deck = Deck::from_face_values(&[1, 2, 2, 1]).unwrap();
    /// assert_eq!(deck.pair_count(), 2);
    /// assert_eq!(deck.face_value(3), Some(1));
    ///
    /// assert!(Deck::from_face_values(&[1, 1, 1, 1]).is_err());
    /// ```
    pub fn from_face_values(faces: &[FaceValue]) -> Result<Self, DeckError> {
        let cards = faces
            .iter()
            .enumerate()
            .map(|(position, &face_value)| Card::new(position, face_value))
            .collect();
        Self::from_cards(cards)
    }

    /// Validate a card list and wrap it as a deck.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.is_empty() {
            return Err(DeckError::Empty);
        }
        if cards.len() % 2 != 0 {
            return Err(DeckError::OddLength(cards.len()));
        }

        let pairs = cards.len() / 2;
        if pairs > MAX_PAIR_COUNT as usize {
            return Err(DeckError::TooManyPairs(pairs));
        }
        let pair_count = pairs as u16;

        let mut counts = vec![0usize; pairs];
        for (index, card) in cards.iter().enumerate() {
            if card.position != index {
                return Err(DeckError::PositionMismatch {
                    index,
                    position: card.position,
                });
            }
            if card.face_value == 0 || card.face_value > pair_count {
                return Err(DeckError::FaceValueOutOfRange {
                    position: card.position,
                    face_value: card.face_value,
                    pair_count,
                });
            }
            counts[(card.face_value - 1) as usize] += 1;
        }

        if let Some((i, &count)) = counts.iter().enumerate().find(|(_, c)| **c != 2) {
            return Err(DeckError::NotPaired {
                face_value: (i + 1) as FaceValue,
                count,
            });
        }

        Ok(Self {
            cards: cards.into(),
        })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn pair_count(&self) -> u16 {
        (self.cards.len() / 2) as u16
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn get(&self, position: Position) -> Option<Card> {
        self.cards.get(position).copied()
    }

    pub fn face_value(&self, position: Position) -> Option<FaceValue> {
        self.get(position).map(|c| c.face_value)
    }

    /// Whether two decks share the same underlying deal (not just equal cards).
    pub fn same_deal(&self, other: &Deck) -> bool {
        Arc::ptr_eq(&self.cards, &other.cards)
    }
}

impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.cards.to_vec()
    }
}

impl TryFrom<Vec<Card>> for Deck {
    type Error = DeckError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::from_cards(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face_counts(deck: &Deck) -> Vec<usize> {
        let mut counts = vec![0usize; deck.pair_count() as usize];
        for card in deck.iter() {
            counts[(card.face_value - 1) as usize] += 1;
        }
        counts
    }

    #[test]
    fn generated_deck_pairs_every_face_value() {
        let mut rng = SimpleRng::new(42);
        for pair_count in 1..=MAX_PAIR_COUNT {
            let deck = generate_deck(pair_count, &mut rng);
            assert_eq!(deck.len(), 2 * pair_count as usize);
            assert!(face_counts(&deck).iter().all(|&c| c == 2));
            for (i, card) in deck.iter().enumerate() {
                assert_eq!(card.position, i);
            }
        }
    }

    #[test]
    fn pair_count_is_clamped() {
        let mut rng = SimpleRng::new(1);
        assert_eq!(generate_deck(0, &mut rng).pair_count(), 1);
        assert_eq!(
            generate_deck(MAX_PAIR_COUNT + 10, &mut rng).pair_count(),
            MAX_PAIR_COUNT
        );
    }

    #[test]
    fn same_seed_deals_same_deck() {
        let a = generate_deck(8, &mut SimpleRng::new(5));
        let b = generate_deck(8, &mut SimpleRng::new(5));
        assert_eq!(a, b);
        assert!(!a.same_deal(&b));
        assert!(a.same_deal(&a.clone()));
    }

    #[test]
    fn consecutive_deals_differ() {
        let mut rng = SimpleRng::new(5);
        let a = generate_deck(8, &mut rng);
        let b = generate_deck(8, &mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn from_cards_rejects_malformed_decks() {
        assert_eq!(Deck::from_face_values(&[]), Err(DeckError::Empty));
        assert_eq!(
            Deck::from_face_values(&[1, 1, 2]),
            Err(DeckError::OddLength(3))
        );
        assert_eq!(
            Deck::from_face_values(&[1, 3, 1, 3]),
            Err(DeckError::FaceValueOutOfRange {
                position: 1,
                face_value: 3,
                pair_count: 2
            })
        );
        assert_eq!(
            Deck::from_face_values(&[1, 1, 1, 2]),
            Err(DeckError::NotPaired {
                face_value: 1,
                count: 3
            })
        );
        assert_eq!(
            Deck::from_cards(vec![Card::new(1, 1), Card::new(0, 1)]),
            Err(DeckError::PositionMismatch {
                index: 0,
                position: 1
            })
        );
    }

    #[test]
    fn deck_json_is_validated_on_read() {
        let deck = Deck::from_face_values(&[1, 1]).unwrap();
        let json = serde_json::to_string(&deck).unwrap();
        assert_eq!(
            json,
            r#"[{"position":0,"faceValue":1},{"position":1,"faceValue":1}]"#
        );
        assert_eq!(serde_json::from_str::<Deck>(&json).unwrap(), deck);

        let bad = r#"[{"position":0,"faceValue":1},{"position":1,"faceValue":2}]"#;
        assert!(serde_json::from_str::<Deck>(bad).is_err());
    }
}
