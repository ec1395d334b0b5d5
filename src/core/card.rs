//! Cards on the board.
//!
//! A card is a pair-value plus its current face. Two cards share each
//! pair-value; a card's identity is its position in the deck, not its value.

use serde::{Deserialize, Serialize};

/// Position of a card in the deck (row-major board order).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardPosition(pub u32);

impl CardPosition {
    /// Create a position from a raw index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the position as a slice index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Visual state of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardFace {
    /// Face down.
    #[default]
    Hidden,
    /// Face up and part of an unresolved pair attempt.
    Flipped,
    /// Resolved; stays face up for the rest of the session.
    Matched,
}

/// A single card: pair-value and face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Pair-value in `1..=pair_count`.
    pub value: u16,

    /// Current visual state.
    pub face: CardFace,
}

impl Card {
    /// Create a hidden card with the given pair-value.
    #[must_use]
    pub const fn hidden(value: u16) -> Self {
        Self {
            value,
            face: CardFace::Hidden,
        }
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.face == CardFace::Hidden
    }

    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.face == CardFace::Flipped
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.face == CardFace::Matched
    }

    /// The pair-value, if the card is face up.
    #[must_use]
    pub fn visible_value(&self) -> Option<u16> {
        match self.face {
            CardFace::Hidden => None,
            CardFace::Flipped | CardFace::Matched => Some(self.value),
        }
    }
}
