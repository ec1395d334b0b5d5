//! The shuffled card sequence.
//!
//! A deck of `pair_count` pairs holds the values `1..=pair_count` each
//! exactly twice. It is stored as an `im::Vector` so handing the board to a
//! renderer is an O(1) clone.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardFace, CardPosition};
use super::rng::GameRng;

/// Ordered sequence of cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Build the pair sequence and shuffle it.
    #[must_use]
    pub fn shuffled(pair_count: u16, rng: &mut GameRng) -> Self {
        let mut values: Vec<u16> = (1..=pair_count).chain(1..=pair_count).collect();
        rng.shuffle(&mut values);
        Self {
            cards: values.into_iter().map(Card::hidden).collect(),
        }
    }

    /// Build a deck from explicit values, all hidden.
    ///
    /// Does not check the pairing; used to set up known boards.
    #[must_use]
    pub fn from_values(values: &[u16]) -> Self {
        Self {
            cards: values.iter().copied().map(Card::hidden).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get the card at a position.
    #[must_use]
    pub fn get(&self, position: CardPosition) -> Option<&Card> {
        self.cards.get(position.index())
    }

    /// Set the face of the card at a position.
    ///
    /// Returns `false` if the position is out of range.
    pub fn set_face(&mut self, position: CardPosition, face: CardFace) -> bool {
        match self.cards.get_mut(position.index()) {
            Some(card) => {
                card.face = face;
                true
            }
            None => false,
        }
    }

    /// Turn every card face down.
    pub fn hide_all(&mut self) {
        for card in self.cards.iter_mut() {
            card.face = CardFace::Hidden;
        }
    }

    /// Iterate over cards in position order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Pair-values in position order.
    #[must_use]
    pub fn values(&self) -> Vec<u16> {
        self.cards.iter().map(|c| c.value).collect()
    }

    /// The two positions holding `value`, in position order.
    #[must_use]
    pub fn pair_positions(&self, value: u16) -> Option<(CardPosition, CardPosition)> {
        let mut found = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.value == value)
            .map(|(i, _)| CardPosition(i as u32));

        let first = found.next()?;
        let second = found.next()?;
        Some((first, second))
    }

    /// Cheap clone of the underlying cards.
    #[must_use]
    pub fn cards(&self) -> Vector<Card> {
        self.cards.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(deck: &Deck) -> Vec<u16> {
        let mut values = deck.values();
        values.sort_unstable();
        values
    }

    #[test]
    fn test_shuffled_keeps_pairs() {
        let mut rng = GameRng::new(42);
        let deck = Deck::shuffled(6, &mut rng);

        assert_eq!(deck.len(), 12);
        assert_eq!(sorted(&deck), vec![1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6]);
    }

    #[test]
    fn test_shuffled_is_deterministic() {
        let a = Deck::shuffled(8, &mut GameRng::new(9));
        let b = Deck::shuffled(8, &mut GameRng::new(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_pair_positions() {
        let deck = Deck::from_values(&[2, 1, 1, 2]);
        assert_eq!(
            deck.pair_positions(1),
            Some((CardPosition::new(1), CardPosition::new(2)))
        );
        assert_eq!(
            deck.pair_positions(2),
            Some((CardPosition::new(0), CardPosition::new(3)))
        );
        assert_eq!(deck.pair_positions(3), None);
    }

    #[test]
    fn test_set_face_and_hide_all() {
        let mut deck = Deck::from_values(&[1, 1, 2, 2]);

        assert!(deck.set_face(CardPosition::new(0), CardFace::Matched));
        assert!(deck.set_face(CardPosition::new(2), CardFace::Flipped));
        assert!(!deck.set_face(CardPosition::new(4), CardFace::Flipped));

        assert!(deck.get(CardPosition::new(0)).unwrap().is_matched());
        assert!(deck.get(CardPosition::new(2)).unwrap().is_flipped());

        deck.hide_all();
        assert!(deck.iter().all(Card::is_hidden));
    }

    #[test]
    fn test_cards_clone_is_independent() {
        let mut deck = Deck::from_values(&[1, 1]);
        let snapshot = deck.cards();

        deck.set_face(CardPosition::new(0), CardFace::Flipped);

        assert!(snapshot[0].is_hidden());
        assert!(deck.get(CardPosition::new(0)).unwrap().is_flipped());
    }
}
