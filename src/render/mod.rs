//! Renderer capability.
//!
//! The engine pushes a projection of its state to a `Renderer` and never
//! reads anything back. Hosts implement the trait for their display
//! technology; the crate ships three implementations:
//!
//! - [`NullRenderer`]: discards everything
//! - [`RecordingRenderer`]: keeps every command, for tests and bindings
//! - [`TextRenderer`]: a plain-text board for terminals

mod recording;
mod text;

pub use recording::{NullRenderer, RecordingRenderer, RenderCommand};
pub use text::TextRenderer;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Card, CardFace, CardPosition};

/// Direction of a flip animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlipDirection {
    /// Face down to face up.
    Reveal,
    /// Face up back to face down.
    Conceal,
}

/// Board projection handed to `render_board`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub rows: u32,
    pub columns: u32,
    cards: Vector<Card>,
}

impl BoardView {
    #[must_use]
    pub fn new(rows: u32, columns: u32, cards: Vector<Card>) -> Self {
        Self { rows, columns, cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Face of the card at `position`.
    #[must_use]
    pub fn face(&self, position: CardPosition) -> Option<CardFace> {
        self.cards.get(position.index()).map(|c| c.face)
    }

    /// Pair-value at `position`, if that card is face up.
    #[must_use]
    pub fn visible_value(&self, position: CardPosition) -> Option<u16> {
        self.cards.get(position.index()).and_then(Card::visible_value)
    }

    /// Every card with its position, in board order.
    pub fn entries(&self) -> impl Iterator<Item = (CardPosition, &Card)> {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, card)| (CardPosition(i as u32), card))
    }
}

/// Terminal status shown when a session ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    pub won: bool,
    pub moves: u32,
}

impl StatusReport {
    /// Message for the status window.
    #[must_use]
    pub fn message(&self) -> String {
        if self.won {
            format!("Congratulations! You won in {} moves.", self.moves)
        } else {
            "The time has run out!".to_string()
        }
    }

    /// Label for the control that triggers `reset()`.
    #[must_use]
    pub fn action_label(&self) -> &'static str {
        "Play Again"
    }
}

/// Format remaining seconds as `M:SS` (minutes unpadded).
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Display capability consumed by the engine.
pub trait Renderer {
    /// Draw the full board.
    fn render_board(&mut self, board: &BoardView);

    /// Show the remaining time, already formatted.
    fn render_timer(&mut self, formatted: &str);

    /// Show the end-of-session status with a reset control.
    fn render_status(&mut self, status: &StatusReport);

    /// Remove the board and any status window.
    fn clear_board(&mut self);

    /// Animate a single card turning over.
    fn animate_flip(&mut self, _position: CardPosition, _direction: FlipDirection) {}

    /// Remove the timer display.
    fn clear_timer(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(9), "0:09");
        assert_eq!(format_clock(60), "1:00");
        assert_eq!(format_clock(66), "1:06");
        assert_eq!(format_clock(600), "10:00");
        assert_eq!(format_clock(3599), "59:59");
    }

    #[test]
    fn test_status_messages() {
        let won = StatusReport { won: true, moves: 7 };
        assert_eq!(won.message(), "Congratulations! You won in 7 moves.");
        assert_eq!(won.action_label(), "Play Again");

        let lost = StatusReport { won: false, moves: 3 };
        assert_eq!(lost.message(), "The time has run out!");
    }

    #[test]
    fn test_board_view_hides_values() {
        let cards: Vector<Card> = vec![
            Card::hidden(1),
            Card { value: 1, face: CardFace::Flipped },
            Card { value: 2, face: CardFace::Matched },
            Card::hidden(2),
        ]
        .into_iter()
        .collect();
        let view = BoardView::new(2, 2, cards);

        assert_eq!(view.len(), 4);
        assert_eq!(view.visible_value(CardPosition::new(0)), None);
        assert_eq!(view.visible_value(CardPosition::new(1)), Some(1));
        assert_eq!(view.visible_value(CardPosition::new(2)), Some(2));
        assert_eq!(view.face(CardPosition::new(3)), Some(CardFace::Hidden));
        assert_eq!(view.face(CardPosition::new(4)), None);

        let positions: Vec<_> = view.entries().map(|(p, _)| p.0).collect();
        assert_eq!(positions, vec![0, 1, 2, 3]);
    }
}
