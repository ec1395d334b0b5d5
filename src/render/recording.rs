//! Renderers that keep or drop commands instead of drawing.

use serde::{Deserialize, Serialize};

use super::{BoardView, FlipDirection, Renderer, StatusReport};
use crate::core::CardPosition;

/// A single renderer call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderCommand {
    Board(BoardView),
    Timer(String),
    Status(StatusReport),
    ClearBoard,
    Flip(CardPosition, FlipDirection),
    ClearTimer,
}

/// Discards every command.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render_board(&mut self, _board: &BoardView) {}
    fn render_timer(&mut self, _formatted: &str) {}
    fn render_status(&mut self, _status: &StatusReport) {}
    fn clear_board(&mut self) {}
}

/// Records every command in call order.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    commands: Vec<RenderCommand>,
}

impl RecordingRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands received so far.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the log empty.
    pub fn drain(&mut self) -> Vec<RenderCommand> {
        std::mem::take(&mut self.commands)
    }

    /// The most recently rendered board.
    #[must_use]
    pub fn last_board(&self) -> Option<&BoardView> {
        self.commands.iter().rev().find_map(|c| match c {
            RenderCommand::Board(board) => Some(board),
            _ => None,
        })
    }

    /// The most recently rendered timer text.
    #[must_use]
    pub fn last_timer(&self) -> Option<&str> {
        self.commands.iter().rev().find_map(|c| match c {
            RenderCommand::Timer(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// The most recently rendered status.
    #[must_use]
    pub fn last_status(&self) -> Option<&StatusReport> {
        self.commands.iter().rev().find_map(|c| match c {
            RenderCommand::Status(status) => Some(status),
            _ => None,
        })
    }

    /// Number of flip animations in `direction`.
    #[must_use]
    pub fn flip_count(&self, direction: FlipDirection) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::Flip(_, d) if *d == direction))
            .count()
    }
}

impl Renderer for RecordingRenderer {
    fn render_board(&mut self, board: &BoardView) {
        self.commands.push(RenderCommand::Board(board.clone()));
    }

    fn render_timer(&mut self, formatted: &str) {
        self.commands.push(RenderCommand::Timer(formatted.to_string()));
    }

    fn render_status(&mut self, status: &StatusReport) {
        self.commands.push(RenderCommand::Status(*status));
    }

    fn clear_board(&mut self) {
        self.commands.push(RenderCommand::ClearBoard);
    }

    fn animate_flip(&mut self, position: CardPosition, direction: FlipDirection) {
        self.commands.push(RenderCommand::Flip(position, direction));
    }

    fn clear_timer(&mut self) {
        self.commands.push(RenderCommand::ClearTimer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Card;

    #[test]
    fn test_recording_order() {
        let mut renderer = RecordingRenderer::new();
        let board = BoardView::new(2, 2, (1..=2).chain(1..=2).map(Card::hidden).collect());

        renderer.clear_board();
        renderer.render_board(&board);
        renderer.render_timer("0:10");
        renderer.animate_flip(CardPosition::new(1), FlipDirection::Reveal);
        renderer.render_timer("0:09");

        assert_eq!(renderer.commands().len(), 5);
        assert_eq!(renderer.commands()[0], RenderCommand::ClearBoard);
        assert_eq!(renderer.last_board(), Some(&board));
        assert_eq!(renderer.last_timer(), Some("0:09"));
        assert_eq!(renderer.last_status(), None);
        assert_eq!(renderer.flip_count(FlipDirection::Reveal), 1);
        assert_eq!(renderer.flip_count(FlipDirection::Conceal), 0);
    }

    #[test]
    fn test_drain() {
        let mut renderer = RecordingRenderer::new();
        renderer.render_status(&StatusReport { won: false, moves: 0 });

        let drained = renderer.drain();
        assert_eq!(drained.len(), 1);
        assert!(renderer.commands().is_empty());
    }
}
