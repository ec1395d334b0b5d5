//! Plain-text board for terminal hosts.

use super::{BoardView, Renderer, StatusReport};
use crate::core::CardFace;

/// Keeps the latest board, timer and status as text.
///
/// ```text
///  ?  ?  3  ?
/// *1 *1  ?  3
/// 0:42
/// ```
#[derive(Clone, Debug, Default)]
pub struct TextRenderer {
    board: Vec<String>,
    timer: Option<String>,
    status: Option<String>,
}

impl TextRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Board rows, one string per row.
    #[must_use]
    pub fn board_lines(&self) -> &[String] {
        &self.board
    }

    #[must_use]
    pub fn timer(&self) -> Option<&str> {
        self.timer.as_deref()
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// The whole screen: board, then timer, then status.
    #[must_use]
    pub fn screen(&self) -> String {
        let mut lines = self.board.clone();
        lines.extend(self.timer.clone());
        lines.extend(self.status.clone());
        lines.join("\n")
    }

    fn cell(face: CardFace, value: u16, width: usize) -> String {
        match face {
            CardFace::Hidden => format!("{:>width$}", "?"),
            CardFace::Flipped => format!("{:>width$}", value),
            CardFace::Matched => format!("{:>width$}", format!("*{}", value)),
        }
    }
}

impl Renderer for TextRenderer {
    fn render_board(&mut self, board: &BoardView) {
        let columns = board.columns.max(1) as usize;
        let widest = board.entries().map(|(_, c)| c.value).max().unwrap_or(0);
        let width = widest.to_string().len() + 2;

        let cells: Vec<String> = board
            .entries()
            .map(|(_, card)| Self::cell(card.face, card.value, width))
            .collect();

        self.board = cells.chunks(columns).map(|row| row.concat()).collect();
    }

    fn render_timer(&mut self, formatted: &str) {
        self.timer = Some(formatted.to_string());
    }

    fn render_status(&mut self, status: &StatusReport) {
        self.status = Some(format!("{} [{}]", status.message(), status.action_label()));
    }

    fn clear_board(&mut self) {
        self.board.clear();
        self.status = None;
    }

    fn clear_timer(&mut self) {
        self.timer = None;
    }
}
