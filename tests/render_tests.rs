//! Rendering projection tests.
//!
//! Verify what the engine pushes to renderers over a session, and that
//! session snapshots serialize.

use match_grid::clock::VirtualClock;
use match_grid::core::{CardFace, GridConfig, Phase};
use match_grid::engine::{MatchGrid, SessionSnapshot};
use match_grid::render::{FlipDirection, RecordingRenderer, RenderCommand, TextRenderer};

/// Hidden values never reach the renderer.
#[test]
fn test_board_projection_hides_values() {
    let config = GridConfig::new(2, 3, 30);
    let mut grid = MatchGrid::new(config, RecordingRenderer::new(), VirtualClock::new(), 8).unwrap();
    grid.start().unwrap();

    let board = grid.renderer().last_board().unwrap().clone();
    assert_eq!(board.rows, 2);
    assert_eq!(board.columns, 3);
    assert!(board.entries().all(|(p, _)| board.visible_value(p).is_none()));

    let (a, _) = grid.deck().pair_positions(2).unwrap();
    grid.flip(a).unwrap();

    let board = grid.renderer().last_board().unwrap();
    assert_eq!(board.visible_value(a), Some(2));
    assert_eq!(board.face(a), Some(CardFace::Flipped));
    assert_eq!(
        board.entries().filter(|(p, _)| board.visible_value(*p).is_some()).count(),
        1
    );
}

/// Command order over a short session.
#[test]
fn test_command_sequence() {
    let config = GridConfig::new(2, 2, 1);
    let mut grid = MatchGrid::new(config, RecordingRenderer::new(), VirtualClock::new(), 1).unwrap();
    grid.start().unwrap();

    let (a, _) = grid.deck().pair_positions(1).unwrap();
    grid.flip(a).unwrap();
    grid.advance(1000);

    let kinds: Vec<&'static str> = grid
        .renderer()
        .commands()
        .iter()
        .map(|c| match c {
            RenderCommand::ClearBoard => "clear_board",
            RenderCommand::Board(_) => "board",
            RenderCommand::Timer(_) => "timer",
            RenderCommand::Flip(_, FlipDirection::Reveal) => "reveal",
            RenderCommand::Flip(_, FlipDirection::Conceal) => "conceal",
            RenderCommand::ClearTimer => "clear_timer",
            RenderCommand::Status(_) => "status",
        })
        .collect();

    assert_eq!(
        kinds,
        vec![
            "clear_board",
            "board",
            "timer",
            "reveal",
            "board",
            "timer",
            "clear_timer",
            "status"
        ]
    );
    assert_eq!(grid.renderer().last_timer(), Some("0:00"));
}

/// A text host sees the board, the countdown and the final status.
#[test]
fn test_text_renderer_session() {
    let config = GridConfig::from_json(r#"{ "anchor": "term", "rows": 2, "columns": 2, "time_limit": 75 }"#)
        .unwrap();
    let mut grid = MatchGrid::new(config, TextRenderer::new(), VirtualClock::new(), 4).unwrap();
    grid.start().unwrap();

    assert_eq!(grid.renderer().board_lines(), &["  ?  ?".to_string(), "  ?  ?".to_string()]);
    assert_eq!(grid.renderer().timer(), Some("1:15"));

    grid.advance(1000);
    assert_eq!(grid.renderer().timer(), Some("1:14"));

    for value in 1..=2 {
        let (a, b) = grid.deck().pair_positions(value).unwrap();
        grid.flip(a).unwrap();
        grid.flip(b).unwrap();
    }
    let screen = grid.renderer().screen();
    assert!(screen.contains("*1"));
    assert!(screen.contains("*2"));

    grid.advance(500);
    assert_eq!(grid.phase(), Phase::Won);
    assert_eq!(grid.renderer().timer(), None);
    assert_eq!(
        grid.renderer().status(),
        Some("Congratulations! You won in 2 moves. [Play Again]")
    );

    grid.reset().unwrap();
    assert_eq!(grid.renderer().status(), None);
    assert_eq!(grid.renderer().timer(), Some("1:15"));
}

/// Snapshots round-trip through JSON and hide face-down values.
#[test]
fn test_snapshot_serde() {
    let config = GridConfig::new(2, 2, 10);
    let mut grid = MatchGrid::new(config, RecordingRenderer::new(), VirtualClock::new(), 42).unwrap();
    grid.start().unwrap();
    let (a, _) = grid.deck().pair_positions(1).unwrap();
    grid.flip(a).unwrap();
    grid.set_paused(true);

    let snapshot = grid.snapshot();
    assert_eq!(snapshot.phase, Phase::Playing);
    assert!(snapshot.paused);
    assert_eq!(snapshot.faces.iter().filter(|f| **f == CardFace::Flipped).count(), 1);
    assert_eq!(snapshot.visible_values.iter().flatten().count(), 1);
    assert_eq!(snapshot.visible_values[a.index()], Some(1));

    let json = serde_json::to_string(&snapshot).unwrap();
    let back: SessionSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(snapshot, back);
}
