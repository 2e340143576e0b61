use tui_blockfall::core::{GameConfig, GameSnapshot, GameState, Grid, PieceQueue};
use tui_blockfall::term::{AnchorY, FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_blockfall::types::{Cell, Color, Phase, ShapeKind};

fn all_text(fb: &FrameBuffer) -> String {
    (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(&GameConfig::default()).snapshot();
    let view = GameView::default();

    // cell_w=2, cell_h=1: 12x20 board => 24x20, plus border => 26x22
    let fb = view.render(&snap, Viewport::new(26, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(25, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(25, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameSnapshot::default();
    snap.cells[19 * 12] = Cell::Filled(Color::Coral);

    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(26, 22));

    // Inside border: (1,1) origin.
    let y0 = 1 + 19;
    for x in [1, 2] {
        let glyph = fb.get(x, y0).unwrap();
        assert_eq!(glyph.ch, '█');
        assert_eq!((glyph.style.fg.r, glyph.style.fg.g, glyph.style.fg.b), Color::Coral.rgb());
    }
    assert_eq!(fb.get(3, y0).unwrap().ch, '·');
}

#[test]
fn term_view_follows_board_size() {
    let config = GameConfig {
        width: 6,
        height: 8,
        ..GameConfig::default()
    };
    let snap = GameState::new(&config).snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);

    let fb = view.render(&snap, Viewport::new(14, 10));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(13, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(13, 9).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = GameState::new(&GameConfig::default()).snapshot();
    snap.score = 1200;
    snap.lines = 12;

    let view = GameView::default();
    let text = all_text(&view.render(&snap, Viewport::new(60, 22)));
    assert!(text.contains("SCORE"));
    assert!(text.contains("1200"));
    assert!(text.contains("LINES"));

    // No room for the panel.
    let narrow = all_text(&view.render(&snap, Viewport::new(26, 22)));
    assert!(!narrow.contains("SCORE"));
}

#[test]
fn term_view_game_over_overlay() {
    let mut grid = Grid::new(12, 20);
    grid.set(5, 0, Cell::Filled(Color::Pink));
    let state = GameState::with_grid(grid, PieceQueue::scripted(&[ShapeKind::O], 1));
    let snap = state.snapshot();
    assert_eq!(snap.phase, Phase::GameOver);
    assert!(snap.active.is_none());

    let text = all_text(&GameView::default().render(&snap, Viewport::new(60, 22)));
    assert!(text.contains("GAME OVER"));
}

#[test]
fn renderer_writes_to_any_writer() {
    let snap = GameState::new(&GameConfig::default()).snapshot();
    let view = GameView::default();
    let mut renderer = TerminalRenderer::with_writer(Vec::new());

    let mut fb = view.render(&snap, Viewport::new(40, 22));
    renderer.draw_swap(&mut fb).unwrap();
    let first = renderer.writer().len();

    // Same picture again only sends the reset sequence.
    view.render_into(&snap, Viewport::new(40, 22), &mut fb);
    renderer.draw_swap(&mut fb).unwrap();
    assert!(renderer.writer().len() - first < first / 10);
}
