use term_tetris::core::{Board, GameState, Tetromino};
use term_tetris::term::{
    AnchorY, AudioStatusView, FrameBuffer, GameView, Viewport, GAME_OVER_TEXT, PAUSED_TEXT,
};
use term_tetris::types::{PieceKind, Rgb, BOARD_HEIGHT};

const RED: Rgb = Rgb::new(255, 0, 0);

#[test]
fn term_view_renders_border_corners() {
    let state = GameState::new(1);
    let snap = state.snapshot();
    let view = GameView::default();

    // Cells are 2x1: board pixels 20x20, plus border 22x22.
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut board = Board::default();
    board.set(0, BOARD_HEIGHT as i32 - 1, Some(RED));
    let state = GameState::with_board(1, board);

    let fb = GameView::default().render(&state.snapshot(), Viewport::new(22, 22));

    // Inside the border the origin is (1, 1).
    let y = 1 + 19;
    for x in [1, 2] {
        let cell = fb.get(x, y).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, RED);
    }
    assert_eq!(fb.get(3, y).unwrap().ch, '·');
}

#[test]
fn term_view_scales_cells_on_large_viewports() {
    let mut board = Board::default();
    board.set(0, 0, Some(RED));
    let state = GameState::with_board(1, board);
    let view = GameView::default().with_anchor_y(AnchorY::Top);

    // 44 rows and 42 board columns left of the panel: each cell is 4x2.
    let fb = view.render(&state.snapshot(), Viewport::new(56, 44));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(41, 0).unwrap().ch, '┐');
    for (x, y) in [(1, 1), (4, 1), (1, 2), (4, 2)] {
        assert_eq!(fb.get(x, y).unwrap().style.fg, RED, "({}, {})", x, y);
    }
    assert_ne!(fb.get(5, 1).unwrap().style.fg, RED);
}

#[test]
fn term_view_draws_active_piece_and_ghost() {
    let state = GameState::new(4);
    let snap = state.snapshot();
    let active = snap.active.unwrap();
    let ghost = snap.ghost().unwrap();

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    for (x, y) in active.cells() {
        let cell = fb.get(1 + x as u16 * 2, 1 + y as u16).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, active.color());
    }
    for (x, y) in ghost.cells() {
        let cell = fb.get(1 + x as u16 * 2, 1 + y as u16).unwrap();
        assert_eq!(cell.ch, '▒');
    }
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut board = Board::default();
    for y in 16..20 {
        for x in 1..10 {
            board.set(x, y, Some(RED));
        }
    }
    let mut state = GameState::with_board(1, board);
    let mut piece = Tetromino::new(PieceKind::I);
    piece.rotate(1);
    piece.x = -2;
    assert!(state.set_active(piece));
    state.hard_drop();

    let audio = AudioStatusView {
        volume: 0.5,
        started: false,
    };
    let fb = GameView::default().render_with_audio(
        &state.snapshot(),
        Some(&audio),
        Viewport::new(60, 24),
    );
    let text = fb.text();

    for label in ["SCORE", "LINES", "LEVEL", "NEXT", "VOLUME"] {
        assert!(text.contains(label), "missing {}", label);
    }
    assert!(text.contains("800"));
    assert!(text.contains("50%"));
}

#[test]
fn term_view_omits_panel_on_narrow_viewports() {
    let state = GameState::new(1);
    let fb = GameView::default().render(&state.snapshot(), Viewport::new(30, 22));
    assert!(!fb.text().contains("SCORE"));
}

#[test]
fn term_view_previews_next_piece_in_panel() {
    let state = GameState::new(8);
    let snap = state.snapshot();
    let view = GameView::default();
    let vp = Viewport::new(60, 24);
    let panel_x = view.layout(vp).panel_x.unwrap();

    let fb = view.render(&snap, vp);
    let mut preview_cells = 0;
    for y in 0..fb.height() {
        for x in panel_x..fb.width() {
            let cell = fb.get(x, y).unwrap();
            if cell.ch == '█' && cell.style.fg == snap.next.color() {
                preview_cells += 1;
            }
        }
    }
    // Four piece cells, each two columns wide.
    assert_eq!(preview_cells, 8);
}

#[test]
fn term_view_overlays_pause_and_game_over() {
    let mut state = GameState::new(1);
    let view = GameView::default();
    let vp = Viewport::new(40, 22);

    assert!(!view.render(&state.snapshot(), vp).text().contains(PAUSED_TEXT));
    state.toggle_pause();
    assert!(view.render(&state.snapshot(), vp).text().contains(PAUSED_TEXT));

    let mut blocked = Board::default();
    for x in 0..9 {
        blocked.set(x, 0, Some(RED));
        blocked.set(x, 1, Some(RED));
    }
    let over = GameState::with_board(1, blocked);
    let text = view.render(&over.snapshot(), vp).text();
    assert!(text.contains(GAME_OVER_TEXT));
    assert!(!text.contains(PAUSED_TEXT));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let state = GameState::new(1);
    let fb = GameView::default().render(&state.snapshot(), Viewport::new(22, 30));

    // start_y = (30 - 22) / 2 = 4
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_can_anchor_board_to_top() {
    let state = GameState::new(1);
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&state.snapshot(), Viewport::new(22, 30));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn term_view_reuses_framebuffer_across_sizes() {
    let state = GameState::new(1);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(&state.snapshot(), Viewport::new(60, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (60, 24));
    view.render_into(&state.snapshot(), Viewport::new(22, 22), &mut fb);
    assert_eq!((fb.width(), fb.height()), (22, 22));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}
