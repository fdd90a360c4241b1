use cyber_tetris::core::{GameConfig, GameState, SessionStatus};
use cyber_tetris::term::{piece_color, AnchorY, FrameBuffer, GameView, Viewport};
use cyber_tetris::types::PieceKind;

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            all.push(fb.get(x, y).unwrap().ch);
        }
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // 10 cells * 2 wide + border = 22; 20 rows + border = 22.
    assert_eq!(view.frame_size(10, 20), (22, 22));
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_follows_configured_board_size() {
    let snap = GameState::with_config(GameConfig {
        cols: 6,
        rows: 8,
        seed: Some(1),
    })
    .snapshot();
    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, Viewport::new(14, 10));

    assert_eq!(fb.get(13, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 9).unwrap().ch, '└');
}

#[test]
fn term_view_renders_locked_cell_two_chars_wide() {
    let mut snap = GameState::new(1).snapshot();
    snap.board[19 * 10] = Some(PieceKind::I);
    snap.active = None;
    snap.ghost_y = None;

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Inside the border the origin is (1, 1).
    let left = fb.get(1, 20).unwrap();
    let right = fb.get(2, 20).unwrap();
    assert_eq!(left.ch, '█');
    assert_eq!(right.ch, '█');
    assert_eq!(left.style.fg, piece_color(PieceKind::I));
    assert_eq!(fb.get(3, 20).unwrap().ch, '·');
}

#[test]
fn term_view_draws_ghost_at_landing_row() {
    let mut gs = GameState::new(1);
    gs.start();
    gs.force_active(PieceKind::O);
    let snap = gs.snapshot();
    assert_eq!(snap.ghost_y, Some(18));

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    // O at columns 4..=5 -> x = 1 + 4*2; rows 18..=19 -> y = 19..=20.
    assert_eq!(fb.get(9, 19).unwrap().ch, '░');
    assert_eq!(fb.get(12, 20).unwrap().ch, '░');
}

#[test]
fn term_view_previews_hidden_cells_in_top_row() {
    let mut gs = GameState::new(1);
    gs.start();
    gs.force_active(PieceKind::T);
    let snap = gs.snapshot();

    // T spawns entirely above the well; its cells show dimmed on row 0.
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    for x in [7, 9, 11] {
        let glyph = fb.get(x, 1).unwrap();
        assert_eq!(glyph.ch, '█');
        assert!(glyph.style.dim);
    }
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut gs = GameState::new(1);
    gs.start();
    gs.hold();
    let mut snap = gs.snapshot();
    snap.score = 1234;
    snap.level = 2;
    snap.lines = 10;

    let fb = GameView::default().render(&snap, Viewport::new(60, 22));
    let all = screen_text(&fb);

    for label in ["SCORE", "1234", "LEVEL", "LINES", "HOLD", "NEXT"] {
        assert!(all.contains(label), "missing {}", label);
    }
}

#[test]
fn term_view_skips_side_panel_on_narrow_viewports() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(30, 22));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_overlays_follow_status() {
    let view = GameView::default();
    let mut snap = GameState::new(1).snapshot();

    let cases = [
        (SessionStatus::Ready, Some("READY")),
        (SessionStatus::Paused, Some("PAUSED")),
        (SessionStatus::GameOver, Some("GAME OVER")),
        (SessionStatus::Running, None),
    ];
    for (status, text) in cases {
        snap.status = status;
        let all = screen_text(&view.render(&snap, Viewport::new(22, 22)));
        match text {
            Some(text) => assert!(all.contains(text), "{:?} should show {}", status, text),
            None => {
                for word in ["READY", "PAUSED", "GAME OVER"] {
                    assert!(!all.contains(word));
                }
            }
        }
    }
}

#[test]
fn term_view_game_over_shows_final_score() {
    let view = GameView::default();
    let mut snap = GameState::new(1).snapshot();
    snap.status = SessionStatus::GameOver;

    for (score, text) in [(0, "SCORE 0"), (4321, "SCORE 4321"), (1_000_000, "SCORE 1000000")] {
        snap.score = score;
        let all = screen_text(&view.render(&snap, Viewport::new(22, 22)));
        assert!(all.contains(text), "missing {}", text);
        assert!(all.contains("R to restart"));
    }

    // Only the game-over screen carries the score line.
    snap.status = SessionStatus::Paused;
    let all = screen_text(&view.render(&snap, Viewport::new(22, 22)));
    assert!(!all.contains("SCORE"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(22, 30));

    // start_y = (30 - 22) / 2 = 4
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_can_anchor_board_to_top() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(22, 30));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn term_view_render_into_reuses_buffer() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(&snap, Viewport::new(40, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 24));
    let first = fb.clone();

    view.render_into(&snap, Viewport::new(40, 24), &mut fb);
    assert_eq!(fb, first);
}
