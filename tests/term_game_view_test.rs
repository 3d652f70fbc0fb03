use tui_collapse::core::{GameSnapshot, GameState, Phase};
use tui_collapse::term::{block_rgb, FrameBuffer, GameView, Viewport};
use tui_collapse::types::{ColorId, Difficulty};

fn all_text(fb: &FrameBuffer) -> String {
    (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::with_seed(1).snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board = 8*2 by 14*1 => 16x14, plus border => 18x16
    let fb = view.render(&snap, Viewport::new(18, 16));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(17, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 15).unwrap().ch, '└');
    assert_eq!(fb.get(17, 15).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_block_as_two_chars_wide() {
    let mut snap = GameSnapshot::default();
    snap.board[13][0] = ColorId::Green.id();

    let fb = GameView::default().render(&snap, Viewport::new(18, 16));

    let (x0, y0) = (1, 1 + 13);
    for x in [x0, x0 + 1] {
        let cell = fb.get(x, y0).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, block_rgb(ColorId::Green));
    }
    // Neighbor cell is empty.
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '·');
}

#[test]
fn term_view_marks_cursor_only_when_playable() {
    let mut gs = GameState::with_seed(5);
    gs.start();
    let mut snap = gs.snapshot();
    let (cx, cy) = snap.cursor;
    let px = 1 + cx as u16 * 2;
    let py = 1 + cy as u16;

    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(18, 16));
    if snap.playable() {
        assert_eq!(fb.get(px, py).unwrap().ch, '[');
        assert_eq!(fb.get(px + 1, py).unwrap().ch, ']');
    }

    snap.phase = Phase::Settling;
    let fb = view.render(&snap, Viewport::new(18, 16));
    assert_ne!(fb.get(px, py).unwrap().ch, '[');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut gs = GameState::with_seed(1);
    gs.start();
    let mut snap = gs.snapshot();
    snap.cleared = 1234;
    snap.difficulty = Difficulty::Extreme;

    let view = GameView::default();
    let text = all_text(&view.render(&snap, Viewport::new(50, 16)));
    for word in ["MODE", "extreme", "LEFT", "CLEARED", "1234", "MOVES", "GROUP"] {
        assert!(text.contains(word), "missing {word}:\n{text}");
    }

    let narrow = all_text(&view.render(&snap, Viewport::new(18, 16)));
    assert!(!narrow.contains("MODE"));
}

#[test]
fn term_view_shows_end_of_board_overlays() {
    let view = GameView::default();
    let mut snap = GameSnapshot {
        started: true,
        game_over: true,
        ..GameSnapshot::default()
    };
    snap.board[13][3] = ColorId::Red.id();

    let fb = view.render(&snap, Viewport::new(18, 16));
    assert!(fb.row_text(8).contains("NO MOVES"));

    snap.board[13][3] = ColorId::Empty.id();
    snap.board_cleared = true;
    let fb = view.render(&snap, Viewport::new(18, 16));
    assert!(fb.row_text(8).contains("CLEARED!"));
    assert!(!all_text(&fb).contains("NO MOVES"));
}

#[test]
fn term_view_reuses_framebuffer_across_sizes() {
    let snap = GameSnapshot::default();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(&snap, Viewport::new(40, 20), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 20));
    view.render_into(&snap, Viewport::new(18, 16), &mut fb);
    assert_eq!((fb.width(), fb.height()), (18, 16));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}
