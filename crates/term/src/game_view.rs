//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Phase};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{ColorId, GRID_HEIGHT, GRID_WIDTH};

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);

/// Largest board cell size, in terminal columns or rows.
const MAX_CELL_SIZE: u16 = 16;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Display color of a block.
///
/// `Empty` has no block color and maps to the playfield background.
pub fn block_rgb(color: ColorId) -> Rgb {
    match color {
        ColorId::Empty => PLAYFIELD_BG,
        ColorId::Red => Rgb::new(220, 70, 70),
        ColorId::Orange => Rgb::new(255, 165, 0),
        ColorId::Yellow => Rgb::new(240, 220, 80),
        ColorId::Green => Rgb::new(100, 220, 120),
        ColorId::Cyan => Rgb::new(80, 220, 220),
        ColorId::Blue => Rgb::new(80, 120, 230),
        ColorId::Magenta => Rgb::new(200, 110, 220),
        ColorId::White => Rgb::new(235, 235, 235),
    }
}

/// Lays out the board and the side panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_SIZE),
            cell_h: cell_h.clamp(1, MAX_CELL_SIZE),
        }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport and fully redrawn.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let board_w = (GRID_WIDTH as u16) * self.cell_w;
        let board_h = (GRID_HEIGHT as u16) * self.cell_h;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            board_w,
            board_h,
            ' ',
            CellStyle::new(Rgb::new(80, 80, 90), PLAYFIELD_BG),
        );
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        let show_cursor = snap.playable();
        for y in 0..GRID_HEIGHT as usize {
            for x in 0..GRID_WIDTH as usize {
                let color = snap.color_at(x, y);
                let at_cursor = show_cursor && snap.cursor == (x as i8, y as i8);
                let (ch, style) = self.cell_look(color, snap.hover[y][x], at_cursor);
                let px = start_x + 1 + (x as u16) * self.cell_w;
                let py = start_y + 1 + (y as u16) * self.cell_h;
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
                if at_cursor && self.cell_w >= 2 {
                    fb.put_char(px, py, '[', style);
                    fb.put_char(px + self.cell_w - 1, py, ']', style);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x.saturating_add(frame_w + 2), start_y);

        if snap.board_cleared {
            draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "CLEARED!");
        } else if snap.game_over {
            draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "NO MOVES");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn cell_look(&self, color: ColorId, hovered: bool, at_cursor: bool) -> (char, CellStyle) {
        let base = CellStyle::new(block_rgb(color), PLAYFIELD_BG);
        match (color.is_empty(), hovered, at_cursor) {
            (true, _, true) => (' ', CellStyle::new(Rgb::new(90, 90, 100), Rgb::new(60, 60, 75))),
            (true, _, false) => ('·', CellStyle::new(Rgb::new(90, 90, 100), PLAYFIELD_BG).dim()),
            (false, true, _) => ('▓', base.bold()),
            (false, false, true) => ('█', base.bold()),
            (false, false, false) => ('█', base),
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        fb.put_str(panel_x, y, "MODE", label);
        fb.put_str(panel_x, y + 1, snap.difficulty.as_str(), value);
        y += 3;

        for (name, n) in [
            ("LEFT", snap.remaining as u64),
            ("CLEARED", snap.cleared as u64),
            ("MOVES", snap.moves as u64),
            ("GROUP", snap.hover_size as u64),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_number(panel_x, y + 1, n, value);
            y += 3;
        }

        let hint = match snap.phase {
            Phase::Settling => "...",
            Phase::Idle if snap.game_over => "r/n: new",
            Phase::Idle => "space: clear",
        };
        fb.put_str(panel_x, y, hint, value.dim());
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn draw_overlay_text(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
    let text_w = text.chars().count() as u16;
    let tx = x.saturating_add(w.saturating_sub(text_w) / 2);
    let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
    fb.put_str(tx, y.saturating_add(h / 2), text, style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_block_color_differs_from_background() {
        for color in ColorId::ALL.into_iter().filter(|c| !c.is_empty()) {
            assert_ne!(block_rgb(color), PLAYFIELD_BG, "{:?}", color);
        }
        assert_eq!(block_rgb(ColorId::Empty), PLAYFIELD_BG);
    }

    #[test]
    fn test_small_viewport_does_not_panic() {
        let view = GameView::default();
        let snap = GameSnapshot::default();
        let fb = view.render(&snap, Viewport::new(3, 2));
        assert_eq!((fb.width(), fb.height()), (3, 2));
    }

    #[test]
    fn test_oversized_cells_are_clamped() {
        let view = GameView::new(u16::MAX, u16::MAX);
        assert_eq!((view.cell_w, view.cell_h), (MAX_CELL_SIZE, MAX_CELL_SIZE));

        let snap = GameSnapshot::default();
        let fb = view.render(&snap, Viewport::new(u16::MAX, 4));
        assert_eq!(fb.width(), u16::MAX);

        let view = GameView::new(0, 0);
        assert_eq!((view.cell_w, view.cell_h), (1, 1));
    }
}
