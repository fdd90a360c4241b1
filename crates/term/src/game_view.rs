//! GameView: draws a [`GameSnapshot`] into a terminal framebuffer.
//!
//! Pure, no I/O. The board size comes from the snapshot, so any configured
//! grid fits as long as the viewport is big enough.

use crate::core::{GameSnapshot, PieceMatrix, SessionStatus};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::PieceKind;

const BACKDROP: Rgb = Rgb::from_hex(0x02060c);
const WELL: Rgb = Rgb::from_hex(0x020a14);
const TEXT: Rgb = Rgb::from_hex(0xcfeefd);
const FRAME: Rgb = Rgb::from_hex(0x2bd1ff);
const GRID: Rgb = Rgb::from_hex(0x1b3340);

/// Neon cyan palette, one shade per kind.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::from_hex(0x39f0ff),
        PieceKind::J => Rgb::from_hex(0x2b9dff),
        PieceKind::L => Rgb::from_hex(0x3bb7ff),
        PieceKind::O => Rgb::from_hex(0x7fe6ff),
        PieceKind::S => Rgb::from_hex(0x17d5ff),
        PieceKind::T => Rgb::from_hex(0x5ad8ff),
        PieceKind::Z => Rgb::from_hex(0x1ac7ff),
    }
}

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the well landed in the last layout pass.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
    cols: u8,
    rows: u8,
}

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares up a terminal glyph.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Size of the bordered well for a board, in terminal cells.
    pub fn frame_size(&self, cols: u8, rows: u8) -> (u16, u16) {
        (
            cols as u16 * self.cell_w + 2,
            rows as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Keep one framebuffer across frames; nothing here allocates once it has
    /// reached the viewport size.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(TEXT, BACKDROP).glyph(' '));

        let (w, h) = self.frame_size(snap.width, snap.height);
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(h) / 2,
                AnchorY::Top => 0,
            },
            w,
            h,
            cols: snap.width,
            rows: snap.height,
        };

        self.draw_border(fb, frame);
        self.draw_locked(fb, frame, snap);
        self.draw_ghost(fb, frame, snap);
        self.draw_active(fb, frame, snap);
        self.draw_side_panel(fb, frame, snap, viewport);

        match snap.status {
            SessionStatus::Ready => self.draw_overlay(fb, frame, "READY", None, "ENTER to start"),
            SessionStatus::Paused => self.draw_overlay(fb, frame, "PAUSED", None, "P to resume"),
            SessionStatus::GameOver => {
                self.draw_overlay(fb, frame, "GAME OVER", Some(snap.score), "R to restart")
            }
            SessionStatus::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, f: Frame) {
        let style = CellStyle::new(FRAME, BACKDROP);
        let (right, bottom) = (f.x + f.w - 1, f.y + f.h - 1);

        fb.put_char(f.x, f.y, '┌', style);
        fb.put_char(right, f.y, '┐', style);
        fb.put_char(f.x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
        for x in f.x + 1..right {
            fb.put_char(x, f.y, '─', style);
            fb.put_char(x, bottom, '─', style);
        }
        for y in f.y + 1..bottom {
            fb.put_char(f.x, y, '│', style);
            fb.put_char(right, y, '│', style);
        }
    }

    fn draw_locked(&self, fb: &mut FrameBuffer, f: Frame, snap: &GameSnapshot) {
        let empty = CellStyle::new(GRID, WELL).dim();
        for y in 0..f.rows as i8 {
            for x in 0..f.cols as i8 {
                match snap.cell(x, y) {
                    Some(kind) => self.draw_block(fb, f, x, y, block_style(kind)),
                    None => self.fill_cell(fb, f, x, y, '·', empty),
                }
            }
        }
    }

    fn draw_ghost(&self, fb: &mut FrameBuffer, f: Frame, snap: &GameSnapshot) {
        let (Some(active), Some(ghost_y)) = (snap.active, snap.ghost_y) else {
            return;
        };
        let style = CellStyle::new(piece_color(active.kind), WELL).dim();
        let dy = ghost_y - active.y;
        for (x, y) in active.cells() {
            let y = y + dy;
            if y >= 0 {
                self.fill_cell(fb, f, x, y, '░', style);
            }
        }
    }

    fn draw_active(&self, fb: &mut FrameBuffer, f: Frame, snap: &GameSnapshot) {
        let Some(active) = snap.active else {
            return;
        };
        let style = block_style(active.kind);
        // Cells still above the well are previewed faintly in the top row.
        for (x, y) in active.cells().filter(|&(_, y)| y < 0) {
            self.draw_block(fb, f, x, 0, style.dim());
        }
        for (x, y) in active.cells().filter(|&(_, y)| y >= 0) {
            self.draw_block(fb, f, x, y, style);
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, f: Frame, x: i8, y: i8, style: CellStyle) {
        self.fill_cell(fb, f, x, y, '█', style);
    }

    /// Fill one board cell; coordinates outside the well are skipped.
    fn fill_cell(&self, fb: &mut FrameBuffer, f: Frame, x: i8, y: i8, ch: char, style: CellStyle) {
        if x < 0 || y < 0 || x >= f.cols as i8 || y >= f.rows as i8 {
            return;
        }
        let px = f.x + 1 + x as u16 * self.cell_w;
        let py = f.y + 1 + y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        f: Frame,
        snap: &GameSnapshot,
        viewport: Viewport,
    ) {
        let panel_x = f.x.saturating_add(f.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(FRAME, BACKDROP).bold();
        let value = CellStyle::new(TEXT, BACKDROP);

        let mut y = f.y;
        for (name, v) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, v, value);
            y += 3;
        }

        fb.put_str(panel_x, y, "HOLD", label);
        match snap.hold {
            Some(kind) => draw_mini(fb, panel_x, y + 1, kind, !snap.can_hold),
            None => fb.put_str(panel_x, y + 1, "-", value),
        }
        y += 4;

        fb.put_str(panel_x, y, "NEXT", label);
        let mut queue = snap.next_queue.iter();
        if let Some(&head) = queue.next() {
            draw_mini(fb, panel_x, y + 1, head, false);
        }
        let mut x = panel_x;
        for kind in queue {
            fb.put_str(x, y + 4, kind.as_str(), value.dim());
            x += 2;
        }
    }

    /// Title on the middle row, then the score (if any) and a dim hint below it.
    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        f: Frame,
        title: &str,
        score: Option<u32>,
        hint: &str,
    ) {
        let mut y = f.y + f.h / 2;
        let title_style = CellStyle::new(Rgb::new(255, 255, 255), BACKDROP).bold();
        let text_style = CellStyle::new(TEXT, BACKDROP);

        put_centered(fb, f, y, title, title_style);
        y += 1;

        if let Some(score) = score {
            let w = SCORE_PREFIX.len() as u16 + decimal_width(score);
            if w + 2 <= f.w {
                let x = f.x + (f.w - w) / 2;
                fb.put_str(x, y, SCORE_PREFIX, text_style);
                fb.put_u32(x + SCORE_PREFIX.len() as u16, y, score, text_style.bold());
            }
            y += 1;
        }

        put_centered(fb, f, y, hint, text_style.dim());
    }
}

const SCORE_PREFIX: &str = "SCORE ";

/// Centre `text` on row `y` of the frame; skipped when it would touch the border.
fn put_centered(fb: &mut FrameBuffer, f: Frame, y: u16, text: &str, style: CellStyle) {
    let w = text.chars().count() as u16;
    if w + 2 > f.w {
        return;
    }
    fb.put_str(f.x + (f.w - w) / 2, y, text, style);
}

/// Number of decimal digits `put_u32` writes for `value`.
fn decimal_width(mut value: u32) -> u16 {
    let mut w = 1;
    while value >= 10 {
        value /= 10;
        w += 1;
    }
    w
}

fn block_style(kind: PieceKind) -> CellStyle {
    CellStyle::new(piece_color(kind), WELL).bold()
}

/// Spawn orientation of `kind` at two columns per cell.
fn draw_mini(fb: &mut FrameBuffer, x: u16, y: u16, kind: PieceKind, dim: bool) {
    let mut style = CellStyle::new(piece_color(kind), BACKDROP);
    if dim {
        style = style.dim();
    }
    for (r, c) in PieceMatrix::from_kind(kind).occupied() {
        fb.fill_rect(x + c as u16 * 2, y + r as u16, 2, 1, '█', style);
    }
}
