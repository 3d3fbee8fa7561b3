//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Tetromino};
use crate::fb::{CellStyle, FrameBuffer, Rgb, SCREEN_BG};
use crate::preview::{draw_preview, PREVIEW_HEIGHT, PREVIEW_WIDTH};
use crate::types::{GameStatus, BOARD_HEIGHT, BOARD_WIDTH};

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const GRID_DOT: Rgb = Rgb::new(90, 90, 100);
const BORDER: Rgb = Rgb::new(200, 200, 200);
const LABEL: Rgb = Rgb::new(220, 220, 220);
const VALUE: Rgb = Rgb::new(200, 200, 200);

/// How far the ghost color is blended towards the board background.
const GHOST_FADE: f32 = 0.6;

/// Columns reserved right of the board: a two column gap plus the panel.
const PANEL_GAP: u16 = 2;
const PANEL_WIDTH: u16 = PREVIEW_WIDTH;

/// Slots in the volume bar.
const VOLUME_SLOTS: u16 = 10;

pub const PAUSED_TEXT: &str = "PAUSED — press P";
pub const GAME_OVER_TEXT: &str = "GAME OVER — press R";

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

/// Music state shown in the side panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioStatusView {
    /// Volume in `[0, 1]`.
    pub volume: f32,
    pub started: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the board ended up for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Top-left corner of the border.
    pub x: u16,
    pub y: u16,
    /// Board cell size in terminal cells.
    pub cell_w: u16,
    pub cell_h: u16,
    /// Left edge of the side panel, when there is room for one.
    pub panel_x: Option<u16>,
}

impl BoardLayout {
    pub fn frame_width(&self) -> u16 {
        BOARD_WIDTH as u16 * self.cell_w + 2
    }

    pub fn frame_height(&self) -> u16 {
        BOARD_HEIGHT as u16 * self.cell_h + 2
    }
}

/// Renders the board, ghost, active piece, side panel and overlays.
///
/// Board cells scale with the viewport: one unit is the largest integer that
/// fits both dimensions, and a cell is `2 * unit` columns by `unit` rows to
/// make up for terminal glyphs being about twice as tall as they are wide.
#[derive(Debug, Clone)]
pub struct GameView {
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Compute cell size and placement for a viewport.
    ///
    /// The panel is dropped when the viewport cannot fit it next to a board
    /// drawn at the smallest size.
    pub fn layout(&self, viewport: Viewport) -> BoardLayout {
        let min_frame_w = BOARD_WIDTH as u16 * 2 + 2;
        let panel_w = PANEL_GAP + PANEL_WIDTH;
        let has_panel = viewport.width >= min_frame_w + panel_w;
        let area_w = if has_panel {
            viewport.width - panel_w
        } else {
            viewport.width
        };

        let unit_w = area_w.saturating_sub(2) / (BOARD_WIDTH as u16 * 2);
        let unit_h = viewport.height.saturating_sub(2) / BOARD_HEIGHT as u16;
        let unit = unit_w.min(unit_h).max(1);
        let cell_w = unit * 2;
        let cell_h = unit;

        let frame_w = BOARD_WIDTH as u16 * cell_w + 2;
        let frame_h = BOARD_HEIGHT as u16 * cell_h + 2;
        let x = area_w.saturating_sub(frame_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        let panel_x = has_panel.then(|| x + frame_w + PANEL_GAP);

        BoardLayout {
            x,
            y,
            cell_w,
            cell_h,
            panel_x,
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Callers can reuse one framebuffer across frames.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_audio(snap, None, viewport, fb);
    }

    pub fn render_into_with_audio(
        &self,
        snap: &GameSnapshot,
        audio: Option<&AudioStatusView>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(viewport);
        let frame_w = layout.frame_width();
        let frame_h = layout.frame_height();

        fb.fill_rect(
            layout.x + 1,
            layout.y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            CellStyle::new(GRID_DOT, BOARD_BG),
        );
        draw_border(
            fb,
            layout.x,
            layout.y,
            frame_w,
            frame_h,
            CellStyle::new(BORDER, SCREEN_BG),
        );

        // Locked cells, with a faint dot on empty ones.
        for (y, row) in snap.board.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (ch, style) = match cell {
                    Some(color) => ('█', CellStyle::new(*color, BOARD_BG)),
                    None => ('·', CellStyle::new(GRID_DOT, BOARD_BG).dim()),
                };
                fill_cell(fb, &layout, x as i32, y as i32, ch, style);
            }
        }

        if let Some(ghost) = snap.ghost() {
            let style = CellStyle::new(ghost.color().mix(BOARD_BG, GHOST_FADE), BOARD_BG);
            draw_piece(fb, &layout, &ghost, '▒', style);
        }
        if let Some(active) = snap.active {
            let style = CellStyle::new(active.color(), BOARD_BG).bold();
            draw_piece(fb, &layout, &active, '█', style);
        }

        if let Some(panel_x) = layout.panel_x {
            draw_side_panel(fb, snap, audio, panel_x, layout.y);
        }

        match snap.status {
            GameStatus::Paused => draw_overlay_text(fb, &layout, PAUSED_TEXT),
            GameStatus::GameOver => draw_overlay_text(fb, &layout, GAME_OVER_TEXT),
            GameStatus::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        self.render_with_audio(snap, None, viewport)
    }

    pub fn render_with_audio(
        &self,
        snap: &GameSnapshot,
        audio: Option<&AudioStatusView>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_audio(snap, audio, viewport, &mut fb);
        fb
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

/// Paint one board cell. Cells outside the board (e.g. above it) are skipped.
fn fill_cell(
    fb: &mut FrameBuffer,
    layout: &BoardLayout,
    x: i32,
    y: i32,
    ch: char,
    style: CellStyle,
) {
    if x < 0 || y < 0 || x >= BOARD_WIDTH as i32 || y >= BOARD_HEIGHT as i32 {
        return;
    }
    let px = layout.x + 1 + x as u16 * layout.cell_w;
    let py = layout.y + 1 + y as u16 * layout.cell_h;
    fb.fill_rect(px, py, layout.cell_w, layout.cell_h, ch, style);
}

fn draw_piece(
    fb: &mut FrameBuffer,
    layout: &BoardLayout,
    piece: &Tetromino,
    ch: char,
    style: CellStyle,
) {
    for (x, y) in piece.cells() {
        fill_cell(fb, layout, x, y, ch, style);
    }
}

fn draw_side_panel(
    fb: &mut FrameBuffer,
    snap: &GameSnapshot,
    audio: Option<&AudioStatusView>,
    panel_x: u16,
    top: u16,
) {
    let label = CellStyle::new(LABEL, SCREEN_BG).bold();
    let value = CellStyle::new(VALUE, SCREEN_BG);

    let mut y = top;
    for (name, v) in [("SCORE", snap.score), ("LINES", snap.lines), ("LEVEL", snap.level)] {
        fb.put_str(panel_x, y, name, label);
        fb.put_u32(panel_x, y.saturating_add(1), v, value);
        y = y.saturating_add(3);
    }

    fb.put_str(panel_x, y, "NEXT", label);
    y = y.saturating_add(1);
    draw_preview(fb, panel_x, y, snap.next);
    y = y.saturating_add(PREVIEW_HEIGHT + 1);

    fb.put_str(panel_x, y, "VOLUME", label);
    y = y.saturating_add(1);
    match audio {
        Some(status) => {
            let volume = status.volume.clamp(0.0, 1.0);
            let filled = (volume * VOLUME_SLOTS as f32).round() as u16;
            for i in 0..VOLUME_SLOTS {
                let ch = if i < filled { '▮' } else { '▯' };
                fb.put_char(panel_x + i, y, ch, value);
            }
            let percent = (volume * 100.0).round() as u32;
            let x = fb.put_u32(panel_x, y.saturating_add(1), percent, value);
            let x = fb.put_str(x, y.saturating_add(1), "%", value);
            if !status.started {
                fb.put_str(x + 1, y.saturating_add(1), "idle", value.dim());
            }
        }
        None => {
            fb.put_str(panel_x, y, "off", value.dim());
        }
    }
}

fn draw_overlay_text(fb: &mut FrameBuffer, layout: &BoardLayout, text: &str) {
    let frame_w = layout.frame_width();
    let mid_y = layout.y.saturating_add(layout.frame_height() / 2);
    let text_w = text.chars().count() as u16;
    let x = layout.x.saturating_add(frame_w.saturating_sub(text_w) / 2);
    let band = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
    fb.fill_rect(layout.x + 1, mid_y, frame_w.saturating_sub(2), 1, ' ', band);
    fb.put_str(x, mid_y, text, band);
}
