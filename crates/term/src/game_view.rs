//! GameView: maps an engine [`Game`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). The two spawn-buffer rows at the top of the
//! grid are never drawn.

use crate::core::{BombBlast, Grid, Shape};
use crate::engine::Game;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PowerUp, HIDDEN_ROWS};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Where the well sits inside the viewport, in terminal cells.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
    hidden: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares up typical terminal glyphs
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// `blast` is drawn as a flash over the cells it cleared.
    pub fn render_into(
        &self,
        game: &Game,
        blast: Option<&BombBlast>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).cell(' '));

        let board = game.board();
        let grid = board.grid();
        let hidden = HIDDEN_ROWS.min(grid.rows().saturating_sub(1));
        let visible_rows = (grid.rows() - hidden) as u16;

        let w = (grid.cols() as u16).saturating_mul(self.cell_w).saturating_add(2);
        let h = visible_rows.saturating_mul(self.cell_h).saturating_add(2);
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(h) / 2,
                AnchorY::Top => 0,
            },
            w,
            h,
            hidden,
        };

        self.draw_border(fb, frame);
        self.draw_grid(fb, frame, grid);

        let view = board.snapshot_view();
        for (row, col, value) in view.brick_cells(grid.rows(), grid.cols()) {
            self.draw_cell(fb, frame, row, col, value);
        }

        if let Some(blast) = blast {
            let flash = CellStyle::new(Rgb::new(255, 240, 120), Rgb::new(200, 70, 20)).bold();
            for &(row, col) in &blast.cleared {
                self.fill_cell(fb, frame, row, col, '*', flash);
            }
        }

        self.draw_side_panel(fb, game, viewport, frame);

        if game.is_game_over() {
            self.draw_overlay_text(fb, frame, "GAME OVER");
        } else if game.is_paused() {
            self.draw_overlay_text(fb, frame, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &Game, blast: Option<&BombBlast>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, blast, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame) {
        let style = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        fb.draw_box(frame.x, frame.y, frame.w, frame.h, style);
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, frame: Frame, grid: &Grid) {
        let empty = CellStyle::new(Rgb::new(90, 90, 100), WELL_BG).dim();
        for row in frame.hidden..grid.rows() {
            for col in 0..grid.cols() {
                match grid.get(row, col) {
                    Some(0) | None => self.fill_cell(fb, frame, row, col, '·', empty),
                    Some(value) => self.draw_cell(fb, frame, row, col, value),
                }
            }
        }
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, frame: Frame, row: usize, col: usize, value: u8) {
        let style = CellStyle::new(Rgb::for_cell(value), WELL_BG).bold();
        self.fill_cell(fb, frame, row, col, '█', style);
    }

    /// Fill one grid cell; rows in the hidden buffer are skipped.
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        row: usize,
        col: usize,
        ch: char,
        style: CellStyle,
    ) {
        let Some(visible_row) = row.checked_sub(frame.hidden) else {
            return;
        };
        let px = frame.x + 1 + col as u16 * self.cell_w;
        let py = frame.y + 1 + visible_row as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, game: &Game, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let dim = value.dim();

        let board = game.board();
        let economy = board.economy();
        let view = board.snapshot_view();
        let mut y = frame.y;

        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, board.score(), value);
        y += 3;

        fb.put_str(panel_x, y, "SKILL", label);
        let tenths = (economy.fractional_skill_points() * 10.0).round() as u32;
        fb.put_tenths(panel_x, y + 1, economy.skill_points(), tenths, value, dim);
        y += 3;

        fb.put_str(panel_x, y, "NEXT", label);
        self.draw_preview(fb, panel_x, y + 1, Some(&view.next_brick));
        y += 6;

        fb.put_str(panel_x, y, "HOLD", label);
        self.draw_preview(fb, panel_x, y + 1, view.held_brick.as_ref());
        y += 6;

        fb.put_str(panel_x, y, "POWER-UPS", label);
        y += 1;
        for (slot, kind) in PowerUp::ALL.into_iter().enumerate() {
            let x = fb.put_u32(panel_x, y, slot as u32 + 1, dim);
            let x = fb.put_str(x + 1, y, kind.name(), value);
            let x = fb.put_str(x + 1, y, "x", dim);
            fb.put_u32(x, y, economy.quantity(kind), value);
            y += 1;
        }
        y += 1;

        let timer = game.timer();
        if timer.is_slow_motion() {
            let seconds = timer.slow_motion_remaining_ms().div_ceil(1000);
            let x = fb.put_str(panel_x, y, "SLOW ", label);
            let x = fb.put_u32(x, y, seconds, value);
            fb.put_str(x, y, "s", value);
            y += 1;
        }
        if board.is_bomb_armed() {
            let armed = CellStyle::new(Rgb::new(255, 140, 60), PANEL_BG).bold();
            fb.put_str(panel_x, y, "BOMB ARMED", armed);
        }
    }

    /// Draw a brick's spawn shape in a 4x4 box, or a dash when absent.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, shape: Option<&Shape>) {
        let Some(shape) = shape else {
            fb.put_str(x, y, "-", CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG));
            return;
        };
        fb.put_shape(x, y, shape, 2, 1, PANEL_BG);
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Frame, text: &str) {
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}
