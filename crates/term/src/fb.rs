//! Framebuffer and style types for terminal rendering.
//!
//! Besides plain text the buffer knows the few board-specific primitives the
//! game view needs: the brick palette, brick shapes drawn as solid blocks,
//! the well outline, and skill points with their carried tenth.

use crate::core::Shape;
use crate::types::BrickKind;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Palette colour of a grid cell value. Values outside the catalog are grey.
    pub fn for_cell(value: u8) -> Self {
        match BrickKind::from_cell_value(value) {
            Some(BrickKind::I) => Self::new(80, 220, 220),
            Some(BrickKind::J) => Self::new(80, 120, 220),
            Some(BrickKind::L) => Self::new(255, 165, 0),
            Some(BrickKind::O) => Self::new(240, 220, 80),
            Some(BrickKind::S) => Self::new(100, 220, 120),
            Some(BrickKind::T) => Self::new(200, 120, 220),
            Some(BrickKind::Z) => Self::new(220, 80, 80),
            None => Self::new(160, 160, 160),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub const fn cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        CellStyle::default().cell(' ')
    }
}

/// Row-major grid of styled character cells. Writes outside the buffer are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Change dimensions, reusing the allocation.
    pub fn resize(&mut self, width: u16, height: u16) {
        if (self.width, self.height) == (width, height) {
            return;
        }
        self.width = width;
        self.height = height;
        self.cells
            .resize(width as usize * height as usize, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, style.cell(ch));
    }

    /// Write `s` left to right, clipped at the right edge. Returns the column after the text.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) -> u16 {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
        cx
    }

    /// Write a decimal number without allocating. Returns the column after it.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) -> u16 {
        let mut digits = [0u8; 10];
        let mut n = value;
        let mut len = 0;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }

        let mut cx = x;
        for &d in digits[..len].iter().rev() {
            self.put_char(cx, y, d as char, style);
            cx = cx.saturating_add(1);
        }
        cx
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// Single-line outline of a `w x h` box. Boxes under 2x2 are skipped.
    pub fn draw_box(&mut self, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);

        self.put_char(x, y, '┌', style);
        self.put_char(right, y, '┐', style);
        self.put_char(x, bottom, '└', style);
        self.put_char(right, bottom, '┘', style);
        for dx in 1..w - 1 {
            self.put_char(x.saturating_add(dx), y, '─', style);
            self.put_char(x.saturating_add(dx), bottom, '─', style);
        }
        for dy in 1..h - 1 {
            self.put_char(x, y.saturating_add(dy), '│', style);
            self.put_char(right, y.saturating_add(dy), '│', style);
        }
    }

    /// Draw the occupied cells of `shape` as solid `cell_w x cell_h` blocks in
    /// their palette colour, top-left at `(x, y)`.
    pub fn put_shape(&mut self, x: u16, y: u16, shape: &Shape, cell_w: u16, cell_h: u16, bg: Rgb) {
        for (row, col, value) in shape.occupied() {
            let style = CellStyle::new(Rgb::for_cell(value), bg).bold();
            let px = x.saturating_add((col as u16).saturating_mul(cell_w));
            let py = y.saturating_add((row as u16).saturating_mul(cell_h));
            self.fill_rect(px, py, cell_w, cell_h, '█', style);
        }
    }

    /// Write skill points as `whole.tenth`, the fraction in `fraction_style`.
    /// `tenths` above 9 is clamped. Returns the column after the text.
    pub fn put_tenths(
        &mut self,
        x: u16,
        y: u16,
        whole: u32,
        tenths: u32,
        style: CellStyle,
        fraction_style: CellStyle,
    ) -> u16 {
        let x = self.put_u32(x, y, whole, style);
        let x = self.put_str(x, y, ".", fraction_style);
        self.put_u32(x, y, tenths.min(9), fraction_style)
    }

    /// Collect one row as a string. Mostly for tests.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|cell| cell.ch)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Brick;

    #[test]
    fn test_put_str_clips_at_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        let end = fb.put_str(1, 0, "SCORE", CellStyle::default());
        assert_eq!(end, 4);
        assert_eq!(fb.row_text(0), " SCO");
    }

    #[test]
    fn test_put_u32() {
        let mut fb = FrameBuffer::new(12, 2);
        assert_eq!(fb.put_u32(0, 0, 0, CellStyle::default()), 1);
        fb.put_u32(0, 1, 4_294_967_295, CellStyle::default());
        assert_eq!(fb.row_text(0).trim_end(), "0");
        assert_eq!(fb.row_text(1).trim_end(), "4294967295");
    }

    #[test]
    fn test_put_tenths_clamps_fraction() {
        let mut fb = FrameBuffer::new(8, 2);
        let style = CellStyle::default();
        assert_eq!(fb.put_tenths(0, 0, 12, 5, style, style.dim()), 4);
        fb.put_tenths(0, 1, 3, 42, style, style);
        assert_eq!(fb.row_text(0).trim_end(), "12.5");
        assert_eq!(fb.row_text(1).trim_end(), "3.9");
        assert!(fb.get(3, 0).is_some_and(|cell| cell.style.dim));
    }

    #[test]
    fn test_draw_box_outline() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.draw_box(0, 0, 4, 3, CellStyle::default());
        assert_eq!(fb.row_text(0), "┌──┐");
        assert_eq!(fb.row_text(1), "│  │");
        assert_eq!(fb.row_text(2), "└──┘");

        let mut tiny = FrameBuffer::new(2, 2);
        tiny.draw_box(0, 0, 1, 1, CellStyle::default());
        assert!(tiny.cells().iter().all(|c| c.ch == ' '));
    }

    #[test]
    fn test_put_shape_uses_brick_palette() {
        let shape = Brick::tetromino(BrickKind::O).first_shape().clone();
        let mut fb = FrameBuffer::new(8, 4);
        fb.put_shape(0, 0, &shape, 2, 1, Rgb::default());

        // O occupies shape rows and columns 1..=2, two terminal columns per cell
        assert_eq!(fb.row_text(1), "  ████  ");
        assert_eq!(fb.row_text(0).trim(), "");
        let cell = fb.get(2, 1).unwrap();
        assert_eq!(cell.style.fg, Rgb::for_cell(BrickKind::O.cell_value()));
        assert_eq!(Rgb::for_cell(0), Rgb::new(160, 160, 160));
    }

    #[test]
    fn test_out_of_bounds_writes_are_dropped() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_char(5, 5, 'X', CellStyle::default());
        assert!(fb.cells().iter().all(|c| c.ch == ' '));
        assert_eq!(fb.get(2, 0), None);
    }
}
