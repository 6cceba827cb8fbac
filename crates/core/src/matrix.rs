//! Matrix module - grid storage and the pure matrix operations
//!
//! Both the background grid and every brick rotation state are small integer
//! matrices, stored flat in row-major order (`row * cols + col`).
//! Cell value 0 is empty, 1..=7 identify the brick kind occupying the cell.
//!
//! Coordinates passed to the operations follow the board's offset convention:
//! `x` is the column and `y` is the row of the shape's top-left corner, so
//! shape cell `(r, c)` lands on grid cell `(y + r, x + c)`. Row 0 is the top.

use arrayvec::ArrayVec;

use crate::error::BoardError;
use crate::types::{BOMB_AREA, LINE_CLEAR_BASE, MAX_CELL_VALUE};

/// A rectangular matrix of cell values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    /// Flat cells, row-major order
    cells: Vec<u8>,
}

/// The background matrix of locked cells.
pub type Grid = Matrix;

/// One rotation state of a brick.
pub type Shape = Matrix;

/// Cells a bomb clears, at most a full 4x4 area, as `(row, col)` pairs.
pub type BlastCells = ArrayVec<(usize, usize), { BOMB_AREA * BOMB_AREA }>;

impl Matrix {
    /// Create an all-empty matrix. Both dimensions must be positive.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        })
    }

    /// Build a matrix from row slices.
    ///
    /// ```
    /// use powerup_tetris_core::Matrix;
    ///
    /// let shape = Matrix::from_rows(&[[0u8, 1], [1, 1]]).unwrap();
    /// assert_eq!(shape.rows(), 2);
    /// assert_eq!(shape.get(1, 0), Some(1));
    /// ```
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut matrix = Self::new(height, width)?;

        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(BoardError::RaggedRows {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            if let Some(&bad) = values.iter().find(|&&v| v > MAX_CELL_VALUE) {
                return Err(BoardError::InvalidCellValue(bad));
            }
            matrix.cells[row * width..(row + 1) * width].copy_from_slice(values);
        }

        Ok(matrix)
    }

    /// Build from a fixed-size array of known-good values.
    pub(crate) fn from_array<const R: usize, const C: usize>(values: &[[u8; C]; R]) -> Self {
        debug_assert!(R > 0 && C > 0);
        Self {
            rows: R,
            cols: C,
            cells: values.iter().flatten().copied().collect(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    /// Check whether a signed coordinate lies inside the matrix.
    #[inline(always)]
    pub fn contains(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// Get cell at `(row, col)`, `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at `(row, col)`.
    /// Returns false if out of bounds or the value is not a valid cell value.
    pub fn set(&mut self, row: usize, col: usize, value: u8) -> bool {
        if value > MAX_CELL_VALUE {
            return false;
        }
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Borrow one row, `None` if out of bounds.
    pub fn row(&self, row: usize) -> Option<&[u8]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        self.cells.get(start..start + self.cols)
    }

    /// A row is full when every cell is non-zero.
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row).is_some_and(|cells| cells.iter().all(|&cell| cell != 0))
    }

    /// True when no cell is occupied.
    pub fn is_clear(&self) -> bool {
        self.cells.iter().all(|&cell| cell == 0)
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Iterate occupied cells as `(row, col, value)` in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v != 0)
            .map(move |(i, &v)| (i / cols, i % cols, v))
    }

    /// Zero every cell.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Convert to nested rows, mostly for tests and display.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells.chunks(self.cols).map(|r| r.to_vec()).collect()
    }
}

/// Result of removing completed rows from a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearRow {
    /// Number of rows removed.
    pub lines_removed: usize,
    /// Indices of the removed rows in the input grid, top to bottom.
    pub cleared_rows: Vec<usize>,
    /// Grid after removal and compaction.
    pub grid: Grid,
    /// `50 * n * n` for `n` removed rows.
    pub score_bonus: u32,
}

/// Check whether `shape` placed at column `x`, row `y` collides.
///
/// Any occupied shape cell that falls outside the grid or onto an occupied
/// grid cell is a collision.
pub fn intersect(grid: &Grid, shape: &Shape, x: i32, y: i32) -> bool {
    shape.occupied().any(|(r, c, _)| {
        let row = y + r as i32;
        let col = x + c as i32;
        !grid.contains(row, col) || grid.cells[row as usize * grid.cols + col as usize] != 0
    })
}

/// Return a copy of `grid` with the occupied cells of `shape` written in.
///
/// Existing cells are overwritten; callers check [`intersect`] first.
/// Cells falling outside the grid are dropped.
pub fn merge(grid: &Grid, shape: &Shape, x: i32, y: i32) -> Grid {
    let mut out = grid.clone();
    for (r, c, value) in shape.occupied() {
        let row = y + r as i32;
        let col = x + c as i32;
        if out.contains(row, col) {
            out.cells[row as usize * out.cols + col as usize] = value;
        }
    }
    out
}

/// Remove every full row and let the rows above fall into the gap.
///
/// Surviving rows keep their order and are packed against the bottom; vacated
/// rows at the top are empty.
pub fn check_removing(grid: &Grid) -> ClearRow {
    let cols = grid.cols;
    let mut out = grid.clone();
    let mut cleared_rows = Vec::new();
    let mut write_row = grid.rows;

    // Scan bottom to top so survivors can be copied down in place
    for read_row in (0..grid.rows).rev() {
        if grid.is_row_full(read_row) {
            cleared_rows.push(read_row);
        } else {
            write_row -= 1;
            if write_row != read_row {
                out.cells
                    .copy_within(read_row * cols..(read_row + 1) * cols, write_row * cols);
            }
        }
    }
    out.cells[..write_row * cols].fill(0);

    cleared_rows.reverse();
    let lines_removed = cleared_rows.len();

    ClearRow {
        lines_removed,
        cleared_rows,
        grid: out,
        score_bonus: line_clear_bonus(lines_removed),
    }
}

/// Quadratic bonus for clearing `lines` rows at once.
pub fn line_clear_bonus(lines: usize) -> u32 {
    let n = lines as u32;
    LINE_CLEAR_BASE.saturating_mul(n).saturating_mul(n)
}

/// Remove the bottom `count` rows, shifting everything above down by `count`.
///
/// Returns false (grid untouched) unless `1 <= count <= rows`.
pub fn clear_bottom_rows(grid: &mut Grid, count: usize) -> bool {
    if count == 0 || count > grid.rows {
        return false;
    }
    let cols = grid.cols;
    let kept = grid.rows - count;
    grid.cells.copy_within(0..kept * cols, count * cols);
    grid.cells[..count * cols].fill(0);
    true
}

/// Clear the 4x4 area around column `x`, row `y`.
///
/// The area spans one cell before the center to two cells after it on both
/// axes and is clamped to the grid. Returns the in-bounds cells of the area.
pub fn clear_area(grid: &mut Grid, x: i32, y: i32) -> BlastCells {
    let mut cleared = BlastCells::new();
    let reach = BOMB_AREA as i32;

    for row in (y - 1)..(y - 1 + reach) {
        for col in (x - 1)..(x - 1 + reach) {
            if grid.contains(row, col) {
                let (row, col) = (row as usize, col as usize);
                grid.cells[row * grid.cols + col] = 0;
                cleared.push((row, col));
            }
        }
    }

    cleared
}
