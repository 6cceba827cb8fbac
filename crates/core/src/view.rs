//! View data - owned snapshot of the active, next and held bricks for renderers.
//!
//! Every matrix is an owned copy; mutating a snapshot never reaches the board.

use crate::matrix::Shape;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewData {
    /// Current rotation state of the active brick.
    pub brick: Shape,
    /// Column of the active brick's top-left anchor.
    pub x: i32,
    /// Row of the active brick's top-left anchor.
    pub y: i32,
    /// Spawn orientation of the brick that spawns next.
    pub next_brick: Shape,
    /// Spawn orientation of the held brick, if any.
    pub held_brick: Option<Shape>,
}

impl ViewData {
    /// Absolute `(row, col, value)` cells of the active brick that lie on a
    /// `rows x cols` grid.
    pub fn brick_cells(&self, rows: usize, cols: usize) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        let (x, y) = (self.x, self.y);
        self.brick.occupied().filter_map(move |(r, c, v)| {
            let row = y + r as i32;
            let col = x + c as i32;
            if row >= 0 && col >= 0 && (row as usize) < rows && (col as usize) < cols {
                Some((row as usize, col as usize, v))
            } else {
                None
            }
        })
    }
}
