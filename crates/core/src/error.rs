//! Construction errors.
//!
//! Gameplay never fails with an error: blocked moves, empty inventories and
//! the like are reported as `false`. Only building a grid, shape or brick from
//! malformed input does.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum BoardError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell value {0} is outside 0..=7")]
    InvalidCellValue(u8),

    #[error("a brick needs at least one rotation state")]
    EmptyBrick,

    #[error("grid is {rows}x{cols}, board is {expected_rows}x{expected_cols}")]
    GridMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },
}
