//! Bricks module - tetromino rotation states
//!
//! Every brick is an ordered, cyclic list of 4x4 rotation states. Occupied
//! cells carry the brick kind's cell value. Rotating "left" walks forward
//! through the list, wrapping at the end.
//!
//! | Kind | Value | States |
//! |------|-------|--------|
//! | I | 1 | 2 |
//! | J | 2 | 4 |
//! | L | 3 | 4 |
//! | O | 4 | 1 |
//! | S | 5 | 2 |
//! | T | 6 | 4 |
//! | Z | 7 | 2 |

use std::sync::Arc;

use crate::error::BoardError;
use crate::matrix::{Matrix, Shape};
use crate::types::BrickKind;

type Raw = [[u8; 4]; 4];

const I_STATES: [Raw; 2] = [
    [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]],
    [[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0]],
];

const J_STATES: [Raw; 4] = [
    [[0, 0, 0, 0], [2, 2, 2, 0], [0, 0, 2, 0], [0, 0, 0, 0]],
    [[0, 0, 0, 0], [0, 2, 2, 0], [0, 2, 0, 0], [0, 2, 0, 0]],
    [[0, 0, 0, 0], [0, 2, 0, 0], [0, 2, 2, 2], [0, 0, 0, 0]],
    [[0, 0, 2, 0], [0, 0, 2, 0], [0, 2, 2, 0], [0, 0, 0, 0]],
];

const L_STATES: [Raw; 4] = [
    [[0, 0, 0, 0], [0, 3, 3, 3], [0, 3, 0, 0], [0, 0, 0, 0]],
    [[0, 0, 0, 0], [0, 3, 3, 0], [0, 0, 3, 0], [0, 0, 3, 0]],
    [[0, 0, 0, 0], [0, 0, 3, 0], [3, 3, 3, 0], [0, 0, 0, 0]],
    [[0, 3, 0, 0], [0, 3, 0, 0], [0, 3, 3, 0], [0, 0, 0, 0]],
];

const O_STATES: [Raw; 1] = [[[0, 0, 0, 0], [0, 4, 4, 0], [0, 4, 4, 0], [0, 0, 0, 0]]];

const S_STATES: [Raw; 2] = [
    [[0, 0, 0, 0], [0, 5, 5, 0], [5, 5, 0, 0], [0, 0, 0, 0]],
    [[5, 0, 0, 0], [5, 5, 0, 0], [0, 5, 0, 0], [0, 0, 0, 0]],
];

const T_STATES: [Raw; 4] = [
    [[0, 0, 0, 0], [6, 6, 6, 0], [0, 6, 0, 0], [0, 0, 0, 0]],
    [[0, 6, 0, 0], [6, 6, 0, 0], [0, 6, 0, 0], [0, 0, 0, 0]],
    [[0, 6, 0, 0], [6, 6, 6, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    [[0, 6, 0, 0], [0, 6, 6, 0], [0, 6, 0, 0], [0, 0, 0, 0]],
];

const Z_STATES: [Raw; 2] = [
    [[0, 0, 0, 0], [7, 7, 0, 0], [0, 7, 7, 0], [0, 0, 0, 0]],
    [[0, 7, 0, 0], [7, 7, 0, 0], [7, 0, 0, 0], [0, 0, 0, 0]],
];

fn raw_states(kind: BrickKind) -> &'static [Raw] {
    match kind {
        BrickKind::I => &I_STATES,
        BrickKind::J => &J_STATES,
        BrickKind::L => &L_STATES,
        BrickKind::O => &O_STATES,
        BrickKind::S => &S_STATES,
        BrickKind::T => &T_STATES,
        BrickKind::Z => &Z_STATES,
    }
}

/// A brick: its rotation states, shared cheaply between generator, rotator
/// and the hold slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brick {
    kind: Option<BrickKind>,
    shapes: Arc<[Shape]>,
}

impl Brick {
    /// One of the seven catalog tetrominoes.
    pub fn tetromino(kind: BrickKind) -> Self {
        let shapes: Vec<Shape> = raw_states(kind)
            .iter()
            .map(Matrix::from_array)
            .collect();
        Self {
            kind: Some(kind),
            shapes: shapes.into(),
        }
    }

    /// A brick outside the catalog, e.g. a single cell for scripted tests.
    pub fn from_shapes(shapes: Vec<Shape>) -> Result<Self, BoardError> {
        if shapes.is_empty() {
            return Err(BoardError::EmptyBrick);
        }
        Ok(Self {
            kind: None,
            shapes: shapes.into(),
        })
    }

    /// Catalog kind, `None` for custom bricks.
    pub fn kind(&self) -> Option<BrickKind> {
        self.kind
    }

    /// Rotation states in rotation order. Never empty.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// The spawn orientation, also used for next/held previews.
    pub fn first_shape(&self) -> &Shape {
        &self.shapes[0]
    }
}

impl From<BrickKind> for Brick {
    fn from(kind: BrickKind) -> Self {
        Brick::tetromino(kind)
    }
}
