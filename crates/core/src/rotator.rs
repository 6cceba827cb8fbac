//! Rotator module - tracks the active brick's rotation state
//!
//! Rotation is previewed with [`BrickRotator::next_shape`] and only takes
//! effect once the caller commits the returned position with
//! [`BrickRotator::set_current_shape`], so a rotation can be tested for
//! collisions (and wall kicks) before anything changes.

use crate::bricks::Brick;
use crate::matrix::Shape;

/// A previewed rotation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextShape<'a> {
    pub shape: &'a Shape,
    /// Index to pass to `set_current_shape` to commit this rotation.
    pub position: usize,
}

#[derive(Debug, Clone)]
pub struct BrickRotator {
    brick: Brick,
    current: usize,
}

impl BrickRotator {
    pub fn new(brick: Brick) -> Self {
        Self { brick, current: 0 }
    }

    pub fn brick(&self) -> &Brick {
        &self.brick
    }

    /// Index of the current rotation state.
    pub fn position(&self) -> usize {
        self.current
    }

    pub fn current_shape(&self) -> &Shape {
        &self.brick.shapes()[self.current]
    }

    /// The following rotation state, wrapping around. Does not commit.
    pub fn next_shape(&self) -> NextShape<'_> {
        let position = (self.current + 1) % self.brick.shapes().len();
        NextShape {
            shape: &self.brick.shapes()[position],
            position,
        }
    }

    /// Commit a rotation state. Out-of-range positions wrap.
    pub fn set_current_shape(&mut self, position: usize) {
        self.current = position % self.brick.shapes().len();
    }

    /// Replace the brick and return to its spawn orientation.
    pub fn set_brick(&mut self, brick: Brick) -> Brick {
        self.current = 0;
        std::mem::replace(&mut self.brick, brick)
    }
}
