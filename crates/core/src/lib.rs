//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the rules of a falling-block game with power-ups. It has
//! no dependencies on terminals, clocks or I/O: a driver (see the engine
//! crate) decides when gravity ticks and what the player pressed, and calls
//! into [`Board`].
//!
//! # Module Structure
//!
//! - [`matrix`]: grids and shapes, collision, merge, row clearing, blast areas
//! - [`bricks`]: the seven tetrominoes and their rotation states
//! - [`generator`]: brick randomizers (uniform, 7-bag, fixed)
//! - [`rotator`]: rotation state of the active brick
//! - [`board`]: the simulation engine owning all mutable game state
//! - [`score`]: score accumulation and drop points
//! - [`powerup`]: skill points and power-up inventory
//! - [`view`]: owned snapshots for renderers
//!
//! # Rules in short
//!
//! - Rows are numbered top to bottom, the top two are a hidden spawn buffer
//! - Soft drop by the player: +1, hard drop: +2 per row travelled
//! - Clearing `n` rows at once: `50 * n * n`
//! - Every 10 score earns a skill point; partial progress carries over
//! - Power-ups: Row Clearer (bottom 3 rows), Slow Motion (driver slows
//!   gravity), Bomb Piece (next lock explodes in a 4x4 area)
//!
//! # Example
//!
//! ```
//! use powerup_tetris_core::{Board, FixedBrickGenerator};
//! use powerup_tetris_core::types::{BrickKind, PowerUp};
//!
//! let mut board = Board::with_generator(25, 10, FixedBrickGenerator::new(BrickKind::O)).unwrap();
//! board.purchase_power_up(PowerUp::BombPiece);
//! assert!(board.activate_power_up(PowerUp::BombPiece));
//!
//! board.hard_drop_brick();
//! board.merge_brick_to_background();
//! assert!(board.take_bomb_blast().is_some());
//! assert!(board.grid().is_clear());
//! ```

pub mod board;
pub mod bricks;
pub mod error;
pub mod generator;
pub mod matrix;
pub mod powerup;
pub mod rotator;
pub mod score;
pub mod view;

pub use powerup_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{BombBlast, Board, Offset};
pub use bricks::Brick;
pub use error::BoardError;
pub use generator::{
    BagBrickGenerator, BrickGenerator, FixedBrickGenerator, RandomBrickGenerator, SimpleRng,
};
pub use matrix::{
    check_removing, clear_area, clear_bottom_rows, intersect, line_clear_bonus, merge,
    BlastCells, ClearRow, Grid, Matrix, Shape,
};
pub use powerup::PowerUpEconomy;
pub use rotator::{BrickRotator, NextShape};
pub use score::{calculate_drop_score, Score};
pub use view::ViewData;
