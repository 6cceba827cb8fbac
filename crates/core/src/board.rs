//! Board module - the simulation engine
//!
//! The board is the single owner of the background grid, the active brick and
//! its offset, the hold slot, the score and the power-up economy. Callers get
//! borrowed views or owned copies, never a second mutable handle.
//!
//! Lifecycle of one brick: spawned by [`Board::create_new_brick`], moved by
//! the `move_*`/`rotate_*`/`hard_drop_*` attempts, then either locked with
//! [`Board::merge_brick_to_background`] or swapped out by
//! [`Board::hold_brick`] (at most once per spawn).
//!
//! Every movement operation is an attempt: it tests the candidate position
//! first and either commits fully or leaves the board untouched.
//!
//! # Example
//!
//! ```
//! use powerup_tetris_core::Board;
//!
//! let mut board = Board::new(25, 10).unwrap();
//! while board.move_brick_down() {}
//! board.merge_brick_to_background();
//! let cleared = board.clear_rows();
//! assert_eq!(cleared.lines_removed, 0);
//! assert!(!board.create_new_brick()); // spawn area still free
//! ```

use crate::bricks::Brick;
use crate::error::BoardError;
use crate::generator::{BrickGenerator, RandomBrickGenerator};
use crate::matrix::{self, BlastCells, ClearRow, Grid, Matrix, Shape};
use crate::powerup::PowerUpEconomy;
use crate::rotator::BrickRotator;
use crate::score::Score;
use crate::types::{PowerUp, ROW_CLEARER_ROWS, SPAWN_ROW};
use crate::view::ViewData;

/// Horizontal offsets tried, in order, when an in-place rotation is blocked.
pub const WALL_KICKS: [i32; 4] = [-1, 1, -2, 2];

/// Seed used by [`Board::new`].
pub const DEFAULT_SEED: u32 = 1;

/// Anchor of the active brick: `x` column, `y` row of the shape's top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

/// A bomb explosion waiting to be shown by a visual effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BombBlast {
    /// Column of the explosion center.
    pub x: i32,
    /// Row of the explosion center.
    pub y: i32,
    /// In-bounds `(row, col)` cells that were cleared.
    pub cleared: BlastCells,
}

#[derive(Debug)]
pub struct Board {
    grid: Grid,
    generator: Box<dyn BrickGenerator>,
    rotator: BrickRotator,
    offset: Offset,
    score: Score,
    economy: PowerUpEconomy,
    held: Option<Brick>,
    /// Reset on spawn, cleared by a hold
    can_hold: bool,
    /// Next merge explodes instead of placing the brick
    bomb_armed: bool,
    bomb_blast: Option<BombBlast>,
    slow_motion_requested: bool,
}

impl Board {
    /// Create a board with the default uniform randomizer and spawn the first brick.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        Self::with_generator(rows, cols, RandomBrickGenerator::new(DEFAULT_SEED))
    }

    /// Create a board drawing bricks from `generator` and spawn the first brick.
    pub fn with_generator(
        rows: usize,
        cols: usize,
        generator: impl BrickGenerator + 'static,
    ) -> Result<Self, BoardError> {
        let grid = Matrix::new(rows, cols)?;
        let mut generator: Box<dyn BrickGenerator> = Box::new(generator);
        let first = generator.get_brick();

        let mut board = Self {
            grid,
            generator,
            rotator: BrickRotator::new(first),
            offset: Offset::default(),
            score: Score::new(),
            economy: PowerUpEconomy::new(),
            held: None,
            can_hold: true,
            bomb_armed: false,
            bomb_blast: None,
            slow_motion_requested: false,
        };
        board.offset = board.spawn_offset();
        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Where new bricks appear: row 0, column 4 on a 10 wide board.
    pub fn spawn_offset(&self) -> Offset {
        Offset {
            x: (self.cols() as i32 - 2) / 2,
            y: SPAWN_ROW,
        }
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn active_brick(&self) -> &Brick {
        self.rotator.brick()
    }

    pub fn current_shape(&self) -> &Shape {
        self.rotator.current_shape()
    }

    /// Index of the active brick's rotation state.
    pub fn rotation(&self) -> usize {
        self.rotator.position()
    }

    pub fn held_brick(&self) -> Option<&Brick> {
        self.held.as_ref()
    }

    pub fn next_brick(&self) -> &Brick {
        self.generator.next_brick()
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    /// Borrow the background grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Owned copy of the background grid.
    pub fn snapshot_grid(&self) -> Grid {
        self.grid.clone()
    }

    /// Owned copies of everything a renderer needs about the bricks.
    pub fn snapshot_view(&self) -> ViewData {
        ViewData {
            brick: self.rotator.current_shape().clone(),
            x: self.offset.x,
            y: self.offset.y,
            next_brick: self.generator.next_brick().first_shape().clone(),
            held_brick: self.held.as_ref().map(|b| b.first_shape().clone()),
        }
    }

    /// Replace the background grid, e.g. to set up a puzzle position.
    ///
    /// The grid must match the board's dimensions.
    pub fn load_grid(&mut self, grid: Grid) -> Result<(), BoardError> {
        if grid.rows() != self.rows() || grid.cols() != self.cols() {
            return Err(BoardError::GridMismatch {
                expected_rows: self.rows(),
                expected_cols: self.cols(),
                rows: grid.rows(),
                cols: grid.cols(),
            });
        }
        self.grid = grid;
        Ok(())
    }

    fn collides(&self, shape: &Shape, x: i32, y: i32) -> bool {
        matrix::intersect(&self.grid, shape, x, y)
    }

    /// Try to translate the active brick.
    fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        let x = self.offset.x + dx;
        let y = self.offset.y + dy;
        if self.collides(self.rotator.current_shape(), x, y) {
            return false;
        }
        self.offset = Offset { x, y };
        true
    }

    pub fn move_brick_down(&mut self) -> bool {
        self.try_move(0, 1)
    }

    pub fn move_brick_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_brick_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// Rotate to the next state, kicking sideways if the spot is blocked.
    ///
    /// The in-place rotation is tried first, then the offsets in
    /// [`WALL_KICKS`] on the same row. Nearest kicks win, left before right.
    pub fn rotate_left_brick(&mut self) -> bool {
        let next = self.rotator.next_shape();
        let Offset { x, y } = self.offset;

        let kicked_x = std::iter::once(0)
            .chain(WALL_KICKS)
            .map(|dx| x + dx)
            .find(|&candidate| !matrix::intersect(&self.grid, next.shape, candidate, y));

        match kicked_x {
            Some(new_x) => {
                let position = next.position;
                self.rotator.set_current_shape(position);
                self.offset.x = new_x;
                true
            }
            None => false,
        }
    }

    /// Lowest row the active brick can reach straight down.
    fn landing_row(&self) -> i32 {
        let shape = self.rotator.current_shape();
        let Offset { x, mut y } = self.offset;
        let floor = self.rows() as i32;

        while y < floor && !self.collides(shape, x, y + 1) {
            y += 1;
        }
        y
    }

    /// Drop the active brick to its landing row in one jump.
    pub fn hard_drop_brick(&mut self) -> bool {
        self.offset.y = self.landing_row();
        true
    }

    /// Rows a hard drop would travel right now. Does not move the brick.
    pub fn hard_drop_distance(&self) -> u32 {
        (self.landing_row() - self.offset.y).max(0) as u32
    }

    /// Park the active brick in the hold slot, swapping with any held brick.
    ///
    /// Allowed once per spawned brick. The incoming brick is placed at the
    /// spawn position even if that overlaps the background; check
    /// [`Board::is_brick_blocked`] afterwards.
    pub fn hold_brick(&mut self) -> bool {
        if !self.can_hold {
            return false;
        }

        let incoming = match self.held.take() {
            Some(held) => held,
            None => self.generator.get_brick(),
        };
        let outgoing = self.rotator.set_brick(incoming);
        self.held = Some(outgoing);
        self.offset = self.spawn_offset();
        self.can_hold = false;
        true
    }

    /// True when the active brick overlaps locked cells, e.g. after a hold
    /// or a Row Clearer shift put background under it.
    pub fn is_brick_blocked(&self) -> bool {
        self.collides(self.rotator.current_shape(), self.offset.x, self.offset.y)
    }

    /// Spawn the next brick from the generator.
    ///
    /// Returns true when the spawn position is already blocked: the game is over.
    pub fn create_new_brick(&mut self) -> bool {
        let brick = self.generator.get_brick();
        self.rotator.set_brick(brick);
        self.offset = self.spawn_offset();
        self.can_hold = true;
        self.is_brick_blocked()
    }

    /// Lock the active brick into the grid, or detonate it if a bomb is armed.
    pub fn merge_brick_to_background(&mut self) {
        if self.bomb_armed {
            self.bomb_armed = false;
            let center = self.bomb_center();
            let cleared = self.clear_bomb_area(center.x, center.y);
            self.bomb_blast = Some(BombBlast {
                x: center.x,
                y: center.y,
                cleared,
            });
            return;
        }

        self.grid = matrix::merge(
            &self.grid,
            self.rotator.current_shape(),
            self.offset.x,
            self.offset.y,
        );
    }

    /// Remove full rows, compact the grid and report what happened.
    pub fn clear_rows(&mut self) -> ClearRow {
        let result = matrix::check_removing(&self.grid);
        self.grid = result.grid.clone();
        result
    }

    /// Start over: empty grid, zero score and economy, empty hold slot.
    pub fn new_game(&mut self) {
        self.grid.clear();
        self.score.reset();
        self.economy.reset();
        self.held = None;
        self.can_hold = true;
        self.bomb_armed = false;
        self.bomb_blast = None;
        self.slow_motion_requested = false;
        self.create_new_brick();
    }

    /// Absolute position of the active shape's first occupied cell in
    /// row-major order; the offset itself for a shape with no cells.
    fn bomb_center(&self) -> Offset {
        match self.rotator.current_shape().occupied().next() {
            Some((row, col, _)) => Offset {
                x: self.offset.x + col as i32,
                y: self.offset.y + row as i32,
            },
            None => self.offset,
        }
    }

    /// Clear the 4x4 area around column `x`, row `y`, clamped to the grid.
    pub fn clear_bomb_area(&mut self, x: i32, y: i32) -> BlastCells {
        matrix::clear_area(&mut self.grid, x, y)
    }

    /// Clear the bottom `count` rows and shift the rest down.
    pub fn clear_rows_power_up(&mut self, count: usize) -> bool {
        matrix::clear_bottom_rows(&mut self.grid, count)
    }

    /// Arm or disarm the bomb for the next merge.
    pub fn set_bomb_piece(&mut self, armed: bool) {
        self.bomb_armed = armed;
    }

    pub fn is_bomb_armed(&self) -> bool {
        self.bomb_armed
    }

    /// The last explosion, until taken.
    pub fn pending_bomb_blast(&self) -> Option<&BombBlast> {
        self.bomb_blast.as_ref()
    }

    /// Take the last explosion so its effect plays exactly once.
    pub fn take_bomb_blast(&mut self) -> Option<BombBlast> {
        self.bomb_blast.take()
    }

    /// Take a pending slow motion request raised by a power-up activation.
    pub fn take_slow_motion_request(&mut self) -> bool {
        std::mem::take(&mut self.slow_motion_requested)
    }

    pub fn score(&self) -> u32 {
        self.score.value()
    }

    pub fn add_score(&mut self, points: u32) {
        self.score.add(points);
    }

    pub fn economy(&self) -> &PowerUpEconomy {
        &self.economy
    }

    /// Convert earned score into skill points. Returns whole points gained.
    pub fn award_skill_points(&mut self, score_delta: u32) -> u32 {
        self.economy.award(score_delta)
    }

    pub fn purchase_power_up(&mut self, kind: PowerUp) -> bool {
        self.economy.purchase(kind)
    }

    /// Spend one owned `kind` and apply its effect.
    ///
    /// Fails without side effects when none is owned. Otherwise the unit is
    /// consumed first, so it is gone even if the effect itself reports failure.
    pub fn activate_power_up(&mut self, kind: PowerUp) -> bool {
        if !self.economy.activate(kind) {
            return false;
        }

        match kind {
            PowerUp::RowClearer => self.clear_rows_power_up(ROW_CLEARER_ROWS),
            PowerUp::SlowMotion => {
                self.slow_motion_requested = true;
                true
            }
            PowerUp::BombPiece => {
                self.bomb_armed = true;
                true
            }
        }
    }
}
