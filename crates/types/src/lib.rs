//! Core types module - shared closed enums and constants
//!
//! Everything here is plain data with no external dependencies, so the same
//! definitions serve the core simulation, the game controller and the
//! terminal front end.
//!
//! # Board Dimensions
//!
//! The canonical playfield is 25 rows by 10 columns:
//!
//! - **Rows 0-1**: hidden spawn buffer above the visible area
//! - **Rows 2-24**: visible play area, row 24 is the floor
//! - **Spawn anchor**: column 4, row 0
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Driver frame interval (~60 FPS) |
//! | `NORMAL_DROP_MS` | 400 | Gravity interval |
//! | `SLOW_MOTION_DROP_MS` | 800 | Gravity interval while slow motion is active |
//! | `SLOW_MOTION_DURATION_MS` | 10000 | Slow motion window |
//!
//! # Examples
//!
//! ```
//! use powerup_tetris_types::{BrickKind, PowerUp, GameAction};
//!
//! assert_eq!(BrickKind::from_str("t"), Some(BrickKind::T));
//! assert_eq!(BrickKind::T.cell_value(), 6);
//!
//! assert_eq!(PowerUp::BombPiece.name(), "Bomb Piece");
//! assert_eq!(PowerUp::BombPiece.cost(), 0);
//!
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//! ```

/// Canonical board height in rows, including the hidden spawn buffer.
pub const BOARD_ROWS: usize = 25;

/// Canonical board width in columns.
pub const BOARD_COLS: usize = 10;

/// Rows at the top of the board that are not shown to the player.
pub const HIDDEN_ROWS: usize = 2;

/// Spawn row of every new brick.
pub const SPAWN_ROW: i32 = 0;

/// Largest value a grid cell may hold (one per brick kind).
pub const MAX_CELL_VALUE: u8 = 7;

/// Points for each successful player-driven soft drop step.
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points per row travelled by a hard drop.
pub const HARD_DROP_POINTS_PER_ROW: u32 = 2;

/// Base of the quadratic line clear bonus (`50 * n * n`).
pub const LINE_CLEAR_BASE: u32 = 50;

/// Score points needed for one skill point.
pub const SCORE_PER_SKILL_POINT: u32 = 10;

/// Rows removed from the bottom by the row clearer power-up.
pub const ROW_CLEARER_ROWS: usize = 3;

/// Side length of the square area a bomb piece clears.
pub const BOMB_AREA: usize = 4;

/// Driver frame interval in milliseconds.
pub const TICK_MS: u32 = 16;

/// Gravity interval in milliseconds.
pub const NORMAL_DROP_MS: u32 = 400;

/// Gravity interval while slow motion is active (half the tick rate).
pub const SLOW_MOTION_DROP_MS: u32 = NORMAL_DROP_MS * 2;

/// How long a slow motion activation lasts.
pub const SLOW_MOTION_DURATION_MS: u32 = 10_000;


/// The seven tetromino brick kinds
///
/// Each kind owns a distinct grid cell value used for color:
/// - **I**: 1, straight bar
/// - **J**: 2
/// - **L**: 3
/// - **O**: 4, 2x2 square
/// - **S**: 5
/// - **T**: 6
/// - **Z**: 7
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrickKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl BrickKind {
    /// All kinds in cell value order.
    pub const ALL: [BrickKind; 7] = [
        BrickKind::I,
        BrickKind::J,
        BrickKind::L,
        BrickKind::O,
        BrickKind::S,
        BrickKind::T,
        BrickKind::Z,
    ];

    /// Parse brick kind from string (case-insensitive)
    ///
    /// ```
    /// use powerup_tetris_types::BrickKind;
    ///
    /// assert_eq!(BrickKind::from_str("i"), Some(BrickKind::I));
    /// assert_eq!(BrickKind::from_str("Z"), Some(BrickKind::Z));
    /// assert_eq!(BrickKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(BrickKind::I),
            "j" => Some(BrickKind::J),
            "l" => Some(BrickKind::L),
            "o" => Some(BrickKind::O),
            "s" => Some(BrickKind::S),
            "t" => Some(BrickKind::T),
            "z" => Some(BrickKind::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BrickKind::I => "I",
            BrickKind::J => "J",
            BrickKind::L => "L",
            BrickKind::O => "O",
            BrickKind::S => "S",
            BrickKind::T => "T",
            BrickKind::Z => "Z",
        }
    }

    /// Value written into grid cells occupied by this kind (1..=7).
    pub fn cell_value(&self) -> u8 {
        match self {
            BrickKind::I => 1,
            BrickKind::J => 2,
            BrickKind::L => 3,
            BrickKind::O => 4,
            BrickKind::S => 5,
            BrickKind::T => 6,
            BrickKind::Z => 7,
        }
    }

    /// Inverse of [`BrickKind::cell_value`]. Zero and out-of-range values map to `None`.
    pub fn from_cell_value(value: u8) -> Option<Self> {
        match value {
            1..=MAX_CELL_VALUE => Some(Self::ALL[(value - 1) as usize]),
            _ => None,
        }
    }
}

/// Power-ups bought with skill points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerUp {
    RowClearer,
    SlowMotion,
    BombPiece,
}

impl PowerUp {
    /// All power-ups in shop order (keys 1, 2, 3).
    pub const ALL: [PowerUp; 3] = [PowerUp::RowClearer, PowerUp::SlowMotion, PowerUp::BombPiece];

    /// Stable index into per-kind tables.
    pub fn index(&self) -> usize {
        match self {
            PowerUp::RowClearer => 0,
            PowerUp::SlowMotion => 1,
            PowerUp::BombPiece => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PowerUp::RowClearer => "Row Clearer",
            PowerUp::SlowMotion => "Slow Motion",
            PowerUp::BombPiece => "Bomb Piece",
        }
    }

    /// Skill point price. Every power-up is currently free.
    pub fn cost(&self) -> u32 {
        match self {
            PowerUp::RowClearer => 0,
            PowerUp::SlowMotion => 0,
            PowerUp::BombPiece => 0,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PowerUp::RowClearer => "Clears the bottom 3 rows",
            PowerUp::SlowMotion => "Slows falling speed for 10 seconds",
            PowerUp::BombPiece => "Next piece explodes in 4x4 area on placement",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "rowClearer" => Some(PowerUp::RowClearer),
            "slowMotion" => Some(PowerUp::SlowMotion),
            "bombPiece" => Some(PowerUp::BombPiece),
            _ => None,
        }
    }
}

/// Who asked for a downward step
///
/// Only player-driven soft drops earn points; gravity ticks do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventSource {
    User,
    Tick,
}

/// Game actions a driver can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    HardDrop,
    Hold,
    UsePowerUp(PowerUp),
    BuyPowerUp(PowerUp),
    Pause,
    NewGame,
}

impl GameAction {
    /// Parse game action from its camelCase name
    ///
    /// Power-up actions are written as `use:<powerUp>` / `buy:<powerUp>`.
    pub fn from_str(s: &str) -> Option<Self> {
        if let Some(rest) = s.strip_prefix("use:") {
            return PowerUp::from_str(rest).map(GameAction::UsePowerUp);
        }
        if let Some(rest) = s.strip_prefix("buy:") {
            return PowerUp::from_str(rest).map(GameAction::BuyPowerUp);
        }
        match s {
            "moveLeft" => Some(GameAction::MoveLeft),
            "moveRight" => Some(GameAction::MoveRight),
            "softDrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            "hardDrop" => Some(GameAction::HardDrop),
            "hold" => Some(GameAction::Hold),
            "pause" => Some(GameAction::Pause),
            "newGame" => Some(GameAction::NewGame),
            _ => None,
        }
    }

    /// Actions that are still honoured while paused or after game over.
    pub fn is_meta(&self) -> bool {
        matches!(self, GameAction::Pause | GameAction::NewGame)
    }
}
