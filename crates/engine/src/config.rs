//! Game configuration
//!
//! Defaults describe the canonical 25x10 board. Every field can be overridden
//! through `POWERUP_TETRIS_*` environment variables; values that fail to
//! parse fall back to the default.

use std::env;

use crate::types::{BOARD_COLS, BOARD_ROWS, TICK_MS};

pub const ENV_ROWS: &str = "POWERUP_TETRIS_ROWS";
pub const ENV_COLS: &str = "POWERUP_TETRIS_COLS";
pub const ENV_SEED: &str = "POWERUP_TETRIS_SEED";
pub const ENV_RANDOMIZER: &str = "POWERUP_TETRIS_RANDOMIZER";
pub const ENV_TICK_MS: &str = "POWERUP_TETRIS_TICK_MS";

/// Which brick generator a new game uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Randomizer {
    /// Every kind equally likely on every draw.
    #[default]
    Uniform,
    /// Shuffled bags of all seven kinds.
    Bag,
}

impl Randomizer {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uniform" | "random" => Some(Randomizer::Uniform),
            "bag" | "7bag" | "7-bag" => Some(Randomizer::Bag),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Randomizer::Uniform => "uniform",
            Randomizer::Bag => "bag",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub seed: u32,
    pub randomizer: Randomizer,
    /// Frame period of the terminal loop.
    pub tick_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: BOARD_ROWS,
            cols: BOARD_COLS,
            seed: 1,
            randomizer: Randomizer::Uniform,
            tick_ms: TICK_MS,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from any key/value source, e.g. a map in tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let number = |key: &str| lookup(key).and_then(|s| s.trim().parse::<u64>().ok());

        let rows = number(ENV_ROWS)
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(defaults.rows);
        let cols = number(ENV_COLS)
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(defaults.cols);
        let seed = number(ENV_SEED)
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(defaults.seed);
        let randomizer = lookup(ENV_RANDOMIZER)
            .and_then(|s| Randomizer::from_str(&s))
            .unwrap_or(defaults.randomizer);
        let tick_ms = number(ENV_TICK_MS)
            .and_then(|n| u32::try_from(n).ok())
            .filter(|&ms| ms > 0)
            .unwrap_or(defaults.tick_ms);

        Self {
            rows,
            cols,
            seed,
            randomizer,
            tick_ms,
        }
    }
}
