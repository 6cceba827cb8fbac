//! Game driver
//!
//! Wraps a [`Board`](crate::core::Board) with everything that depends on
//! events and time: what a soft drop or hard drop means, scoring and skill
//! awards, pause and game over, and the gravity timer with its slow motion
//! window. Nothing here touches a terminal.

pub mod config;
pub mod game;
pub mod timer;

pub use powerup_tetris_core as core;
pub use powerup_tetris_types as types;

pub use config::{GameConfig, Randomizer};
pub use game::{DownData, Game};
pub use timer::DropTimer;
