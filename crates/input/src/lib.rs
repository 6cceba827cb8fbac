//! Terminal input.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s. Holding a
//! key relies on the terminal's own auto-repeat; there is no DAS/ARR layer.

pub mod map;

pub use powerup_tetris_types as types;

pub use map::{handle_key_event, should_quit};
