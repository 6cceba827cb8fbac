//! Power-up Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so binaries, integration
//! tests and benches can write `powerup_tetris::{core, engine, input, term, types}`.

pub use powerup_tetris_core as core;
pub use powerup_tetris_engine as engine;
pub use powerup_tetris_input as input;
pub use powerup_tetris_term as term;
pub use powerup_tetris_types as types;
