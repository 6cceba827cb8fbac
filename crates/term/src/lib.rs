//! Terminal front end.
//!
//! A small game-oriented rendering layer: [`GameView`] projects a running
//! game into a [`FrameBuffer`] of styled cells, and [`TerminalRenderer`]
//! flushes frames to a `crossterm` terminal, writing only what changed.
//! Board cells are drawn two columns wide to keep them roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use powerup_tetris_core as core;
pub use powerup_tetris_engine as engine;
pub use powerup_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
