//! Terminal rendering for the puzzle.
//!
//! A small, game-oriented rendering layer: the view draws a core snapshot
//! into a plain framebuffer, and the renderer flushes that framebuffer to the
//! terminal with crossterm.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_collapse_core as core;
pub use tui_collapse_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{block_rgb, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
