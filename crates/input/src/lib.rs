//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::PlayerAction`]. The puzzle
//! is turn based, so there is no key-repeat handling: every press is one action.

pub mod map;

pub use tui_collapse_types as types;

pub use map::{handle_key_event, should_quit};
