//! Core game logic - the rules engine of the tile-matching puzzle
//!
//! This crate contains the grid, match detection, gravity and the color
//! randomizer, plus a small session type that drives them turn by turn.
//! It has no dependencies on UI, terminal or I/O, which keeps it:
//!
//! - **Deterministic**: the same seed produces the same boards
//! - **Testable**: every rule is a plain function over a [`Grid`]
//! - **Allocation-free on the hot path**: flood fill and gravity work in place
//!
//! # Module Structure
//!
//! - [`grid`]: 8x14 block storage with strict and permissive accessors
//! - [`matcher`]: flood fill marking, flag clearing and deletion
//! - [`gravity`]: one-row-per-step drops and center-ward column collapse
//! - [`history`]: bounded FIFO of recent values
//! - [`rng`]: deterministic LCG and the repeat-avoiding [`Randomizer`]
//! - [`palette`]: color sets per difficulty tier
//! - [`config`]: session settings with environment overrides
//! - [`game_state`]: the turn loop tying everything together
//!
//! # Turn Flow
//!
//! 1. [`Grid::find_matches`] marks the group under the selected cell
//! 2. If the group is large enough, [`Grid::delete_marked`] removes it,
//!    otherwise [`Grid::clear_flags`] forgets it
//! 3. [`Grid::apply_gravity`] is called repeatedly until it returns false
//!
//! # Example
//!
//! ```
//! use tui_collapse_core::Grid;
//! use tui_collapse_types::{Block, ColorId};
//!
//! let mut grid = Grid::new();
//! grid.set(7, 13, Block::new(ColorId::Red));
//! grid.set(7, 12, Block::new(ColorId::Red));
//!
//! assert_eq!(grid.find_matches(7, 13), 2);
//! grid.delete_marked();
//! assert!(grid.is_empty());
//! assert!(!grid.apply_gravity());
//! ```

pub mod config;
pub mod game_state;
pub mod gravity;
pub mod grid;
pub mod history;
pub mod matcher;
pub mod palette;
pub mod rng;
pub mod snapshot;

pub use tui_collapse_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use game_state::GameState;
pub use gravity::GravityStep;
pub use grid::Grid;
pub use history::History;
pub use palette::{color_set, color_set_by_id};
pub use rng::{RandomSource, Randomizer, SimpleRng};
pub use snapshot::{GameSnapshot, Phase};
