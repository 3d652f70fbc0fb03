//! TUI Collapse (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, the
//! integration tests and the benches can use `tui_collapse::{core,input,term,types}`.

pub use tui_collapse_core as core;
pub use tui_collapse_input as input;
pub use tui_collapse_term as term;
pub use tui_collapse_types as types;
