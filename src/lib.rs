//! Sidebar Tetris (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as `sidebar_tetris::{core,host,input,term,types}`.

pub use sidebar_tetris_core as core;
pub use sidebar_tetris_host as host;
pub use sidebar_tetris_input as input;
pub use sidebar_tetris_term as term;
pub use sidebar_tetris_types as types;
