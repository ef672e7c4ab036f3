//! Terminal input module.
//!
//! Maps `crossterm` events into [`TermCommand`]s: player inputs, host signals
//! (focus loss, reset) and quit. There is no key-repeat handling; the terminal's
//! own auto-repeat drives repeated moves.

pub mod map;

pub use sidebar_tetris_types as types;

pub use map::{map_event, map_key, should_quit, TermCommand};
