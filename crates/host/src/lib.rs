//! Host link - local control surface and event log
//!
//! Plays the part of the window that embeds the game: it can pause the game
//! (focus or visibility lost) and reset it, over a line-delimited JSON TCP
//! socket. Game events are appended to an optional JSONL file.
//!
//! Environment:
//! - `TETRIS_HOST_ADDR` / `TETRIS_HOST_PORT`: listen address (127.0.0.1:7878)
//! - `TETRIS_HOST_DISABLED`: `1` or `true` skips the TCP server
//! - `TETRIS_HOST_MAX_PENDING`: command queue depth (16)
//! - `TETRIS_LOG_PATH`: event log file

pub mod protocol;
pub mod runtime;
pub mod server;

pub use sidebar_tetris_types as types;

pub use protocol::{parse_host_line, EventRecord, HostReply, ParseError};
pub use runtime::HostLink;
pub use server::{run_host_server, spawn_event_log, Diagnostics, HostConfig, InboundCommand};
