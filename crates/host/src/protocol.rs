//! Protocol module - JSON line messages for the host link
//!
//! Inbound (one object per line):
//!
//! ```text
//! {"command":"pause"}
//! {"command":"reset"}
//! ```
//!
//! Every inbound line gets exactly one reply line:
//!
//! ```text
//! {"status":"ok"}
//! {"status":"error","message":"unknown command: jump"}
//! ```
//!
//! The event log uses the same encoding, one [`EventRecord`] per line.

use serde::{Deserialize, Serialize};

use sidebar_tetris_core::EngineConfig;

use crate::types::{HostCommand, LandingEvent};

// ============== Host -> Game Messages ==============

/// Raw inbound message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMessage {
    pub command: String,
}

/// Why an inbound line was rejected
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid message: {0}")]
    InvalidJson(String),
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

/// Parse one inbound line (without the trailing newline).
pub fn parse_host_line(line: &str) -> Result<HostCommand, ParseError> {
    let msg: CommandMessage =
        serde_json::from_str(line.trim()).map_err(|e| ParseError::InvalidJson(e.to_string()))?;
    HostCommand::from_str(&msg.command).ok_or(ParseError::UnknownCommand(msg.command))
}

// ============== Game -> Host Messages ==============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum HostReply {
    Ok,
    Error { message: String },
}

impl HostReply {
    pub fn error(message: impl Into<String>) -> Self {
        HostReply::Error {
            message: message.into(),
        }
    }

    /// Reply line including the trailing newline.
    pub fn to_line(&self) -> String {
        let mut line = serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"));
        line.push('\n');
        line
    }
}

// ============== Event Log ==============

/// One line of the JSONL event log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EventRecord {
    Session {
        ts: u64,
        width: u8,
        height: u8,
        drop_interval_ms: u64,
        seed: u32,
        randomizer: String,
    },
    Landing {
        ts: u64,
        piece: String,
        rows_cleared: u32,
        points: u32,
        board_reset: bool,
        score: u32,
    },
    HostCommand {
        ts: u64,
        command: String,
        client_id: usize,
    },
    Phase {
        ts: u64,
        phase: String,
    },
    /// Connection-level message from the host server.
    Diagnostic {
        ts: u64,
        message: String,
    },
}

impl EventRecord {
    pub fn session(config: &EngineConfig) -> Self {
        EventRecord::Session {
            ts: current_timestamp_ms(),
            width: config.board_width,
            height: config.board_height,
            drop_interval_ms: config.drop_interval_ms,
            seed: config.seed,
            randomizer: config.randomizer.as_str().to_string(),
        }
    }

    /// `score` is the total after the landing was applied.
    pub fn landing(event: &LandingEvent, score: u32) -> Self {
        EventRecord::Landing {
            ts: current_timestamp_ms(),
            piece: event.piece.as_str().to_string(),
            rows_cleared: event.rows_cleared,
            points: event.points,
            board_reset: event.board_reset,
            score,
        }
    }

    pub fn host_command(command: HostCommand, client_id: usize) -> Self {
        EventRecord::HostCommand {
            ts: current_timestamp_ms(),
            command: command.as_str().to_string(),
            client_id,
        }
    }

    pub fn phase(phase: crate::types::Phase) -> Self {
        EventRecord::Phase {
            ts: current_timestamp_ms(),
            phase: phase.as_str().to_string(),
        }
    }

    pub fn diagnostic(message: impl Into<String>) -> Self {
        EventRecord::Diagnostic {
            ts: current_timestamp_ms(),
            message: message.into(),
        }
    }
}

/// Get current timestamp in milliseconds
pub fn current_timestamp_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
