//! TCP server for host commands
//!
//! Accepts any number of local connections. Each line is parsed, forwarded to
//! the game loop and answered with a single reply line. A malformed line gets
//! an error reply and the connection stays open.

use std::net::SocketAddr;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{mpsc, oneshot};

use crate::protocol::{parse_host_line, EventRecord, HostReply};
use crate::types::HostCommand;

pub const ENV_HOST_ADDR: &str = "TETRIS_HOST_ADDR";
pub const ENV_HOST_PORT: &str = "TETRIS_HOST_PORT";
pub const ENV_HOST_DISABLED: &str = "TETRIS_HOST_DISABLED";
pub const ENV_HOST_MAX_PENDING: &str = "TETRIS_HOST_MAX_PENDING";
pub const ENV_LOG_PATH: &str = "TETRIS_LOG_PATH";

/// Host link configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: String,
    /// 0 binds an ephemeral port.
    pub port: u16,
    pub max_pending_commands: usize,
    /// JSONL event log; None disables logging.
    pub log_path: Option<String>,
    /// Skip the TCP server (the event log still runs).
    pub disabled: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7878,
            max_pending_commands: 16,
            log_path: None,
            disabled: false,
        }
    }
}

impl HostConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable source. Unusable values fall back to
    /// the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup(ENV_HOST_ADDR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.host);
        let port = lookup(ENV_HOST_PORT)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.port);

        let max_pending_commands = lookup(ENV_HOST_MAX_PENDING)
            .and_then(|s| s.trim().parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(defaults.max_pending_commands);

        let log_path = lookup(ENV_LOG_PATH)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let disabled = lookup(ENV_HOST_DISABLED)
            .map(|v| {
                let v = v.trim();
                v == "1" || v.eq_ignore_ascii_case("true")
            })
            .unwrap_or(false);

        Self {
            host,
            port,
            max_pending_commands,
            log_path,
            disabled,
        }
    }
}

/// Where the server reports connection-level problems.
///
/// Once the terminal front end owns the screen, anything written to stderr
/// lands on top of the game frame, so the host link sends these to the event
/// log instead (or drops them when there is no log).
#[derive(Debug, Clone)]
pub enum Diagnostics {
    Stderr,
    EventLog(mpsc::UnboundedSender<EventRecord>),
    Discard,
}

impl Diagnostics {
    pub fn report(&self, message: impl Into<String>) {
        let message = message.into();
        match self {
            Diagnostics::Stderr => eprintln!("[Host] {}", message),
            Diagnostics::EventLog(tx) => {
                let _ = tx.send(EventRecord::diagnostic(message));
            }
            Diagnostics::Discard => {}
        }
    }
}

/// Command delivered to the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InboundCommand {
    pub client_id: usize,
    pub command: HostCommand,
}

/// Run the command server until the listener fails.
///
/// `ready_tx` receives the bound address once the listener is up. If the bind
/// fails the error is returned and `ready_tx` is dropped unsent.
pub async fn run_host_server(
    config: HostConfig,
    command_tx: mpsc::Sender<InboundCommand>,
    ready_tx: Option<oneshot::Sender<SocketAddr>>,
    diagnostics: Diagnostics,
) -> anyhow::Result<()> {
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    let bound = listener.local_addr()?;
    diagnostics.report(format!("listening on {}", bound));
    if let Some(tx) = ready_tx {
        let _ = tx.send(bound);
    }

    let mut client_id_counter = 0usize;

    loop {
        let (socket, addr) = listener.accept().await?;
        client_id_counter += 1;
        let client_id = client_id_counter;
        let command_tx = command_tx.clone();
        let diagnostics = diagnostics.clone();

        tokio::spawn(async move {
            if let Err(e) = handle_client(socket, client_id, command_tx).await {
                diagnostics.report(format!("client {} ({}) error: {}", client_id, addr, e));
            }
        });
    }
}

/// Handle a single client connection
async fn handle_client(
    socket: TcpStream,
    client_id: usize,
    command_tx: mpsc::Sender<InboundCommand>,
) -> anyhow::Result<()> {
    let (reader, mut writer) = tokio::io::split(socket);
    let mut reader = BufReader::new(reader);
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;
        if bytes_read == 0 {
            // Client disconnected
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let reply = match parse_host_line(trimmed) {
            Ok(command) => match command_tx.try_send(InboundCommand { client_id, command }) {
                Ok(()) => HostReply::Ok,
                Err(mpsc::error::TrySendError::Full(_)) => HostReply::error("command queue full"),
                Err(mpsc::error::TrySendError::Closed(_)) => {
                    writer
                        .write_all(HostReply::error("game is shutting down").to_line().as_bytes())
                        .await?;
                    break;
                }
            },
            Err(e) => HostReply::error(e.to_string()),
        };

        writer.write_all(reply.to_line().as_bytes()).await?;
        writer.flush().await?;
    }

    Ok(())
}

/// Open (or create) the JSONL event log and spawn its writer task on the
/// current runtime.
///
/// Records are appended to `path`, one per line. Opening happens before the
/// task starts, so a bad path is reported to the caller.
pub async fn spawn_event_log(path: &str) -> std::io::Result<mpsc::UnboundedSender<EventRecord>> {
    use tokio::fs::OpenOptions;

    let mut file = OpenOptions::new().create(true).append(true).open(path).await?;
    let (tx, mut rx) = mpsc::unbounded_channel::<EventRecord>();

    tokio::spawn(async move {
        let mut buf: Vec<u8> = Vec::with_capacity(256);

        while let Some(rec) = rx.recv().await {
            buf.clear();
            if serde_json::to_writer(&mut buf, &rec).is_err() {
                continue;
            }
            buf.push(b'\n');
            if file.write_all(&buf).await.is_err() {
                break;
            }
            if file.flush().await.is_err() {
                break;
            }
        }

        let _ = file.flush().await;
    });

    Ok(tx)
}
