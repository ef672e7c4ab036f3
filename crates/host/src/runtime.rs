//! Host link runtime integration.
//!
//! Bridges the sync game loop with the async TCP server and the event log.
//! The game loop drains commands with [`HostLink::try_recv`] between ticks, so
//! every engine mutation still happens on the loop thread.

use anyhow::{anyhow, Context};
use tokio::runtime::Runtime;
use tokio::sync::{mpsc, oneshot};

use crate::protocol::EventRecord;
use crate::server::{run_host_server, spawn_event_log, Diagnostics, HostConfig, InboundCommand};

/// Running host link instance.
pub struct HostLink {
    _rt: Runtime,
    cmd_rx: mpsc::Receiver<InboundCommand>,
    log_tx: Option<mpsc::UnboundedSender<EventRecord>>,
    server_enabled: bool,
}

impl HostLink {
    /// Start the host link from environment variables.
    pub fn start_from_env() -> anyhow::Result<Self> {
        Self::start(HostConfig::from_env())
    }

    /// Open the event log and bind the server before returning, so every
    /// startup failure reaches the caller while stderr is still usable.
    /// Later connection problems go to the event log.
    pub fn start(config: HostConfig) -> anyhow::Result<Self> {
        let max_pending = config.max_pending_commands.max(1);
        let (cmd_tx, cmd_rx) = mpsc::channel::<InboundCommand>(max_pending);

        let rt = Runtime::new().context("failed to create tokio runtime")?;

        let log_tx = match config.log_path.as_deref() {
            Some(path) => Some(
                rt.block_on(spawn_event_log(path))
                    .with_context(|| format!("failed to open event log {}", path))?,
            ),
            None => None,
        };
        let diagnostics = match &log_tx {
            Some(tx) => Diagnostics::EventLog(tx.clone()),
            None => Diagnostics::Discard,
        };

        let server_enabled = !config.disabled;
        if server_enabled {
            let addr = format!("{}:{}", config.host, config.port);
            let (ready_tx, ready_rx) = oneshot::channel();
            let server = rt.spawn(async move {
                let result =
                    run_host_server(config, cmd_tx, Some(ready_tx), diagnostics.clone()).await;
                if let Err(e) = &result {
                    diagnostics.report(format!("server stopped: {}", e));
                }
                result
            });

            if rt.block_on(ready_rx).is_err() {
                // The sender is only dropped unsent when the server returned early.
                let err = match rt.block_on(server) {
                    Ok(Err(e)) => e,
                    Ok(Ok(())) => anyhow!("host server exited before binding"),
                    Err(e) => anyhow::Error::new(e),
                };
                return Err(err.context(format!("failed to bind host server on {}", addr)));
            }
        }

        Ok(Self {
            _rt: rt,
            cmd_rx,
            log_tx,
            server_enabled,
        })
    }

    pub fn server_enabled(&self) -> bool {
        self.server_enabled
    }

    pub fn logging_enabled(&self) -> bool {
        self.log_tx.is_some()
    }

    pub fn try_recv(&mut self) -> Option<InboundCommand> {
        self.cmd_rx.try_recv().ok()
    }

    /// Queue a record for the event log (no-op when logging is off).
    pub fn log(&self, record: EventRecord) {
        if let Some(tx) = self.log_tx.as_ref() {
            let _ = tx.send(record);
        }
    }
}
