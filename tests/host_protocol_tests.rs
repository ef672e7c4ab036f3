//! Host link round trips over a real socket

use std::time::Duration;

use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::sync::{mpsc, oneshot};

use sidebar_tetris::core::{EngineConfig, GameState};
use sidebar_tetris::host::{run_host_server, Diagnostics, HostConfig, InboundCommand};
use sidebar_tetris::types::{HostCommand, Phase};

async fn start_server(max_pending: usize) -> (std::net::SocketAddr, mpsc::Receiver<InboundCommand>) {
    let config = HostConfig {
        port: 0,
        max_pending_commands: max_pending,
        ..HostConfig::default()
    };
    let (cmd_tx, cmd_rx) = mpsc::channel(config.max_pending_commands);
    let (ready_tx, ready_rx) = oneshot::channel();
    tokio::spawn(async move {
        let _ = run_host_server(config, cmd_tx, Some(ready_tx), Diagnostics::Stderr).await;
    });
    let addr = tokio::time::timeout(Duration::from_secs(2), ready_rx)
        .await
        .expect("server did not start")
        .expect("ready channel dropped");
    (addr, cmd_rx)
}

async fn send(
    writer: &mut tokio::net::tcp::OwnedWriteHalf,
    reader: &mut BufReader<tokio::net::tcp::OwnedReadHalf>,
    line: &str,
) -> Value {
    writer.write_all(line.as_bytes()).await.unwrap();
    writer.write_all(b"\n").await.unwrap();
    let mut reply = String::new();
    tokio::time::timeout(Duration::from_secs(2), reader.read_line(&mut reply))
        .await
        .expect("no reply")
        .unwrap();
    serde_json::from_str(&reply).unwrap()
}

#[tokio::test]
async fn pause_and_reset_are_forwarded_in_order() {
    let (addr, mut cmd_rx) = start_server(16).await;
    let (r, mut w) = TcpStream::connect(addr).await.unwrap().into_split();
    let mut r = BufReader::new(r);

    let reply = send(&mut w, &mut r, r#"{"command":"pause"}"#).await;
    assert_eq!(reply["status"], "ok");
    let reply = send(&mut w, &mut r, r#"{"command":"reset"}"#).await;
    assert_eq!(reply["status"], "ok");

    let first = cmd_rx.recv().await.unwrap();
    let second = cmd_rx.recv().await.unwrap();
    assert_eq!(first.command, HostCommand::Pause);
    assert_eq!(second.command, HostCommand::Reset);
    assert_eq!(first.client_id, second.client_id);
    assert!(first.client_id >= 1);
}

#[tokio::test]
async fn bad_lines_get_error_replies_and_connection_survives() {
    let (addr, mut cmd_rx) = start_server(16).await;
    let (r, mut w) = TcpStream::connect(addr).await.unwrap().into_split();
    let mut r = BufReader::new(r);

    let reply = send(&mut w, &mut r, "not json").await;
    assert_eq!(reply["status"], "error");

    let reply = send(&mut w, &mut r, r#"{"command":"jump"}"#).await;
    assert_eq!(reply["status"], "error");
    assert!(reply["message"].as_str().unwrap().contains("jump"));

    // Still usable after errors.
    let reply = send(&mut w, &mut r, r#"{"command":"PAUSE"}"#).await;
    assert_eq!(reply["status"], "ok");

    let got = cmd_rx.recv().await.unwrap();
    assert_eq!(got.command, HostCommand::Pause);
    assert!(cmd_rx.try_recv().is_err());
}

#[tokio::test]
async fn each_connection_gets_its_own_client_id() {
    let (addr, mut cmd_rx) = start_server(16).await;

    for _ in 0..2 {
        let (r, mut w) = TcpStream::connect(addr).await.unwrap().into_split();
        let mut r = BufReader::new(r);
        let reply = send(&mut w, &mut r, r#"{"command":"pause"}"#).await;
        assert_eq!(reply["status"], "ok");
    }

    let a = cmd_rx.recv().await.unwrap();
    let b = cmd_rx.recv().await.unwrap();
    assert_ne!(a.client_id, b.client_id);
}

#[tokio::test]
async fn forwarded_commands_drive_the_engine() {
    let (addr, mut cmd_rx) = start_server(16).await;
    let (r, mut w) = TcpStream::connect(addr).await.unwrap().into_split();
    let mut r = BufReader::new(r);

    let mut gs = GameState::new(EngineConfig::default()).unwrap();
    for _ in 0..40 {
        gs.player_drop();
    }
    assert!(!gs.board().is_empty());

    send(&mut w, &mut r, r#"{"command":"pause"}"#).await;
    let inbound = cmd_rx.recv().await.unwrap();
    gs.on_host_command(inbound.command);
    assert_eq!(gs.phase(), Phase::Paused);

    send(&mut w, &mut r, r#"{"command":"reset"}"#).await;
    let inbound = cmd_rx.recv().await.unwrap();
    gs.on_host_command(inbound.command);
    assert_eq!(gs.phase(), Phase::Running);
    assert!(gs.board().is_empty());
    assert_eq!(gs.score(), 0);
}
