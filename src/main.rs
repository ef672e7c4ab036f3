//! Terminal runner (default binary).
//!
//! The terminal stands in for the embedding host: it feeds key presses and a
//! monotonic clock to the engine, pauses on focus loss, and draws the render
//! state after every event. Host commands from the TCP link are drained
//! between frames.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};

use sidebar_tetris::core::{EngineConfig, GameState};
use sidebar_tetris::host::{EventRecord, HostLink};
use sidebar_tetris::input::{map_event, TermCommand};
use sidebar_tetris::term::{FrameBuffer, GameView, HostStatusView, TerminalRenderer, Viewport};
use sidebar_tetris::types::{HostCommand, TICK_MS};

fn main() -> Result<()> {
    // Config errors are reported before raw mode is enabled.
    let config = EngineConfig::from_env().context("invalid TETRIS_* configuration")?;
    let game_state = GameState::new(config).context("invalid engine configuration")?;
    let host = HostLink::start_from_env().context("failed to start host link")?;
    host.log(EventRecord::session(&config));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game_state, host);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut game_state: GameState, mut host: HostLink) -> Result<()> {
    let view = GameView::default();
    let host_status = HostStatusView {
        listening: host.server_enabled(),
        logging: host.logging_enabled(),
    };
    let mut fb = FrameBuffer::new(0, 0);
    let mut render_state = game_state.render_state();

    let started = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS);
    let mut last_phase = game_state.phase();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game_state.render_state_into(&mut render_state);
        view.render_into(&render_state, Some(&host_status), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next frame.
        if event::poll(tick_duration)? {
            let ev = event::read()?;
            if let Event::Resize(_, _) = ev {
                term.invalidate();
            }
            match map_event(&ev) {
                Some(TermCommand::Quit) => return Ok(()),
                Some(TermCommand::Input(input)) => {
                    game_state.apply_input(input);
                }
                Some(TermCommand::Host(cmd)) => apply_host_command(&mut game_state, &host, cmd, 0),
                None => {}
            }
        }

        while let Some(inbound) = host.try_recv() {
            apply_host_command(&mut game_state, &host, inbound.command, inbound.client_id);
        }

        game_state.tick(started.elapsed().as_millis() as u64);

        if let Some(ev) = game_state.take_last_event() {
            host.log(EventRecord::landing(&ev, game_state.score()));
        }
        if game_state.phase() != last_phase {
            last_phase = game_state.phase();
            host.log(EventRecord::phase(last_phase));
        }
    }
}

/// Client id 0 is the terminal itself.
fn apply_host_command(game_state: &mut GameState, host: &HostLink, cmd: HostCommand, client_id: usize) {
    host.log(EventRecord::host_command(cmd, client_id));
    game_state.on_host_command(cmd);
}
