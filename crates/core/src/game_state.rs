//! Game state module - the engine instance
//!
//! Owns the board, the falling piece, the score, the phase and the drop timer,
//! and routes every external event through them. All operations are total:
//! a blocked move or rotation is a no-op, a blocked spawn wipes the board.

use crate::collision::collide;
use crate::config::{ConfigError, EngineConfig};
use crate::pieces::{create_piece, Shape};
use crate::rotation::rotate_with_kicks;
use crate::scoring::sweep;
use crate::snapshot::{ActiveSnapshot, RenderState};
use crate::timing::DropTimer;
use crate::types::*;
use crate::{Board, PieceQueue};

/// Active falling piece
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    /// Board column of the shape's left edge
    pub x: i16,
    /// Board row of the shape's top edge
    pub y: i16,
}

impl ActivePiece {
    /// Fresh piece at the spawn position: top row, horizontally centred.
    pub fn spawn(kind: PieceKind, board_width: u8) -> Self {
        let shape = create_piece(kind);
        let x = (board_width / 2) as i16 - (shape.width() / 2) as i16;
        Self { kind, shape, x, y: 0 }
    }

    /// Occupied cells in board coordinates
    pub fn cells(&self) -> impl Iterator<Item = (i16, i16, Cell)> + '_ {
        self.shape
            .occupied()
            .map(move |(dx, dy, v)| (self.x + dx, self.y + dy, v))
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: EngineConfig,
    board: Board,
    active: ActivePiece,
    queue: PieceQueue,
    timer: DropTimer,
    score: u32,
    phase: Phase,
    /// Last landing (consumed by the host for logging).
    last_event: Option<LandingEvent>,
}

impl GameState {
    /// Create a running game with a piece already at spawn.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: EngineConfig) -> Self {
        let mut queue = PieceQueue::new(config.seed, config.randomizer);
        let active = ActivePiece::spawn(queue.draw(), config.board_width);

        Self {
            config,
            board: Board::new(config.board_width, config.board_height),
            active,
            queue,
            timer: DropTimer::new(config.drop_interval_ms),
            score: 0,
            phase: Phase::Running,
            last_event: None,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        !self.phase.is_running()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn drop_timer(&self) -> &DropTimer {
        &self.timer
    }

    /// Take the last landing event (if any).
    pub fn take_last_event(&mut self) -> Option<LandingEvent> {
        self.last_event.take()
    }

    /// Dispatch one user input. Returns true if the state changed.
    pub fn apply_input(&mut self, input: InputEvent) -> bool {
        match input {
            InputEvent::MoveLeft => self.player_move(-1),
            InputEvent::MoveRight => self.player_move(1),
            InputEvent::SoftDrop => {
                if self.paused() {
                    return false;
                }
                self.player_drop();
                // Manual drop starts a fresh gravity interval.
                self.timer.restart();
                true
            }
            InputEvent::RotateCw => self.player_rotate(RotateDirection::Clockwise),
            InputEvent::TogglePause => {
                self.phase = match self.phase {
                    Phase::Running => Phase::Paused,
                    Phase::Paused => Phase::Running,
                };
                true
            }
        }
    }

    /// Shift the piece sideways by `dx`. Blocked moves are ignored.
    pub fn player_move(&mut self, dx: i16) -> bool {
        if self.paused() {
            return false;
        }
        self.active.x += dx;
        if collide(&self.board, &self.active) {
            self.active.x -= dx;
            return false;
        }
        true
    }

    /// Rotate with kicks; see [`rotate_with_kicks`].
    pub fn player_rotate(&mut self, dir: RotateDirection) -> bool {
        if self.paused() {
            return false;
        }
        rotate_with_kicks(&self.board, &mut self.active, dir)
    }

    /// One drop step: move down, or land and spawn the next piece.
    ///
    /// Landing order is merge, sweep, spawn.
    pub fn player_drop(&mut self) {
        if self.paused() {
            return;
        }

        self.active.y += 1;
        if !collide(&self.board, &self.active) {
            return;
        }
        self.active.y -= 1;

        let kind = self.active.kind;
        self.board.merge(self.active.shape.occupied(), self.active.x, self.active.y);
        let swept = sweep(&mut self.board);
        self.score = self.score.saturating_add(swept.points);
        let board_reset = self.spawn_piece();

        self.last_event = Some(LandingEvent {
            piece: kind,
            rows_cleared: swept.rows_cleared,
            points: swept.points,
            board_reset,
        });
    }

    /// Put the next piece at spawn.
    ///
    /// If it overlaps the board the board is wiped and the score zeroed; the
    /// new piece stays where it spawned. Returns true in that case.
    pub fn spawn_piece(&mut self) -> bool {
        self.active = ActivePiece::spawn(self.queue.draw(), self.board.width());
        if collide(&self.board, &self.active) {
            self.board.clear_all();
            self.score = 0;
            return true;
        }
        false
    }

    /// Host lost focus or asked us to pause.
    pub fn on_external_pause(&mut self) {
        self.phase = Phase::Paused;
    }

    /// Full reinitialization: empty board, fresh piece, score 0, Running.
    pub fn on_external_reset(&mut self) {
        self.board.clear_all();
        self.score = 0;
        self.spawn_piece();
        self.phase = Phase::Running;
    }

    pub fn on_host_command(&mut self, cmd: HostCommand) {
        match cmd {
            HostCommand::Pause => self.on_external_pause(),
            HostCommand::Reset => self.on_external_reset(),
        }
    }

    /// Feed a host timestamp (ms). Runs at most one drop step and returns
    /// true if it did.
    pub fn tick(&mut self, timestamp_ms: u64) -> bool {
        if !self.timer.advance(timestamp_ms, self.phase.is_running()) {
            return false;
        }
        self.player_drop();
        self.timer.restart();
        true
    }

    pub fn render_state(&self) -> RenderState {
        RenderState {
            width: self.board.width(),
            height: self.board.height(),
            board: self.board.cells().to_vec(),
            active: self.active_snapshot(),
            score: self.score,
            phase: self.phase,
        }
    }

    /// Refresh `out` in place, reusing its board buffer.
    pub fn render_state_into(&self, out: &mut RenderState) {
        out.width = self.board.width();
        out.height = self.board.height();
        self.board.write_cells_into(&mut out.board);
        out.active = self.active_snapshot();
        out.score = self.score;
        out.phase = self.phase;
    }

    fn active_snapshot(&self) -> ActiveSnapshot {
        ActiveSnapshot {
            kind: self.active.kind,
            shape: self.active.shape.clone(),
            x: self.active.x,
            y: self.active.y,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_valid_config(EngineConfig::default())
    }
}
