//! Core game logic - pure, deterministic, and testable
//!
//! Everything that decides what happens on the board lives here. There is no
//! I/O: time comes in as timestamps, input as [`InputEvent`](types::InputEvent)
//! values, and the outside world reads the game through
//! [`RenderState`](snapshot::RenderState).
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid of settled cells
//! - [`pieces`]: the seven shape matrices and their rotation
//! - [`collision`]: piece/board overlap test
//! - [`rotation`]: rotation with the horizontal kick search
//! - [`scoring`]: line sweep with the doubling multiplier
//! - [`timing`]: gravity accumulator
//! - [`rng`]: seeded piece source (uniform or 7-bag)
//! - [`config`]: validated engine settings
//! - [`game_state`]: the engine instance tying it all together
//! - [`snapshot`]: read-only render view
//!
//! # Game Rules
//!
//! - The board is 12x20 by default; row 0 is the top.
//! - A piece that cannot fall further is merged, full rows are swept, then the
//!   next piece spawns. If the spawn overlaps the board, the board is wiped and
//!   the score goes back to 0; there is no game over.
//! - Each row removed in one sweep is worth twice the previous: 10, 20, 40, ...
//! - Gravity moves the piece one row whenever more than the drop interval
//!   (1000ms by default) has accumulated while running.
//!
//! # Example
//!
//! ```
//! use sidebar_tetris_core::{EngineConfig, GameState};
//! use sidebar_tetris_types::{InputEvent, Phase};
//!
//! let mut game = GameState::new(EngineConfig::default()).unwrap();
//!
//! game.apply_input(InputEvent::MoveRight);
//! game.apply_input(InputEvent::RotateCw);
//! game.apply_input(InputEvent::SoftDrop);
//!
//! // Time only counts while running.
//! game.tick(0);
//! assert!(game.tick(1001));
//!
//! game.apply_input(InputEvent::TogglePause);
//! assert_eq!(game.phase(), Phase::Paused);
//! assert!(!game.tick(5000));
//! ```

pub mod board;
pub mod collision;
pub mod config;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod rotation;
pub mod scoring;
pub mod snapshot;
pub mod timing;

pub use sidebar_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::collide;
pub use config::{ConfigError, EngineConfig};
pub use game_state::{ActivePiece, GameState};
pub use pieces::{create_piece, Shape};
pub use rng::{PieceQueue, Randomizer, SimpleRng};
pub use rotation::rotate_with_kicks;
pub use scoring::{sweep, SweepResult};
pub use snapshot::{ActiveSnapshot, RenderState};
pub use timing::DropTimer;
