//! Core types module - shared data structures and constants
//!
//! Plain data shared by the engine, the host link and the terminal front end.
//! Nothing in here depends on I/O.
//!
//! # Board Dimensions
//!
//! The reference playfield is the sidebar-sized one:
//!
//! - **Width**: 12 columns (indexed 0-11)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the spawn edge)
//!
//! Both are configurable per session; these are only the defaults.
//!
//! # Cell Values
//!
//! | Value | Meaning |
//! |-------|---------|
//! | 0 | empty |
//! | 1 | T |
//! | 2 | O |
//! | 3 | L |
//! | 4 | J |
//! | 5 | I |
//! | 6 | S |
//! | 7 | Z |
//!
//! # Examples
//!
//! ```
//! use sidebar_tetris_types::{cell_color, PieceKind, RotateDirection};
//!
//! let piece = PieceKind::T;
//! assert_eq!(piece.as_str(), "t");
//! assert_eq!(piece.cell_value(), 1);
//! assert!(cell_color(piece.cell_value()).is_some());
//!
//! assert_eq!(RotateDirection::Clockwise.opposite(), RotateDirection::CounterClockwise);
//! ```

/// Default board width in cells (12 columns)
pub const DEFAULT_BOARD_WIDTH: u8 = 12;

/// Default board height in cells (20 rows)
pub const DEFAULT_BOARD_HEIGHT: u8 = 20;

/// Smallest accepted board side. The I piece is four cells tall at spawn.
pub const MIN_BOARD_SIDE: u8 = 4;

/// Default gravity interval (1000ms = 1 second per row)
pub const DEFAULT_DROP_INTERVAL_MS: u64 = 1000;

/// Frame interval used by the terminal loop (16ms ≈ 60 FPS)
pub const TICK_MS: u64 = 16;

/// Points for the first row of a sweep pass; doubles for every further row
pub const LINE_CLEAR_BASE_POINTS: u32 = 10;

/// A cell on the game board
///
/// `0` is empty, `1..=7` is the identity value of the piece that settled there.
pub type Cell = u8;

/// Empty cell value
pub const EMPTY_CELL: Cell = 0;

/// Cell colors by identity value (index 0 is unused).
pub const CELL_COLORS: [(u8, u8, u8); 8] = [
    (0, 0, 0),
    (0xFF, 0x0D, 0x72),
    (0x0D, 0xC2, 0xFF),
    (0x0D, 0xFF, 0x72),
    (0xF5, 0x38, 0xFF),
    (0xFF, 0x8E, 0x0D),
    (0xFF, 0xE1, 0x38),
    (0x38, 0x77, 0xFF),
];

/// Color for a cell value, `None` for empty or unknown values.
pub fn cell_color(cell: Cell) -> Option<(u8, u8, u8)> {
    match cell {
        1..=7 => Some(CELL_COLORS[cell as usize]),
        _ => None,
    }
}

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in spawn-table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::L,
        PieceKind::J,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// Identity value written into the board for this kind.
    pub fn cell_value(&self) -> Cell {
        match self {
            PieceKind::T => 1,
            PieceKind::O => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::I => 5,
            PieceKind::S => 6,
            PieceKind::Z => 7,
        }
    }
}

/// Direction of a quarter turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotateDirection {
    Clockwise,
    CounterClockwise,
}

impl RotateDirection {
    pub fn opposite(&self) -> Self {
        match self {
            RotateDirection::Clockwise => RotateDirection::CounterClockwise,
            RotateDirection::CounterClockwise => RotateDirection::Clockwise,
        }
    }
}

/// Player inputs accepted by the engine
///
/// Movement, rotation and drop are ignored while paused; `TogglePause` is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell (lands it if blocked)
    SoftDrop,
    /// Rotate piece 90° clockwise with kicks
    RotateCw,
    /// Flip between running and paused
    TogglePause,
}

/// Signals coming from the hosting environment rather than the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostCommand {
    /// Host lost focus or visibility
    Pause,
    /// Full reinitialization; always ends in `Phase::Running`
    Reset,
}

impl HostCommand {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pause" => Some(HostCommand::Pause),
            "reset" => Some(HostCommand::Reset),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HostCommand::Pause => "pause",
            HostCommand::Reset => "reset",
        }
    }
}

/// Game phase. There is no terminal state: a blocked spawn resets the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Running,
    Paused,
}

impl Phase {
    pub fn is_running(&self) -> bool {
        matches!(self, Phase::Running)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Running => "running",
            Phase::Paused => "paused",
        }
    }
}

/// Core-side event emitted after a piece lands.
///
/// Consumed by the host for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandingEvent {
    pub piece: PieceKind,
    pub rows_cleared: u32,
    pub points: u32,
    /// The next spawn was blocked and the board was wiped.
    pub board_reset: bool,
}
