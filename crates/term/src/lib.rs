//! Terminal "game renderer" module.
//!
//! Renders a [`RenderState`](core::RenderState) into a framebuffer of styled
//! glyphs and flushes it to the terminal with diffing. No widget toolkit; each
//! board cell is two columns wide to keep the squares roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use sidebar_tetris_core as core;
pub use sidebar_tetris_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{AnchorY, GameView, HostStatusView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
