//! GameView: maps a [`RenderState`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::RenderState;
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{cell_color, Cell, EMPTY_CELL};

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// What the side panel shows about the host link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HostStatusView {
    pub listening: bool,
    pub logging: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Where the board frame landed in the viewport.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Callers can reuse the framebuffer across frames.
    pub fn render_into(
        &self,
        state: &RenderState,
        host: Option<&HostStatusView>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let board_px_w = state.width as u16 * self.cell_w;
        let board_px_h = state.height as u16 * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let frame = Frame {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
                AnchorY::Top => 0,
            },
            w: frame_w,
            h: frame_h,
        };

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            board_px_w,
            board_px_h,
            ' ',
            Style::plain(Rgb::new(80, 80, 90), PLAY_BG),
        );
        self.draw_border(fb, frame, Style::plain(Rgb::new(200, 200, 200), PANEL_BG));

        // Settled cells with the falling piece on top.
        for y in 0..state.height as i16 {
            for x in 0..state.width as i16 {
                let v = state.visible_cell(x, y).unwrap_or(EMPTY_CELL);
                self.draw_cell(fb, frame, x as u16, y as u16, v);
            }
        }

        self.draw_side_panel(fb, state, host, viewport, frame);

        if state.paused() {
            self.draw_overlay_text(fb, frame, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        state: &RenderState,
        host: Option<&HostStatusView>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, host, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, f: Frame, style: Style) {
        if f.w < 2 || f.h < 2 {
            return;
        }

        fb.put_char(f.x, f.y, '┌', style);
        fb.put_char(f.x + f.w - 1, f.y, '┐', style);
        fb.put_char(f.x, f.y + f.h - 1, '└', style);
        fb.put_char(f.x + f.w - 1, f.y + f.h - 1, '┘', style);

        for dx in 1..f.w - 1 {
            fb.put_char(f.x + dx, f.y, '─', style);
            fb.put_char(f.x + dx, f.y + f.h - 1, '─', style);
        }
        for dy in 1..f.h - 1 {
            fb.put_char(f.x, f.y + dy, '│', style);
            fb.put_char(f.x + f.w - 1, f.y + dy, '│', style);
        }
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, f: Frame, x: u16, y: u16, v: Cell) {
        let (ch, style) = match cell_color(v) {
            Some(rgb) => ('█', Style::plain(Rgb::from(rgb), PLAY_BG).bold()),
            None => ('·', Style::plain(Rgb::new(90, 90, 100), PLAY_BG).dim()),
        };
        let px = f.x + 1 + x * self.cell_w;
        let py = f.y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &RenderState,
        host: Option<&HostStatusView>,
        viewport: Viewport,
        f: Frame,
    ) {
        let panel_x = f.x.saturating_add(f.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = Style::plain(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = Style::plain(Rgb::new(200, 200, 200), PANEL_BG);
        let hint = value.dim();

        let mut y = f.y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, state.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "STATE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, if state.paused() { "paused" } else { "running" }, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "HOST", label);
        y = y.saturating_add(1);
        match host {
            Some(st) => {
                fb.put_str(panel_x, y, if st.listening { "ON" } else { "OFF" }, value);
                if st.logging {
                    fb.put_str(panel_x + 4, y, "log", hint);
                }
            }
            None => {
                fb.put_str(panel_x, y, "OFF", value);
            }
        }
        y = y.saturating_add(2);

        for line in ["←→ move", "↓  drop", "↑  rotate", "SPC pause", "r  reset", "q  quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, f: Frame, text: &str) {
        let mid_y = f.y.saturating_add(f.h / 2);
        let text_w = text.chars().count() as u16;
        let x = f.x.saturating_add(f.w.saturating_sub(text_w) / 2);
        let style = Style::plain(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}
