//! GameView: maps an engine snapshot into a terminal framebuffer.
//!
//! Pure, no I/O. Engine coordinates are pixels; the view divides by the cell
//! size to get grid cells and skips anything outside the visible grid (the
//! engine allows one off-screen column on the left and rows above the top).

use gridfall_engine::{Cell, State};
use gridfall_types::{BlockColor, CELL_HEIGHT, CELL_WIDTH, GRID_HEIGHT, GRID_WIDTH};

use crate::fb::{FrameBuffer, Rgb, Style};

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

/// Renders one snapshot per frame into a centered board plus side panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render a snapshot. `paused` lives in the event loop, not the engine,
    /// so it is passed in alongside.
    pub fn render(&self, state: &State, paused: bool, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(Style::default().glyph(' '));

        let board_w = (GRID_WIDTH as u16) * self.cell_w;
        let board_h = (GRID_HEIGHT as u16) * self.cell_h;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w + PANEL_WIDTH) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = Style {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: true,
        };
        fb.fill_rect(start_x + 1, start_y + 1, board_w, board_h, '·', bg);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h);

        // Ghost first so the active piece paints over any overlap.
        if let Some(ghost) = &state.ghost {
            for cell in &ghost.cells {
                self.draw_cell(&mut fb, start_x, start_y, cell, '░', true);
            }
        }

        for block in &state.blocks {
            self.draw_cell(&mut fb, start_x, start_y, block, '█', false);
        }

        if let Some(current) = &state.current {
            for cell in &current.cells {
                self.draw_cell(&mut fb, start_x, start_y, cell, '█', false);
            }
        }

        // One-frame flash where rows just cleared.
        for cell in &state.cleared_blocks {
            if let Some((gx, gy)) = grid_position(cell) {
                let flash = Style {
                    fg: Rgb::new(255, 255, 255),
                    bg: Rgb::new(30, 30, 40),
                    bold: true,
                    dim: false,
                };
                self.fill_cell_rect(&mut fb, start_x, start_y, gx, gy, '▒', flash);
            }
        }

        self.draw_side_panel(&mut fb, state, viewport, start_x, start_y, frame_w);

        if paused {
            self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        } else if state.game_end {
            self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }

        fb
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell: &Cell,
        ch: char,
        dim: bool,
    ) {
        let Some((gx, gy)) = grid_position(cell) else {
            return;
        };
        let style = Style {
            fg: color_rgb(cell.color),
            bg: Rgb::new(30, 30, 40),
            bold: !dim,
            dim,
        };
        self.fill_cell_rect(fb, start_x, start_y, gx, gy, ch, style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        gx: u16,
        gy: u16,
        ch: char,
        style: Style,
    ) {
        let px = start_x + 1 + gx * self.cell_w;
        let py = start_y + 1 + gy * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = Style {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &State,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x + 8 >= viewport.width {
            return;
        }

        let label = Style {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = Style {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let mut y = start_y;
        for (name, amount) in [
            ("SCORE", state.points),
            ("HIGH", state.highscore),
            ("LEVEL", state.level),
            ("LINES", state.line_clears),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_str(panel_x, y + 1, &amount.to_string(), value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        fb.put_str(panel_x, y + 1, state.next.shape.as_str(), value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "HOLD", label);
        let held = state
            .held
            .as_ref()
            .map(|p| p.shape.as_str())
            .unwrap_or("-");
        fb.put_str(panel_x, y + 1, held, value);
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = Style {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

/// Reserved columns to the right of the board for the stats panel.
const PANEL_WIDTH: u16 = 10;

/// Pixel position to visible grid cell, or `None` when off the grid.
fn grid_position(cell: &Cell) -> Option<(u16, u16)> {
    if cell.x < 0 || cell.y < 0 {
        return None;
    }
    let gx = cell.x / CELL_WIDTH;
    let gy = cell.y / CELL_HEIGHT;
    if gx >= GRID_WIDTH || gy >= GRID_HEIGHT {
        return None;
    }
    Some((gx as u16, gy as u16))
}

fn color_rgb(color: BlockColor) -> Rgb {
    match color {
        BlockColor::Cyan => Rgb::new(80, 220, 220),
        BlockColor::Blue => Rgb::new(80, 120, 220),
        BlockColor::Orange => Rgb::new(255, 165, 0),
        BlockColor::Yellow => Rgb::new(240, 220, 80),
        BlockColor::Green => Rgb::new(100, 220, 120),
        BlockColor::Purple => Rgb::new(200, 120, 220),
        BlockColor::Red => Rgb::new(220, 80, 80),
        BlockColor::Grey => Rgb::new(140, 140, 140),
    }
}
