//! GridView: maps a `TileSurface` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::term::surface::{TileSurface, TileVisual};
use crate::types::GRID_SIZE;

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

/// Renders the 3x3 tile grid with a side panel and status line.
pub struct GridView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
}

impl Default for GridView {
    fn default() -> Self {
        // 6x3 keeps tiles roughly square under typical glyph aspect ratio.
        Self {
            tile_w: 6,
            tile_h: 3,
        }
    }
}

impl GridView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self { tile_w, tile_h }
    }

    /// Render the surface into a framebuffer.
    pub fn render(&self, surface: &TileSurface, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let grid_px_w = (GRID_SIZE as u16) * (self.tile_w + 1) + 1;
        let grid_px_h = (GRID_SIZE as u16) * (self.tile_h + 1) + 1;

        let start_x = viewport.width.saturating_sub(grid_px_w + 14) / 2;
        let start_y = viewport.height.saturating_sub(grid_px_h + 2) / 2;

        for row in 0..GRID_SIZE as u16 {
            for col in 0..GRID_SIZE as u16 {
                let index = (row as usize) * GRID_SIZE + col as usize;
                self.draw_tile(&mut fb, start_x, start_y, col, row, index, surface.tile(index));
            }
        }

        self.draw_side_panel(&mut fb, surface, start_x + grid_px_w + 3, start_y);
        self.draw_status(&mut fb, surface, start_x, start_y + grid_px_h + 1);

        fb
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        col: u16,
        row: u16,
        index: usize,
        visual: TileVisual,
    ) {
        let (fg, bg) = match visual {
            TileVisual::Idle => (Rgb::new(110, 110, 125), Rgb::new(35, 35, 45)),
            TileVisual::Active => (Rgb::new(20, 20, 30), Rgb::new(250, 210, 90)),
            TileVisual::Success => (Rgb::new(20, 30, 20), Rgb::new(110, 220, 130)),
            TileVisual::Error => (Rgb::new(30, 20, 20), Rgb::new(230, 90, 90)),
        };
        let style = CellStyle {
            fg,
            bg,
            bold: visual != TileVisual::Idle,
            dim: false,
        };

        let px = start_x + 1 + col * (self.tile_w + 1);
        let py = start_y + 1 + row * (self.tile_h + 1);
        fb.fill_rect(px, py, self.tile_w, self.tile_h, ' ', style);

        // Digit label in the tile center (keys 1-9 select tiles).
        let label = char::from_digit(index as u32 + 1, 10).unwrap_or('?');
        fb.put_char(px + self.tile_w / 2, py + self.tile_h / 2, label, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, surface: &TileSurface, x: u16, y: u16) {
        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let mut py = y;
        fb.put_str(x, py, "SCORE", label);
        py = py.saturating_add(1);
        fb.put_str(x, py, &format!("{}", surface.score()), value);
        py = py.saturating_add(2);

        fb.put_str(x, py, "LEVEL", label);
        py = py.saturating_add(1);
        fb.put_str(x, py, &format!("{}", surface.level()), value);
        py = py.saturating_add(2);

        fb.put_str(x, py, "BEST", label);
        py = py.saturating_add(1);
        fb.put_str(x, py, &format!("{}", surface.best_score()), value);
    }

    fn draw_status(&self, fb: &mut FrameBuffer, surface: &TileSurface, x: u16, y: u16) {
        let status_style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, y, surface.status(), status_style);

        let help = if surface.controls_enabled() {
            "1-9 select  Enter start  r reset  q quit"
        } else {
            "q quit"
        };
        let help_style = CellStyle {
            fg: Rgb::new(140, 140, 140),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: true,
        };
        fb.put_str(x, y.saturating_add(1), help, help_style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ports::Presenter;

    fn find_str(fb: &FrameBuffer, needle: &str) -> bool {
        for y in 0..fb.height() {
            let row: String = (0..fb.width())
                .map(|x| fb.get(x, y).map(|c| c.ch).unwrap_or(' '))
                .collect();
            if row.contains(needle) {
                return true;
            }
        }
        false
    }

    #[test]
    fn test_render_contains_panel_labels_and_status() {
        let mut surface = TileSurface::new();
        surface.set_status("Watch the sequence...");
        let view = GridView::default();
        let fb = view.render(&surface, Viewport::new(80, 24));

        assert!(find_str(&fb, "SCORE"));
        assert!(find_str(&fb, "LEVEL"));
        assert!(find_str(&fb, "BEST"));
        assert!(find_str(&fb, "Watch the sequence..."));
    }

    #[test]
    fn test_render_shows_all_tile_labels() {
        let surface = TileSurface::new();
        let fb = GridView::default().render(&surface, Viewport::new(80, 24));
        for digit in '1'..='9' {
            assert!(
                find_str(&fb, &digit.to_string()),
                "missing tile label {}",
                digit
            );
        }
    }

    #[test]
    fn test_active_tile_changes_style() {
        let mut surface = TileSurface::new();
        let view = GridView::default();
        let before = view.render(&surface, Viewport::new(80, 24));
        surface.highlight(0);
        let after = view.render(&surface, Viewport::new(80, 24));
        assert_ne!(before, after);
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let surface = TileSurface::new();
        let fb = GridView::default().render(&surface, Viewport::new(10, 4));
        assert_eq!(fb.width(), 10);
        assert_eq!(fb.height(), 4);
    }
}
