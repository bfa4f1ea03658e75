//! TileSurface: the terminal-side presentation model.
//!
//! Implements `core::Presenter` by recording what the session asked for:
//! per-tile visual state, the status line, and the score displays. The
//! view renders from this model and nothing else, so the core stays
//! free of terminal concerns.

use crate::core::ports::Presenter;
use crate::types::CELL_COUNT;

/// How long a success/error flash stays on a tile (milliseconds).
/// Matches the session's inter-tile gap scale, not its hold time.
pub const MARK_FLASH_MS: u32 = 300;

/// Visual state of a single tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileVisual {
    #[default]
    Idle,
    /// Highlighted during playback.
    Active,
    /// Flashing after a correct selection.
    Success,
    /// Flashing after the losing selection.
    Error,
}

#[derive(Debug, Clone, Copy, Default)]
struct Tile {
    visual: TileVisual,
    flash_ms: u32,
}

/// Presentation state for the 3x3 grid and the surrounding chrome.
#[derive(Debug)]
pub struct TileSurface {
    tiles: [Tile; CELL_COUNT],
    status: String,
    score: u32,
    level: u32,
    best_score: u32,
    controls_enabled: bool,
}

impl TileSurface {
    pub fn new() -> Self {
        Self {
            tiles: [Tile::default(); CELL_COUNT],
            status: String::new(),
            score: 0,
            level: 1,
            best_score: 0,
            controls_enabled: true,
        }
    }

    pub fn tile(&self, index: usize) -> TileVisual {
        self.tiles[index].visual
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn controls_enabled(&self) -> bool {
        self.controls_enabled
    }

    /// Decay success/error flashes. Driven from the frame loop; the
    /// session itself never schedules un-flashing.
    pub fn tick(&mut self, elapsed_ms: u32) {
        for tile in &mut self.tiles {
            if tile.flash_ms == 0 {
                continue;
            }
            tile.flash_ms = tile.flash_ms.saturating_sub(elapsed_ms);
            if tile.flash_ms == 0 {
                tile.visual = TileVisual::Idle;
            }
        }
    }
}

impl Default for TileSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for TileSurface {
    fn highlight(&mut self, index: usize) {
        if let Some(tile) = self.tiles.get_mut(index) {
            tile.visual = TileVisual::Active;
            tile.flash_ms = 0;
        }
    }

    fn unhighlight(&mut self, index: usize) {
        if let Some(tile) = self.tiles.get_mut(index) {
            if tile.visual == TileVisual::Active {
                tile.visual = TileVisual::Idle;
            }
        }
    }

    fn mark_success(&mut self, index: usize) {
        if let Some(tile) = self.tiles.get_mut(index) {
            tile.visual = TileVisual::Success;
            tile.flash_ms = MARK_FLASH_MS;
        }
    }

    fn mark_error(&mut self, index: usize) {
        if let Some(tile) = self.tiles.get_mut(index) {
            tile.visual = TileVisual::Error;
            tile.flash_ms = MARK_FLASH_MS;
        }
    }

    fn clear_marks(&mut self) {
        self.tiles = [Tile::default(); CELL_COUNT];
    }

    fn set_status(&mut self, text: &str) {
        self.status.clear();
        self.status.push_str(text);
    }

    fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    fn set_level(&mut self, level: u32) {
        self.level = level;
    }

    fn set_best_score(&mut self, best: u32) {
        self.best_score = best;
    }

    fn set_controls_enabled(&mut self, enabled: bool) {
        self.controls_enabled = enabled;
    }
}
