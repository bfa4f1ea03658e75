//! Terminal-bell audio cues.
//!
//! Tone synthesis is out of scope; the terminal BEL is the whole audio
//! story. Cues are fire-and-forget and never block the game loop.

use std::io::{self, Write};

use crate::core::ports::AudioCue;

/// AudioCue that rings the terminal bell.
#[derive(Debug, Default)]
pub struct TerminalBell {
    /// Ring on every playback/selection tone, not just success/error.
    /// Off by default; a bell per tile gets noisy fast.
    pub tile_tones: bool,
}

impl TerminalBell {
    pub fn new(tile_tones: bool) -> Self {
        Self { tile_tones }
    }

    fn ring(&self) {
        let mut stdout = io::stdout();
        let _ = stdout.write_all(b"\x07");
        let _ = stdout.flush();
    }
}

impl AudioCue for TerminalBell {
    fn play_tile_tone(&mut self, _index: usize) {
        if self.tile_tones {
            self.ring();
        }
    }

    fn play_success_cue(&mut self) {
        self.ring();
    }

    fn play_error_cue(&mut self) {
        self.ring();
    }
}
