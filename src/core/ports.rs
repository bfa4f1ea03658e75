//! Collaborator interfaces for the game session.
//!
//! The session drives presentation, audio, and best-score persistence
//! entirely through these traits, so it can run against a terminal
//! frontend, a recording fake in tests, or nothing at all.

use anyhow::Result;

/// Visual output consumed by the session.
///
/// Calls are fire-and-forget; the session never waits on presentation.
pub trait Presenter {
    /// Light up a tile during sequence playback.
    fn highlight(&mut self, index: usize);
    /// Return a tile to its resting look.
    fn unhighlight(&mut self, index: usize);
    /// Flash a tile as a correct selection.
    fn mark_success(&mut self, index: usize);
    /// Flash a tile as the losing selection.
    fn mark_error(&mut self, index: usize);
    /// Drop every highlight/success/error mark (used by reset).
    fn clear_marks(&mut self);

    fn set_status(&mut self, text: &str);
    fn set_score(&mut self, score: u32);
    fn set_level(&mut self, level: u32);
    fn set_best_score(&mut self, best: u32);
    fn set_controls_enabled(&mut self, enabled: bool);
}

/// Audio feedback consumed by the session.
///
/// Fire-and-forget: the session's own timers own all pacing, never the
/// cue's actual duration.
pub trait AudioCue {
    fn play_tile_tone(&mut self, index: usize);
    fn play_success_cue(&mut self);
    fn play_error_cue(&mut self);
}

/// Best-score persistence.
///
/// A failed `load` seeds the session with 0; a failed `save` is non-fatal
/// and the in-memory value stays authoritative.
pub trait ScoreStore {
    fn load(&mut self) -> Result<u32>;
    fn save(&mut self, best: u32) -> Result<()>;
}

/// AudioCue that does nothing. Headless runs and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioCue for NullAudio {
    fn play_tile_tone(&mut self, _index: usize) {}
    fn play_success_cue(&mut self) {}
    fn play_error_cue(&mut self) {}
}
