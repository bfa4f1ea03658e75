//! Game session - the round lifecycle state machine
//!
//! Ties together the sequence engine, scoring, and the collaborator
//! ports. All pacing runs on a logical clock: callers feed elapsed
//! milliseconds into [`GameSession::tick`], so the machine is fully
//! introspectable in tests without wall-clock waits.
//!
//! Phase transitions:
//!
//! ```text
//! Idle --start--> Showing --playback done--> AwaitingInput
//! AwaitingInput --correct partial--> AwaitingInput
//! AwaitingInput --correct full--> RoundWon --delay--> Showing (next level)
//! AwaitingInput --mismatch--> GameOver --delay--> Idle
//! ```

use log::warn;

use crate::core::ports::{AudioCue, Presenter, ScoreStore};
use crate::core::sequence::{Sequence, SequenceEngine};
use crate::types::{
    GamePhase, CELL_COUNT, GAME_OVER_RESET_MS, NEXT_ROUND_DELAY_MS, POINTS_PER_TILE,
    ROUND_WON_CUE_MS, TILE_GAP_MS, TILE_HOLD_MS,
};

const IDLE_STATUS: &str = "Press Enter to play!";
const WATCH_STATUS: &str = "Watch the sequence...";
const TURN_STATUS: &str = "Your turn! Repeat the sequence.";

/// Where the playback cursor is within the current tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlaybackStage {
    /// Tile is highlighted, holding.
    Hold,
    /// Tile released, waiting out the inter-tile gap.
    Gap,
}

#[derive(Debug, Clone, Copy)]
struct Playback {
    cursor: usize,
    stage: PlaybackStage,
    timer_ms: u32,
}

/// Deferred transitions scheduled by round outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    /// RoundWon: play the success cue and announce the next round.
    SuccessCue,
    /// RoundWon: auto-start the next round.
    NextRound,
    /// GameOver: reset back to Idle.
    ResetAfterLoss,
}

#[derive(Debug, Clone, Copy)]
struct PendingTransition {
    what: Pending,
    timer_ms: u32,
}

/// The memory-game state machine.
///
/// Owns its collaborators; constructed once per UI instance. Inputs
/// arriving outside the phase that accepts them are dropped, never queued.
#[derive(Debug)]
pub struct GameSession<P, A, S> {
    presenter: P,
    audio: A,
    store: S,
    engine: SequenceEngine,
    phase: GamePhase,
    sequence: Sequence,
    progress: Sequence,
    score: u32,
    best_score: u32,
    level: u32,
    playback: Option<Playback>,
    pending: Option<PendingTransition>,
}

impl<P: Presenter, A: AudioCue, S: ScoreStore> GameSession<P, A, S> {
    /// Create a session and present the initial displays.
    ///
    /// The best score is seeded from the store; a failed read counts as
    /// "no best score yet".
    pub fn new(presenter: P, audio: A, store: S, seed: u32) -> Self {
        let mut session = Self {
            presenter,
            audio,
            store,
            engine: SequenceEngine::new(seed),
            phase: GamePhase::Idle,
            sequence: Sequence::new(),
            progress: Sequence::new(),
            score: 0,
            best_score: 0,
            level: 1,
            playback: None,
            pending: None,
        };

        session.best_score = match session.store.load() {
            Ok(best) => best,
            Err(err) => {
                warn!("best score unavailable, starting from 0: {err:#}");
                0
            }
        };

        session.presenter.set_score(0);
        session.presenter.set_level(1);
        session.presenter.set_best_score(session.best_score);
        session.presenter.set_status(IDLE_STATUS);
        session.presenter.set_controls_enabled(true);
        session
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    pub fn progress(&self) -> &[u8] {
        &self.progress
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    /// Begin a round. No-op unless the session is idle, so re-entrant
    /// calls cannot overlap an in-flight playback.
    pub fn start(&mut self) {
        if self.phase != GamePhase::Idle {
            return;
        }
        self.begin_round();
    }

    /// Process a player tile selection.
    ///
    /// Dropped without any state change unless the session is awaiting
    /// input and `index` lies on the grid.
    pub fn select(&mut self, index: usize) {
        if self.phase != GamePhase::AwaitingInput || index >= CELL_COUNT {
            return;
        }

        self.progress.push(index as u8);
        let pos = self.progress.len() - 1;

        if self.sequence[pos] as usize == index {
            self.presenter.mark_success(index);
            self.audio.play_tile_tone(index);

            if self.progress.len() == self.sequence.len() {
                self.complete_round();
            }
        } else {
            self.fail_round(index);
        }
    }

    /// Force the session back to Idle, clearing the round and score.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Idle;
        self.score = 0;
        self.level = 1;
        self.sequence.clear();
        self.progress.clear();
        self.playback = None;
        self.pending = None;

        self.presenter.clear_marks();
        self.presenter.set_score(0);
        self.presenter.set_level(1);
        self.presenter.set_status(IDLE_STATUS);
        self.presenter.set_controls_enabled(true);
    }

    /// Apply a player command.
    pub fn apply(&mut self, command: crate::types::Command) {
        use crate::types::Command;
        match command {
            Command::Start => self.start(),
            Command::Select(index) => self.select(index),
            Command::Reset => self.reset(),
        }
    }

    /// Advance the logical clock.
    ///
    /// Drives sequence playback and the deferred round-won/game-over
    /// transitions. At most one stage boundary fires per call.
    pub fn tick(&mut self, elapsed_ms: u32) {
        match self.phase {
            GamePhase::Showing => self.tick_playback(elapsed_ms),
            GamePhase::RoundWon | GamePhase::GameOver => self.tick_pending(elapsed_ms),
            GamePhase::Idle | GamePhase::AwaitingInput => {}
        }
    }

    fn begin_round(&mut self) {
        self.progress.clear();
        let length = self.engine.required_length(self.level);
        self.sequence = self.engine.generate(length);
        self.pending = None;

        self.phase = GamePhase::Showing;
        self.presenter.set_controls_enabled(false);
        self.presenter.set_status(WATCH_STATUS);

        if self.sequence.is_empty() {
            self.enter_awaiting_input();
            return;
        }

        let first = self.sequence[0] as usize;
        self.presenter.highlight(first);
        self.audio.play_tile_tone(first);
        self.playback = Some(Playback {
            cursor: 0,
            stage: PlaybackStage::Hold,
            timer_ms: TILE_HOLD_MS,
        });
    }

    fn tick_playback(&mut self, elapsed_ms: u32) {
        let Some(mut playback) = self.playback else {
            return;
        };

        playback.timer_ms = playback.timer_ms.saturating_sub(elapsed_ms);
        if playback.timer_ms > 0 {
            self.playback = Some(playback);
            return;
        }

        match playback.stage {
            PlaybackStage::Hold => {
                let cell = self.sequence[playback.cursor] as usize;
                self.presenter.unhighlight(cell);
                playback.stage = PlaybackStage::Gap;
                playback.timer_ms = TILE_GAP_MS;
                self.playback = Some(playback);
            }
            PlaybackStage::Gap => {
                playback.cursor += 1;
                if playback.cursor == self.sequence.len() {
                    self.playback = None;
                    self.enter_awaiting_input();
                } else {
                    let cell = self.sequence[playback.cursor] as usize;
                    self.presenter.highlight(cell);
                    self.audio.play_tile_tone(cell);
                    playback.stage = PlaybackStage::Hold;
                    playback.timer_ms = TILE_HOLD_MS;
                    self.playback = Some(playback);
                }
            }
        }
    }

    fn enter_awaiting_input(&mut self) {
        self.phase = GamePhase::AwaitingInput;
        self.presenter.set_status(TURN_STATUS);
        self.presenter.set_controls_enabled(true);
    }

    fn complete_round(&mut self) {
        self.score += self.sequence.len() as u32 * POINTS_PER_TILE;
        self.presenter.set_score(self.score);

        if self.score > self.best_score {
            self.best_score = self.score;
            // Persist in the same step as the comparison, so a record is
            // not lost if the process dies right after.
            if let Err(err) = self.store.save(self.best_score) {
                warn!("failed to persist best score {}: {err:#}", self.best_score);
            }
            self.presenter.set_best_score(self.best_score);
        }

        self.level += 1;
        self.presenter.set_level(self.level);

        self.phase = GamePhase::RoundWon;
        self.pending = Some(PendingTransition {
            what: Pending::SuccessCue,
            timer_ms: ROUND_WON_CUE_MS,
        });
    }

    fn fail_round(&mut self, index: usize) {
        self.presenter.mark_error(index);
        self.audio.play_error_cue();

        self.phase = GamePhase::GameOver;
        self.presenter
            .set_status(&format!("Game over! Final score: {}", self.score));
        self.presenter.set_controls_enabled(false);
        self.pending = Some(PendingTransition {
            what: Pending::ResetAfterLoss,
            timer_ms: GAME_OVER_RESET_MS,
        });
    }

    fn tick_pending(&mut self, elapsed_ms: u32) {
        let Some(mut pending) = self.pending else {
            return;
        };

        pending.timer_ms = pending.timer_ms.saturating_sub(elapsed_ms);
        if pending.timer_ms > 0 {
            self.pending = Some(pending);
            return;
        }

        match pending.what {
            Pending::SuccessCue => {
                self.audio.play_success_cue();
                let next_length = self.engine.required_length(self.level);
                if next_length > self.sequence.len() {
                    self.presenter
                        .set_status(&format!("Level up! Next sequence: {next_length} tiles"));
                } else {
                    self.presenter
                        .set_status("Great job! Starting next round...");
                }
                self.pending = Some(PendingTransition {
                    what: Pending::NextRound,
                    timer_ms: NEXT_ROUND_DELAY_MS,
                });
            }
            Pending::NextRound => {
                self.pending = None;
                self.begin_round();
            }
            Pending::ResetAfterLoss => {
                self.pending = None;
                self.reset();
            }
        }
    }
}
