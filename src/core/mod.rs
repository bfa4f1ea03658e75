//! Core module - pure game logic with no I/O
//!
//! Everything here is deterministic under a fixed seed and driven by a
//! logical clock. Presentation, audio, and persistence enter only
//! through the traits in [`ports`].

pub mod difficulty;
pub mod ports;
pub mod rng;
pub mod sequence;
pub mod session;

// Re-export commonly used types
pub use difficulty::{required_length, DifficultyConfig};
pub use ports::{AudioCue, NullAudio, Presenter, ScoreStore};
pub use rng::SimpleRng;
pub use sequence::{Sequence, SequenceEngine};
pub use session::GameSession;
