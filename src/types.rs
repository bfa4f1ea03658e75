//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Grid dimensions (fixed for the process lifetime)
pub const GRID_SIZE: usize = 3;
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Hard upper bound on sequence length, used to size fixed-capacity buffers.
pub const MAX_SEQUENCE: usize = 9;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;
pub const TILE_HOLD_MS: u32 = 500;
pub const TILE_GAP_MS: u32 = 200;
pub const ROUND_WON_CUE_MS: u32 = 500;
pub const NEXT_ROUND_DELAY_MS: u32 = 1000;
pub const GAME_OVER_RESET_MS: u32 = 1500;

/// Points awarded per tile of a completed sequence.
pub const POINTS_PER_TILE: u32 = 15;

/// Lifecycle phase of a game session.
///
/// Exactly one phase is active at a time; all transitions go through
/// `core::GameSession`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    /// Waiting for the player to start a round.
    Idle,
    /// Sequence playback in progress; input is ignored.
    Showing,
    /// Playback finished; accepting tile selections.
    AwaitingInput,
    /// Full sequence reproduced; next round starts after a delay.
    RoundWon,
    /// Wrong tile selected; resets to Idle after a delay.
    GameOver,
}

impl GamePhase {
    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Idle => "idle",
            GamePhase::Showing => "showing",
            GamePhase::AwaitingInput => "awaitingInput",
            GamePhase::RoundWon => "roundWon",
            GamePhase::GameOver => "gameOver",
        }
    }
}

/// Player-facing commands produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Select(usize),
    Reset,
}

impl Command {
    /// Parse command from string (case-insensitive; `select` takes a cell index)
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.to_lowercase();
        match s.as_str() {
            "start" => Some(Command::Start),
            "reset" => Some(Command::Reset),
            _ => {
                let rest = s.strip_prefix("select:")?;
                let index: usize = rest.parse().ok()?;
                Some(Command::Select(index))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_from_str() {
        assert_eq!(Command::from_str("start"), Some(Command::Start));
        assert_eq!(Command::from_str("RESET"), Some(Command::Reset));
        assert_eq!(Command::from_str("select:4"), Some(Command::Select(4)));
        assert_eq!(Command::from_str("select:x"), None);
        assert_eq!(Command::from_str("jump"), None);
    }

    #[test]
    fn test_phase_as_str() {
        assert_eq!(GamePhase::Idle.as_str(), "idle");
        assert_eq!(GamePhase::AwaitingInput.as_str(), "awaitingInput");
    }
}
