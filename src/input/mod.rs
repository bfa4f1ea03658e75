//! Input module - keyboard handling for game controls

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{Command, CELL_COUNT};

/// Map keyboard input to game commands.
///
/// Digits 1-9 select tiles 0-8 in reading order, mirroring the on-screen
/// labels. Mistimed commands are dropped by the session, not here.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char(ch @ '1'..='9') => {
            let index = (ch as usize) - ('1' as usize);
            if index < CELL_COUNT {
                Some(Command::Select(index))
            } else {
                None
            }
        }

        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),

        _ => None,
    }
}

/// Check if key should quit the game
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
