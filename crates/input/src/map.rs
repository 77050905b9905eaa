//! Key mapping from terminal events to host actions.

use crate::types::HostAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to host actions.
pub fn handle_key_event(key: KeyEvent) -> Option<HostAction> {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => Some(HostAction::Start),
        KeyCode::Tab | KeyCode::Char('v') | KeyCode::Char('V') => Some(HostAction::CycleFacing),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
