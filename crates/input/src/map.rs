//! Key mapping from terminal events to game actions.

use crate::types::{GameAction, VOLUME_STEP};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press (or auto-repeat) to a game action.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(GameAction::MoveLeft),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(GameAction::MoveRight),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(GameAction::SoftDropStart),

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(GameAction::RotateCw),
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(GameAction::RotateCcw),

        // Actions
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Map a key release to a game action. Only soft drop cares about releases.
pub fn handle_key_release(key: KeyEvent) -> Option<GameAction> {
    match handle_key_event(key) {
        Some(GameAction::SoftDropStart) => Some(GameAction::SoftDropStop),
        _ => None,
    }
}

/// Volume change requested by the key, if any.
pub fn volume_delta(key: KeyEvent) -> Option<f32> {
    match key.code {
        KeyCode::Char('+') | KeyCode::Char('=') => Some(VOLUME_STEP),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(-VOLUME_STEP),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
