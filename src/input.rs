//! Input dispatch for the battle screen.
//!
//! Maps raw key presses to session intents; the engine itself decides
//! whether an action is currently allowed.

use crate::combat::logic::PlayerAction;
use crate::core::game_state::SessionPhase;
use crossterm::event::KeyCode;

/// What a key press asks the session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputIntent {
    /// A battle action, resolved by the engine.
    Action(PlayerAction),
    /// Close the level-up notice and descend to the next floor.
    AcknowledgeLevelUp,
    /// Accept the play-again prompt and start a new run.
    PlayAgain,
    /// Leave the game.
    Quit,
    /// Key has no meaning in the current phase.
    None,
}

/// Maps a key press to an intent, given the current session phase.
pub fn map_key(code: KeyCode, phase: SessionPhase) -> InputIntent {
    match phase {
        SessionPhase::LevelUp { .. } => match code {
            KeyCode::Enter => InputIntent::AcknowledgeLevelUp,
            KeyCode::Char('q') | KeyCode::Char('Q') => InputIntent::Quit,
            _ => InputIntent::None,
        },
        SessionPhase::GameOver { prompted, .. } => match code {
            KeyCode::Char('y') | KeyCode::Char('Y') if prompted => InputIntent::PlayAgain,
            KeyCode::Char('n') | KeyCode::Char('N') if prompted => InputIntent::Quit,
            KeyCode::Char('q') | KeyCode::Char('Q') => InputIntent::Quit,
            _ => InputIntent::None,
        },
        SessionPhase::Battle | SessionPhase::FloorTransition { .. } => match code {
            KeyCode::Char('a') | KeyCode::Char('A') => InputIntent::Action(PlayerAction::Attack),
            KeyCode::Char('s') | KeyCode::Char('S') => InputIntent::Action(PlayerAction::Special),
            KeyCode::Char('h') | KeyCode::Char('H') => InputIntent::Action(PlayerAction::Heal),
            KeyCode::Char('f') | KeyCode::Char('F') => InputIntent::Action(PlayerAction::Flee),
            KeyCode::Char('q') | KeyCode::Char('Q') => InputIntent::Quit,
            _ => InputIntent::None,
        },
    }
}
