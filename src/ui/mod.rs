pub mod battle_scene;
pub mod game_over_notice;
pub mod level_up_notice;
mod log_panel;
mod stats_panel;

use crate::core::game_state::{GameState, SessionPhase};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Main UI drawing function.
///
/// Splits the screen into the stats panel (left), the battle scene (right),
/// and the battle log (bottom). Phase overlays are drawn on top.
pub fn draw_ui(frame: &mut Frame, game_state: &GameState) {
    let size = frame.size();

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),     // Main content (stats + battle scene)
            Constraint::Length(10), // Battle log
        ])
        .split(size);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Stats panel
            Constraint::Percentage(60), // Battle scene
        ])
        .split(v_chunks[0]);

    stats_panel::draw_stats_panel(frame, chunks[0], game_state);
    battle_scene::draw_battle_scene(frame, chunks[1], game_state);
    log_panel::draw_log_panel(frame, v_chunks[1], game_state);

    match game_state.phase {
        SessionPhase::LevelUp { new_level } => {
            level_up_notice::draw_level_up_notice(frame, game_state, new_level);
        }
        SessionPhase::GameOver { prompted, .. } => {
            game_over_notice::draw_game_over_notice(frame, game_state, prompted);
        }
        SessionPhase::Battle | SessionPhase::FloorTransition { .. } => {}
    }
}
