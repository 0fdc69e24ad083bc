use crate::core::game_state::GameState;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Draws the level-up notice as a centered overlay.
pub fn draw_level_up_notice(frame: &mut Frame, game_state: &GameState, new_level: u32) {
    let size = frame.size();

    let dialog_width = 40.min(size.width.saturating_sub(4));
    let dialog_height = 11.min(size.height.saturating_sub(4));
    let x = (size.width.saturating_sub(dialog_width)) / 2;
    let y = (size.height.saturating_sub(dialog_height)) / 2;
    let dialog_area = Rect::new(x, y, dialog_width, dialog_height);

    frame.render_widget(Clear, dialog_area);

    let player = &game_state.player;
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("🎉 LEVEL {} 🎉", new_level),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Max HP: {}", player.max_hp)),
        Line::from(format!("Attack: {}", player.base_attack)),
        Line::from(format!("Special Attack: {}", player.special_attack)),
        Line::from("HP fully restored!"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let dialog = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" Level Up! "),
        )
        .alignment(Alignment::Center);

    frame.render_widget(dialog, dialog_area);
}
