use crate::core::game_state::GameState;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Draws the game-over screen as a centered overlay. The play-again prompt
/// appears only once its delay has elapsed.
pub fn draw_game_over_notice(frame: &mut Frame, game_state: &GameState, prompted: bool) {
    let size = frame.size();

    let dialog_width = 44.min(size.width.saturating_sub(4));
    let dialog_height = 10.min(size.height.saturating_sub(4));
    let x = (size.width.saturating_sub(dialog_width)) / 2;
    let y = (size.height.saturating_sub(dialog_height)) / 2;
    let dialog_area = Rect::new(x, y, dialog_width, dialog_height);

    frame.render_widget(Clear, dialog_area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "💀 GAME OVER 💀",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "You reached floor {} and achieved level {}.",
            game_state.current_floor, game_state.player.level
        )),
        Line::from(""),
    ];

    if prompted {
        lines.push(Line::from(vec![
            Span::raw("Play again? "),
            Span::styled("[Y]", Style::default().fg(Color::Green)),
            Span::raw("es / "),
            Span::styled("[N]", Style::default().fg(Color::Red)),
            Span::raw("o"),
        ]));
    }

    let dialog = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" Defeat "),
        )
        .alignment(Alignment::Center);

    frame.render_widget(dialog, dialog_area);
}
