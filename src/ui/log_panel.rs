use crate::core::game_state::GameState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws the battle log, newest entries first.
pub fn draw_log_panel(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Battle Log ");

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let max_entries = inner.height as usize;
    let lines: Vec<Line> = game_state
        .battle_log
        .lines()
        .rev()
        .take(max_entries)
        .map(|entry| Line::from(Span::styled(entry, entry_style(entry))))
        .collect();

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}

fn entry_style(entry: &str) -> Style {
    if entry.starts_with("Achievement Unlocked") {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if entry.starts_with("GAME OVER") {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else if entry.starts_with("You defeated") || entry.starts_with("You successfully fled") {
        Style::default().fg(Color::Green)
    } else if entry.starts_with("The ") || entry.starts_with("You failed") {
        Style::default().fg(Color::Red)
    } else if entry.starts_with("You use a Health Potion") {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    }
}
