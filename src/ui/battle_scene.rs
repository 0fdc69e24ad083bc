use crate::core::game_state::{GameState, SessionPhase};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Draws the battle scene: the enemy, both HP bars, and the action hints.
pub fn draw_battle_scene(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let battle_block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Floor {} ", game_state.current_floor));

    let inner = battle_block.inner(area);
    frame.render_widget(battle_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Enemy HP bar
            Constraint::Min(5),    // Enemy sprite
            Constraint::Length(3), // Player HP bar
            Constraint::Length(2), // Action hints
        ])
        .split(inner);

    draw_enemy_hp(frame, chunks[0], game_state);
    draw_enemy_sprite(frame, chunks[1], game_state);
    draw_player_hp(frame, chunks[2], game_state);
    draw_action_hints(frame, chunks[3], game_state);
}

fn draw_enemy_hp(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let Some(enemy) = &game_state.enemy else {
        let placeholder = Paragraph::new("").block(Block::default().borders(Borders::ALL));
        frame.render_widget(placeholder, area);
        return;
    };

    let ratio = enemy.hp as f64 / enemy.max_hp.max(1) as f64;
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", enemy.name)),
        )
        .gauge_style(Style::default().fg(hp_color(ratio)))
        .label(format!("{}/{}", enemy.hp, enemy.max_hp))
        .ratio(ratio);

    frame.render_widget(gauge, area);
}

fn draw_enemy_sprite(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let lines = match (&game_state.enemy, &game_state.phase) {
        (Some(enemy), _) => vec![
            Line::from(""),
            Line::from(Span::styled(
                enemy.sprite,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                enemy.name,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
        ],
        (None, SessionPhase::FloorTransition { .. }) => vec![
            Line::from(""),
            Line::from(Span::styled(
                "Descending to the next floor...",
                Style::default().fg(Color::DarkGray),
            )),
        ],
        (None, _) => vec![Line::from("")],
    };

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_player_hp(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let player = &game_state.player;
    let ratio = player.hp as f64 / player.max_hp.max(1) as f64;

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" You "))
        .gauge_style(Style::default().fg(hp_color(ratio)).add_modifier(Modifier::BOLD))
        .label(format!("{}/{}", player.hp, player.max_hp))
        .ratio(ratio);

    frame.render_widget(gauge, area);
}

fn draw_action_hints(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let special_style = if game_state.player.special_cooldown > 0 {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Magenta)
    };

    let hints = Line::from(vec![
        Span::styled("[A]", Style::default().fg(Color::Green)),
        Span::raw("ttack  "),
        Span::styled("[S]", special_style),
        Span::raw("pecial  "),
        Span::styled("[H]", Style::default().fg(Color::Cyan)),
        Span::raw("eal  "),
        Span::styled("[F]", Style::default().fg(Color::Yellow)),
        Span::raw("lee  "),
        Span::styled("[Q]", Style::default().fg(Color::Red)),
        Span::raw("uit"),
    ]);

    let paragraph = Paragraph::new(hints).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn hp_color(ratio: f64) -> Color {
    if ratio > 0.66 {
        Color::Green
    } else if ratio > 0.33 {
        Color::Yellow
    } else {
        Color::Red
    }
}
