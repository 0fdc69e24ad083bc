use crate::achievements::ALL_ACHIEVEMENTS;
use crate::core::game_state::GameState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Draws the left-hand panel: hero stats, inventory, and achievements.
pub fn draw_stats_panel(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header (level + floor)
            Constraint::Length(3), // XP bar
            Constraint::Length(7), // Combat stats
            Constraint::Length(5), // Inventory
            Constraint::Min(4),    // Achievements
        ])
        .split(area);

    draw_header(frame, chunks[0], game_state);
    draw_xp_bar(frame, chunks[1], game_state);
    draw_combat_stats(frame, chunks[2], game_state);
    draw_inventory(frame, chunks[3], game_state);
    draw_achievements(frame, chunks[4], game_state);
}

fn draw_header(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let header_text = vec![Line::from(vec![
        Span::styled(
            format!("Level {}", game_state.player.level),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(
            format!("Floor {}", game_state.current_floor),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    let header = Paragraph::new(header_text)
        .block(Block::default().borders(Borders::ALL).title(" Hero "))
        .alignment(Alignment::Center);

    frame.render_widget(header, area);
}

fn draw_xp_bar(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let player = &game_state.player;
    let ratio = if player.xp_to_next_level > 0 {
        (player.xp as f64 / player.xp_to_next_level as f64).min(1.0)
    } else {
        0.0
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Experience "))
        .gauge_style(Style::default().fg(Color::Yellow))
        .label(format!("{}/{}", player.xp, player.xp_to_next_level))
        .ratio(ratio);

    frame.render_widget(gauge, area);
}

fn draw_combat_stats(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let player = &game_state.player;

    let cooldown_text = if player.special_cooldown > 0 {
        Span::styled(
            format!("{} turn(s)", player.special_cooldown),
            Style::default().fg(Color::Red),
        )
    } else {
        Span::styled("Ready", Style::default().fg(Color::Green))
    };

    let lines = vec![
        Line::from(vec![
            Span::raw("HP: "),
            Span::styled(
                format!("{}/{}", player.hp, player.max_hp),
                Style::default().fg(hp_color(player.hp, player.max_hp)),
            ),
        ]),
        Line::from(vec![
            Span::raw("Attack: "),
            Span::styled(
                format!("{}", player.base_attack),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::raw("Special Attack: "),
            Span::styled(
                format!("{}", player.special_attack),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![Span::raw("Special Cooldown: "), cooldown_text]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Stats "));

    frame.render_widget(paragraph, area);
}

fn draw_inventory(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let inventory = &game_state.player.inventory;

    let lines = vec![
        Line::from(vec![
            Span::raw("🧪 Health Potions: "),
            Span::styled(
                format!("{}", inventory.health_potions),
                Style::default().fg(if inventory.health_potions > 0 {
                    Color::Green
                } else {
                    Color::Red
                }),
            ),
        ]),
        Line::from(vec![
            Span::raw("⚔️ Attack Boosts: "),
            Span::styled(
                format!("{}", inventory.attack_boosts),
                Style::default().fg(Color::White),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Inventory "));

    frame.render_widget(paragraph, area);
}

fn draw_achievements(frame: &mut Frame, area: Rect, game_state: &GameState) {
    let achievements = &game_state.achievements;

    let title = format!(
        " Achievements ({}/{}) ",
        achievements.unlocked_count(),
        achievements.total_count()
    );

    let lines: Vec<Line> = ALL_ACHIEVEMENTS
        .iter()
        .map(|def| {
            if achievements.is_unlocked(def.id) {
                Line::from(vec![
                    Span::raw(format!("{} ", def.icon)),
                    Span::styled(
                        def.name,
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            } else {
                Line::from(Span::styled(
                    format!("🔒 {}", def.name),
                    Style::default().fg(Color::DarkGray),
                ))
            }
        })
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(paragraph, area);
}

fn hp_color(hp: u32, max_hp: u32) -> Color {
    let ratio = hp as f64 / max_hp.max(1) as f64;
    if ratio > 0.66 {
        Color::Green
    } else if ratio > 0.33 {
        Color::Yellow
    } else {
        Color::Red
    }
}
