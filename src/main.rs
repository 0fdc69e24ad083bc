use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::rngs::ThreadRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

use delve::combat::logic::apply_player_action;
use delve::core::constants::TICK_INTERVAL_MS;
use delve::core::game_state::GameState;
use delve::core::progression::acknowledge_level_up;
use delve::core::tick::advance_time;
use delve::input::{map_key, InputIntent};
use delve::ui::draw_ui;

fn main() -> io::Result<()> {
    let mut rng: ThreadRng = rand::thread_rng();
    let mut state = GameState::new(&mut rng);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut state, &mut rng);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut GameState,
    rng: &mut ThreadRng,
) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| draw_ui(frame, state))?;

        // Poll for input (50ms non-blocking)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press {
                    match map_key(key_event.code, state.phase) {
                        InputIntent::Action(action) => {
                            let _ = apply_player_action(state, action, rng);
                        }
                        InputIntent::AcknowledgeLevelUp => {
                            acknowledge_level_up(state, rng);
                        }
                        InputIntent::PlayAgain => {
                            state.reset(rng);
                        }
                        InputIntent::Quit => break,
                        InputIntent::None => {}
                    }
                }
            }
        }

        // Advance timers every 100ms
        if last_tick.elapsed() >= Duration::from_millis(TICK_INTERVAL_MS) {
            let delta_seconds = last_tick.elapsed().as_secs_f64();
            let _ = advance_time(state, delta_seconds, rng);
            last_tick = Instant::now();
        }
    }

    Ok(())
}
