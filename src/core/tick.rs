//! Time driver for the session.
//!
//! Everything time-based funnels through [`advance_time`], called from the
//! event loop between input polls. It is serialized against player actions
//! on the same `&mut GameState`, so the cooldown tick and the deferred
//! continuations can never interleave with a half-applied action.

use rand::Rng;

use crate::combat::logic::BattleEvent;
use crate::core::constants::*;
use crate::core::game_state::{GameState, SessionPhase};
use crate::core::progression::complete_floor_transition;

// Accumulated 100ms deltas undershoot whole seconds (ten 0.1 adds sum to
// 0.999...), so threshold checks get a little slack.
const TIMER_EPSILON: f64 = 1e-9;

/// Advances all session timers by `delta_seconds`.
///
/// - Every accumulated second decrements the special cooldown by one.
/// - In `FloorTransition`, the next floor's spawn fires once the display
///   delay elapses.
/// - In `GameOver`, the play-again prompt is emitted exactly once after its
///   delay.
pub fn advance_time(
    state: &mut GameState,
    delta_seconds: f64,
    rng: &mut impl Rng,
) -> Vec<BattleEvent> {
    let mut events = Vec::new();

    state.cooldown_timer += delta_seconds;
    while state.cooldown_timer + TIMER_EPSILON >= COOLDOWN_TICK_SECONDS {
        state.cooldown_timer -= COOLDOWN_TICK_SECONDS;
        if state.player.special_cooldown > 0 {
            state.player.special_cooldown -= 1;
        }
    }

    match state.phase {
        SessionPhase::FloorTransition { timer } => {
            let timer = timer + delta_seconds;
            if timer + TIMER_EPSILON >= SPAWN_DELAY_SECONDS {
                events.extend(complete_floor_transition(state, rng));
            } else {
                state.phase = SessionPhase::FloorTransition { timer };
            }
        }
        SessionPhase::GameOver { timer, prompted } => {
            let timer = timer + delta_seconds;
            let mut prompted = prompted;
            if !prompted && timer + TIMER_EPSILON >= GAME_OVER_PROMPT_DELAY_SECONDS {
                prompted = true;
                events.push(BattleEvent::PlayAgainPrompt);
            }
            state.phase = SessionPhase::GameOver { timer, prompted };
        }
        SessionPhase::Battle | SessionPhase::LevelUp { .. } => {}
    }

    events
}
