//! Progression: XP awards, level-ups, floor advancement.

use rand::Rng;

use crate::achievements;
use crate::combat::logic::BattleEvent;
use crate::core::constants::*;
use crate::core::game_state::{GameState, Player, SessionPhase};

/// Runs the defeat path once the current enemy's hp reaches zero: award the
/// XP, clear the enemy, then either enter the level-up phase (floor advance
/// deferred to the acknowledgement) or schedule the next floor.
pub fn on_enemy_defeated(state: &mut GameState) -> Vec<BattleEvent> {
    let Some(enemy) = state.enemy.take() else {
        return Vec::new();
    };

    state.player.xp += enemy.xp_reward;
    state.battle_log.push(format!(
        "You defeated the {} and gained {} XP!",
        enemy.name, enemy.xp_reward
    ));
    let mut events = vec![BattleEvent::EnemyDefeated {
        name: enemy.name,
        xp_gained: enemy.xp_reward,
    }];

    if state.player.xp >= state.player.xp_to_next_level {
        // One level-up per defeat, even when the award would cross two
        // thresholds; the residue levels on the next defeat.
        let new_level = level_up(&mut state.player);
        events.push(BattleEvent::LevelUp { new_level });
        // Achievements see the new level before the floor advances.
        events.extend(run_achievement_pass(state));
        state.phase = SessionPhase::LevelUp { new_level };
    } else {
        state.phase = SessionPhase::FloorTransition { timer: 0.0 };
    }

    events
}

/// Raises level-derived stats and fully heals. Returns the new level.
fn level_up(player: &mut Player) -> u32 {
    player.level += 1;
    player.xp -= player.xp_to_next_level;
    player.xp_to_next_level = (player.xp_to_next_level as f64 * XP_CURVE_FACTOR) as u64;
    player.max_hp += LEVEL_UP_MAX_HP_BONUS;
    player.hp = player.max_hp;
    player.base_attack += LEVEL_UP_ATTACK_BONUS;
    player.special_attack += LEVEL_UP_SPECIAL_BONUS;
    player.level
}

/// Deferred continuation of the defeat path: advance the floor, re-check
/// achievements, spawn the next encounter. Invoked by the tick driver once
/// the display delay elapses.
pub fn complete_floor_transition(state: &mut GameState, rng: &mut impl Rng) -> Vec<BattleEvent> {
    state.current_floor += 1;
    let events = run_achievement_pass(state);
    state.spawn_enemy(rng);
    state.phase = SessionPhase::Battle;
    events
}

/// The level-up-close acknowledgement: only now does the floor advance and
/// the next enemy spawn. A no-op in any other phase.
pub fn acknowledge_level_up(state: &mut GameState, rng: &mut impl Rng) {
    if !matches!(state.phase, SessionPhase::LevelUp { .. }) {
        return;
    }
    state.current_floor += 1;
    state.spawn_enemy(rng);
    state.phase = SessionPhase::Battle;
}

/// Unlocks whatever the current floor/level qualifies for, logging each new
/// unlock exactly once.
fn run_achievement_pass(state: &mut GameState) -> Vec<BattleEvent> {
    achievements::evaluate(
        &mut state.achievements,
        state.current_floor,
        state.player.level,
    )
    .into_iter()
    .map(|def| {
        state
            .battle_log
            .push(format!("Achievement Unlocked: {}!", def.name));
        BattleEvent::AchievementUnlocked { name: def.name }
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::types::Enemy;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn state_with_enemy(enemy: Enemy) -> GameState {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut state = GameState::new(&mut rng);
        state.enemy = Some(enemy);
        state.battle_log.clear();
        state
    }

    fn defeated(mut enemy: Enemy) -> Enemy {
        enemy.hp = 0;
        enemy
    }

    #[test]
    fn test_defeat_awards_xp_and_schedules_next_floor() {
        let mut state = state_with_enemy(defeated(Enemy::new("Orc", "👹", 50, 10, 40)));

        let events = on_enemy_defeated(&mut state);

        assert_eq!(state.player.xp, 40);
        assert!(state.enemy.is_none());
        assert_eq!(state.phase, SessionPhase::FloorTransition { timer: 0.0 });
        assert_eq!(state.current_floor, 1, "floor advances with the spawn, not here");
        assert!(events.contains(&BattleEvent::EnemyDefeated {
            name: "Orc",
            xp_gained: 40
        }));
    }

    #[test]
    fn test_level_up_stat_growth_and_full_heal() {
        let mut state = state_with_enemy(defeated(Enemy::new("Dragon", "🐉", 100, 20, 120)));
        state.player.hp = 5;
        state.player.xp = 30; // 30 + 120 = 150 >= 100

        let events = on_enemy_defeated(&mut state);

        assert_eq!(state.player.level, 2);
        assert_eq!(state.player.xp, 50); // 150 - 100
        assert_eq!(state.player.xp_to_next_level, 150); // floor(100 * 1.5)
        assert_eq!(state.player.max_hp, 110);
        assert_eq!(state.player.hp, 110, "level-up fully heals");
        assert_eq!(state.player.base_attack, 15);
        assert_eq!(state.player.special_attack, 35);
        assert_eq!(state.phase, SessionPhase::LevelUp { new_level: 2 });
        assert!(events.contains(&BattleEvent::LevelUp { new_level: 2 }));
    }

    #[test]
    fn test_single_level_up_even_on_double_overflow() {
        let mut state = state_with_enemy(defeated(Enemy::new("Dragon", "🐉", 100, 20, 260)));
        // 260 xp crosses 100 and the following 150 threshold in one award.
        let _ = on_enemy_defeated(&mut state);

        assert_eq!(state.player.level, 2, "only one level per defeat");
        assert_eq!(state.player.xp, 160);
        assert!(
            state.player.xp >= state.player.xp_to_next_level,
            "residue waits for the next defeat"
        );
    }

    #[test]
    fn test_max_hp_never_decreases_across_level_ups() {
        let mut player = Player::default();
        let mut prev_max = player.max_hp;
        for _ in 0..10 {
            player.xp = player.xp_to_next_level;
            level_up(&mut player);
            assert!(player.max_hp > prev_max);
            assert!(player.hp <= player.max_hp);
            prev_max = player.max_hp;
        }
    }

    #[test]
    fn test_floor_transition_advances_and_spawns() {
        let mut state = state_with_enemy(defeated(Enemy::new("Orc", "👹", 50, 10, 40)));
        let _ = on_enemy_defeated(&mut state);
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        complete_floor_transition(&mut state, &mut rng);

        assert_eq!(state.current_floor, 2);
        assert!(state.enemy.is_some());
        assert_eq!(state.phase, SessionPhase::Battle);
    }

    #[test]
    fn test_floor_transition_evaluates_achievements_after_advance() {
        use crate::achievements::AchievementId;

        let mut state = state_with_enemy(defeated(Enemy::new("Orc", "👹", 50, 10, 40)));
        state.current_floor = 4;
        let _ = on_enemy_defeated(&mut state);
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let events = complete_floor_transition(&mut state, &mut rng);

        // 4 -> 5 crosses the Floor 5 threshold.
        assert!(state.achievements.is_unlocked(AchievementId::Floor5));
        assert!(events.contains(&BattleEvent::AchievementUnlocked {
            name: "Floor 5 Reached"
        }));
        assert!(state
            .battle_log
            .lines()
            .any(|l| l == "Achievement Unlocked: Floor 5 Reached!"));
    }

    #[test]
    fn test_achievement_unlock_logged_only_once() {
        let mut state = state_with_enemy(defeated(Enemy::new("Orc", "👹", 50, 10, 40)));
        state.current_floor = 5;
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let _ = on_enemy_defeated(&mut state);
        complete_floor_transition(&mut state, &mut rng);

        // Re-running a pass at a higher floor must not re-log Floor 5.
        let _ = run_achievement_pass(&mut state);
        let unlock_lines = state
            .battle_log
            .lines()
            .filter(|l| l.contains("Floor 5 Reached"))
            .count();
        assert_eq!(unlock_lines, 1);
    }

    #[test]
    fn test_level_up_achievement_checked_before_floor_advance() {
        use crate::achievements::AchievementId;

        let mut state = state_with_enemy(defeated(Enemy::new("Dragon", "🐉", 100, 20, 120)));
        state.player.level = 4;
        state.player.xp = 0;
        state.player.xp_to_next_level = 100;

        let events = on_enemy_defeated(&mut state);

        assert_eq!(state.player.level, 5);
        assert!(state.achievements.is_unlocked(AchievementId::Level5));
        assert!(events.contains(&BattleEvent::AchievementUnlocked {
            name: "Level 5 Reached"
        }));
        assert_eq!(state.current_floor, 1, "floor waits for the acknowledgement");
    }

    #[test]
    fn test_acknowledge_level_up_advances_floor_and_spawns() {
        let mut state = state_with_enemy(defeated(Enemy::new("Dragon", "🐉", 100, 20, 120)));
        let _ = on_enemy_defeated(&mut state);
        assert!(matches!(state.phase, SessionPhase::LevelUp { .. }));
        let mut rng = ChaCha8Rng::seed_from_u64(6);

        acknowledge_level_up(&mut state, &mut rng);

        assert_eq!(state.current_floor, 2);
        assert!(state.enemy.is_some());
        assert_eq!(state.phase, SessionPhase::Battle);
    }

    #[test]
    fn test_acknowledge_level_up_is_no_op_in_battle() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut state = GameState::new(&mut rng);
        let enemy_before = state.enemy.clone();

        acknowledge_level_up(&mut state, &mut rng);

        assert_eq!(state.current_floor, 1);
        assert_eq!(state.enemy, enemy_before);
    }
}
