//! Turn resolution: one player action, then the enemy's counter-action.

use rand::Rng;

use crate::core::constants::*;
use crate::core::game_state::{GameState, SessionPhase};
use crate::core::progression::on_enemy_defeated;

/// A discrete player intent for one battle turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Attack,
    Special,
    Heal,
    Flee,
}

/// Something the turn produced that the presentation layer may react to
/// beyond re-reading the state snapshot. Log lines are written to the battle
/// log directly; these carry the structured signals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleEvent {
    PlayerAttack { damage: u32, special: bool },
    EnemyAttack { damage: u32 },
    EnemyDefeated { name: &'static str, xp_gained: u64 },
    AchievementUnlocked { name: &'static str },
    /// Floor advancement is blocked until the player acknowledges.
    LevelUp { new_level: u32 },
    FleeSucceeded { new_floor: u32 },
    FleeFailed,
    /// Terminal; further actions are rejected until reset.
    GameOver { floor: u32, level: u32 },
    /// Emitted once, a short delay after game over.
    PlayAgainPrompt,
}

/// Applies one player action and, where the rules call for it, the enemy's
/// counter-turn. Outside the `Battle` phase every action is an absorbed
/// no-op: the session is either terminal or has no enemy to act on.
pub fn apply_player_action(
    state: &mut GameState,
    action: PlayerAction,
    rng: &mut impl Rng,
) -> Vec<BattleEvent> {
    if state.phase != SessionPhase::Battle {
        return Vec::new();
    }

    match action {
        PlayerAction::Attack => attack(state, false),
        PlayerAction::Special => special_attack(state),
        PlayerAction::Heal => use_health_potion(state),
        PlayerAction::Flee => attempt_flee(state, rng),
    }
}

fn attack(state: &mut GameState, special: bool) -> Vec<BattleEvent> {
    let Some(enemy) = state.enemy.as_mut() else {
        return Vec::new();
    };

    let damage = if special {
        state.player.special_attack
    } else {
        state.player.base_attack
    };
    enemy.take_damage(damage);

    let mut events = vec![BattleEvent::PlayerAttack { damage, special }];
    if special {
        state.battle_log.push(format!(
            "You use a SPECIAL ATTACK on the {} for {} damage!",
            enemy.name, damage
        ));
    } else {
        state
            .battle_log
            .push(format!("You attack the {} for {} damage!", enemy.name, damage));
    }

    if !enemy.is_alive() {
        events.extend(on_enemy_defeated(state));
    } else {
        events.extend(enemy_turn(state));
    }
    events
}

fn special_attack(state: &mut GameState) -> Vec<BattleEvent> {
    // Unavailable: fails silently, like a disabled button.
    if state.enemy.is_none() || state.player.special_cooldown > 0 {
        return Vec::new();
    }
    state.player.special_cooldown = SPECIAL_COOLDOWN_TURNS;
    attack(state, true)
}

fn use_health_potion(state: &mut GameState) -> Vec<BattleEvent> {
    if state.player.inventory.health_potions == 0 {
        state
            .battle_log
            .push("You don't have any Health Potions left!");
        return Vec::new();
    }

    let heal_amount = (state.player.max_hp as f64 * HEAL_FRACTION) as u32;
    state.player.heal(heal_amount);
    state.player.inventory.health_potions -= 1;
    state
        .battle_log
        .push(format!("You use a Health Potion and heal {} HP!", heal_amount));

    // Healing never skips the enemy's turn.
    enemy_turn(state)
}

fn attempt_flee(state: &mut GameState, rng: &mut impl Rng) -> Vec<BattleEvent> {
    if rng.gen::<f64>() < FLEE_SUCCESS_CHANCE {
        state.battle_log.push("You successfully fled from battle!");
        state.current_floor = state.current_floor.saturating_sub(1).max(1);
        state.spawn_enemy(rng);
        vec![BattleEvent::FleeSucceeded {
            new_floor: state.current_floor,
        }]
    } else {
        state.battle_log.push("You failed to flee!");
        let mut events = vec![BattleEvent::FleeFailed];
        events.extend(enemy_turn(state));
        events
    }
}

/// The enemy's counter-action, resolved synchronously within the same
/// player action.
fn enemy_turn(state: &mut GameState) -> Vec<BattleEvent> {
    let Some(enemy) = state.enemy.as_ref() else {
        return Vec::new();
    };

    let damage = enemy.attack;
    state.player.take_damage(damage);
    state
        .battle_log
        .push(format!("The {} attacks you for {} damage!", enemy.name, damage));

    let mut events = vec![BattleEvent::EnemyAttack { damage }];
    if state.player.is_defeated() {
        events.extend(game_over(state));
    }
    events
}

fn game_over(state: &mut GameState) -> Vec<BattleEvent> {
    state.battle_log.push("GAME OVER! You were defeated...");
    state.battle_log.push(format!(
        "You reached floor {} and achieved level {}.",
        state.current_floor, state.player.level
    ));
    state.phase = SessionPhase::GameOver {
        timer: 0.0,
        prompted: false,
    };
    vec![BattleEvent::GameOver {
        floor: state.current_floor,
        level: state.player.level,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::types::Enemy;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn battle_state(enemy: Enemy) -> GameState {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut state = GameState::new(&mut rng);
        state.enemy = Some(enemy);
        state.battle_log.clear();
        state
    }

    #[test]
    fn test_attack_surviving_enemy_triggers_counter_turn() {
        let mut state = battle_state(Enemy::new("Orc", "👹", 30, 8, 40));
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let events = apply_player_action(&mut state, PlayerAction::Attack, &mut rng);

        // 30 - 10 = 20: enemy survives and strikes back for 8.
        assert_eq!(state.enemy.as_ref().unwrap().hp, 20);
        assert_eq!(state.player.hp, 92);
        assert!(events.contains(&BattleEvent::PlayerAttack {
            damage: 10,
            special: false
        }));
        assert!(events.contains(&BattleEvent::EnemyAttack { damage: 8 }));
    }

    #[test]
    fn test_attack_to_exactly_zero_defeats_without_counter_turn() {
        let mut state = battle_state(Enemy::new("Goblin", "👺", 10, 5, 20));
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let events = apply_player_action(&mut state, PlayerAction::Attack, &mut rng);

        assert!(state.enemy.is_none(), "defeated enemy is cleared");
        assert_eq!(state.player.hp, 100, "no counter-turn on the killing blow");
        assert!(events.contains(&BattleEvent::EnemyDefeated {
            name: "Goblin",
            xp_gained: 20
        }));
        assert!(!events
            .iter()
            .any(|e| matches!(e, BattleEvent::EnemyAttack { .. })));
    }

    #[test]
    fn test_special_attack_sets_cooldown() {
        let mut state = battle_state(Enemy::new("Troll", "🧌", 80, 15, 60));
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let events = apply_player_action(&mut state, PlayerAction::Special, &mut rng);

        assert_eq!(state.enemy.as_ref().unwrap().hp, 55); // 80 - 25
        assert_eq!(state.player.special_cooldown, SPECIAL_COOLDOWN_TURNS);
        assert!(events.contains(&BattleEvent::PlayerAttack {
            damage: 25,
            special: true
        }));
    }

    #[test]
    fn test_special_attack_on_cooldown_is_silent_no_op() {
        let mut state = battle_state(Enemy::new("Troll", "🧌", 80, 15, 60));
        state.player.special_cooldown = 2;
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let events = apply_player_action(&mut state, PlayerAction::Special, &mut rng);

        assert!(events.is_empty());
        assert_eq!(state.enemy.as_ref().unwrap().hp, 80);
        assert!(state.battle_log.is_empty(), "no log line for a disabled special");
        assert_eq!(state.player.hp, 100, "no enemy turn either");
    }

    #[test]
    fn test_heal_restores_half_max_and_enemy_still_acts() {
        let mut state = battle_state(Enemy::new("Wolf", "🐺", 45, 12, 45));
        state.player.hp = 40;
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let events = apply_player_action(&mut state, PlayerAction::Heal, &mut rng);

        // 40 + 50 = 90, then the wolf hits for 12.
        assert_eq!(state.player.hp, 78);
        assert_eq!(state.player.inventory.health_potions, 2);
        assert!(events.contains(&BattleEvent::EnemyAttack { damage: 12 }));
    }

    #[test]
    fn test_heal_clamps_to_max_hp() {
        let mut state = battle_state(Enemy::new("Slime", "👾", 25, 3, 15));
        state.player.hp = 90;
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        apply_player_action(&mut state, PlayerAction::Heal, &mut rng);

        // Clamped at 100 before the slime's 3 damage.
        assert_eq!(state.player.hp, 97);
    }

    #[test]
    fn test_heal_without_potions_skips_enemy_turn() {
        let mut state = battle_state(Enemy::new("Wolf", "🐺", 45, 12, 45));
        state.player.inventory.health_potions = 0;
        state.player.hp = 40;
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let events = apply_player_action(&mut state, PlayerAction::Heal, &mut rng);

        assert!(events.is_empty());
        assert_eq!(state.player.hp, 40);
        assert_eq!(
            state.battle_log.last(),
            Some("You don't have any Health Potions left!")
        );
    }

    #[test]
    fn test_flee_branches_under_seeded_rng() {
        // Both branches must show up across seeds, and each must uphold its
        // contract: success swaps the enemy with no counter-attack, failure
        // keeps the enemy and takes the hit.
        let mut saw_success = false;
        let mut saw_failure = false;

        for seed in 0..64 {
            let mut state = battle_state(Enemy::new("Ghost", "👻", 35, 8, 35));
            state.current_floor = 3;
            let mut rng = ChaCha8Rng::seed_from_u64(seed);

            let events = apply_player_action(&mut state, PlayerAction::Flee, &mut rng);

            if events.contains(&BattleEvent::FleeSucceeded { new_floor: 2 }) {
                saw_success = true;
                assert_eq!(state.current_floor, 2);
                assert!(state.enemy.is_some(), "a fresh enemy spawns on the new floor");
                assert_eq!(state.player.hp, 100, "no enemy turn after a clean escape");
            } else {
                saw_failure = true;
                assert!(events.contains(&BattleEvent::FleeFailed));
                assert_eq!(state.current_floor, 3);
                assert_eq!(state.player.hp, 92, "failed flee still costs the enemy turn");
            }
        }

        assert!(saw_success && saw_failure, "seeds 0..64 must hit both branches");
    }

    #[test]
    fn test_flee_floor_clamps_at_one() {
        for seed in 0..64 {
            let mut state = battle_state(Enemy::new("Goblin", "👺", 30, 5, 20));
            let mut rng = ChaCha8Rng::seed_from_u64(seed);

            apply_player_action(&mut state, PlayerAction::Flee, &mut rng);
            assert_eq!(state.current_floor, 1);
        }
    }

    #[test]
    fn test_lethal_counter_turn_ends_the_game() {
        let mut state = battle_state(Enemy::new("Dragon", "🐉", 500, 200, 100));
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let events = apply_player_action(&mut state, PlayerAction::Attack, &mut rng);

        assert!(state.player.is_defeated());
        assert!(state.is_game_over());
        assert!(events.contains(&BattleEvent::GameOver { floor: 1, level: 1 }));
        assert_eq!(
            state.battle_log.last(),
            Some("You reached floor 1 and achieved level 1.")
        );
    }

    #[test]
    fn test_actions_rejected_after_game_over() {
        let mut state = battle_state(Enemy::new("Dragon", "🐉", 500, 200, 100));
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        apply_player_action(&mut state, PlayerAction::Attack, &mut rng);
        assert!(state.is_game_over());

        let log_len = state.battle_log.len();
        for action in [
            PlayerAction::Attack,
            PlayerAction::Special,
            PlayerAction::Heal,
            PlayerAction::Flee,
        ] {
            let events = apply_player_action(&mut state, action, &mut rng);
            assert!(events.is_empty(), "{:?} must be rejected when terminal", action);
        }
        assert_eq!(state.battle_log.len(), log_len);
        assert_eq!(state.player.inventory.health_potions, 3);
    }
}
