use rand::Rng;

use crate::achievements::Achievements;
use crate::combat::generation::generate_enemy;
use crate::combat::types::{BattleLog, Enemy};
use crate::core::constants::*;

/// Consumable items carried by the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    pub health_potions: u32,
    /// Carried but never consumed; shown in the inventory panel only.
    pub attack_boosts: u32,
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            health_potions: STARTING_HEALTH_POTIONS,
            attack_boosts: STARTING_ATTACK_BOOSTS,
        }
    }
}

/// The player character for one playthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub level: u32,
    pub max_hp: u32,
    pub hp: u32,
    pub xp: u64,
    pub xp_to_next_level: u64,
    pub base_attack: u32,
    pub special_attack: u32,
    /// Turns remaining before the special attack is usable again.
    pub special_cooldown: u32,
    pub inventory: Inventory,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            level: 1,
            max_hp: STARTING_MAX_HP,
            hp: STARTING_MAX_HP,
            xp: 0,
            xp_to_next_level: STARTING_XP_TO_NEXT_LEVEL,
            base_attack: STARTING_BASE_ATTACK,
            special_attack: STARTING_SPECIAL_ATTACK,
            special_cooldown: 0,
            inventory: Inventory::default(),
        }
    }
}

impl Player {
    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Heals by `amount`, capped at max hp. Returns the hp actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = (self.hp + amount).min(self.max_hp);
        self.hp - before
    }
}

/// Where the session currently is in its action/continuation cycle.
///
/// Deferred continuations (the pause before the next floor's spawn and the
/// pause before the play-again prompt) live here as explicit timers advanced
/// by [`crate::core::tick::advance_time`]; there is no real concurrency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionPhase {
    /// Awaiting a player action.
    Battle,
    /// Enemy defeated; floor advance and next spawn fire when the timer
    /// reaches [`SPAWN_DELAY_SECONDS`].
    FloorTransition { timer: f64 },
    /// Level-up notice shown; floor advance waits for the acknowledgement.
    LevelUp { new_level: u32 },
    /// Terminal until reset. The play-again prompt is emitted once the timer
    /// reaches [`GAME_OVER_PROMPT_DELAY_SECONDS`].
    GameOver { timer: f64, prompted: bool },
}

/// Complete mutable state for one continuous playthrough.
#[derive(Debug, Clone)]
pub struct GameState {
    pub player: Player,
    pub enemy: Option<Enemy>,
    pub current_floor: u32,
    pub achievements: Achievements,
    pub battle_log: BattleLog,
    pub phase: SessionPhase,
    /// Accumulates delta time; every full second on the clock decrements the
    /// special cooldown by one.
    pub cooldown_timer: f64,
}

impl GameState {
    /// Creates a fresh session on floor 1 with the first enemy spawned.
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut state = Self {
            player: Player::default(),
            enemy: None,
            current_floor: 1,
            achievements: Achievements::default(),
            battle_log: BattleLog::new(),
            phase: SessionPhase::Battle,
            cooldown_timer: 0.0,
        };
        state.spawn_enemy(rng);
        state
    }

    /// Spawns an enemy for the current floor and announces it.
    pub fn spawn_enemy(&mut self, rng: &mut impl Rng) {
        let enemy = generate_enemy(self.current_floor, rng);
        self.battle_log
            .push(format!("A wild {} appears!", enemy.name));
        self.enemy = Some(enemy);
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, SessionPhase::GameOver { .. })
    }

    /// Starts a new playthrough in place. The battle log is cleared and the
    /// player and floor go back to their defaults; achievement unlocks are
    /// permanent and survive the reset.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.player = Player::default();
        self.current_floor = 1;
        self.battle_log.clear();
        self.phase = SessionPhase::Battle;
        self.cooldown_timer = 0.0;
        self.spawn_enemy(rng);
    }
}
