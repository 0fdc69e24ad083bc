// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 100;
pub const COOLDOWN_TICK_SECONDS: f64 = 1.0;
pub const SPAWN_DELAY_SECONDS: f64 = 1.5;
pub const GAME_OVER_PROMPT_DELAY_SECONDS: f64 = 1.0;

// Player starting stats
pub const STARTING_MAX_HP: u32 = 100;
pub const STARTING_BASE_ATTACK: u32 = 10;
pub const STARTING_SPECIAL_ATTACK: u32 = 25;
pub const STARTING_XP_TO_NEXT_LEVEL: u64 = 100;
pub const STARTING_HEALTH_POTIONS: u32 = 3;
pub const STARTING_ATTACK_BOOSTS: u32 = 1;

// XP and leveling
pub const XP_CURVE_FACTOR: f64 = 1.5;
pub const LEVEL_UP_MAX_HP_BONUS: u32 = 10;
pub const LEVEL_UP_ATTACK_BONUS: u32 = 5;
pub const LEVEL_UP_SPECIAL_BONUS: u32 = 10;

// Actions
pub const SPECIAL_COOLDOWN_TURNS: u32 = 3;
pub const HEAL_FRACTION: f64 = 0.5;
pub const FLEE_SUCCESS_CHANCE: f64 = 0.5;

// Enemy generation
pub const BASE_POOL_SIZE: u32 = 3;
pub const FLOORS_PER_POOL_EXPANSION: u32 = 5;
pub const HP_SCALING_PER_FLOOR: f64 = 0.1;
pub const ATTACK_SCALING_PER_FLOOR: f64 = 0.05;
pub const XP_SCALING_PER_FLOOR: f64 = 0.1;

// Battle log
pub const BATTLE_LOG_CAPACITY: usize = 100;
