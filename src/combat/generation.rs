//! Enemy generation: catalog prefix pool plus per-floor stat scaling.

use rand::Rng;

use super::data::{CatalogEntry, ENEMY_CATALOG};
use super::types::Enemy;
use crate::core::constants::*;

/// Number of catalog entries eligible on the given floor.
///
/// The pool widens by one archetype every `FLOORS_PER_POOL_EXPANSION` floors
/// and is clamped so it never runs past the catalog.
pub fn pool_size(floor: u32) -> usize {
    let floor_modifier = (floor / FLOORS_PER_POOL_EXPANSION).min(ENEMY_CATALOG.len() as u32 - 1);
    ((BASE_POOL_SIZE + floor_modifier) as usize).min(ENEMY_CATALOG.len())
}

/// Scales a catalog entry to the given floor. Stats truncate toward zero.
pub fn scale_entry(entry: &CatalogEntry, floor: u32) -> Enemy {
    let hp_multiplier = 1.0 + floor as f64 * HP_SCALING_PER_FLOOR;
    let attack_multiplier = 1.0 + floor as f64 * ATTACK_SCALING_PER_FLOOR;
    let xp_multiplier = 1.0 + floor as f64 * XP_SCALING_PER_FLOOR;

    Enemy::new(
        entry.name,
        entry.sprite,
        (entry.base_hp as f64 * hp_multiplier) as u32,
        (entry.base_attack as f64 * attack_multiplier) as u32,
        (entry.base_xp as f64 * xp_multiplier) as u64,
    )
}

/// Generates a fresh enemy for the given floor: uniform pick from the
/// floor's pool, scaled by the floor multipliers.
pub fn generate_enemy(floor: u32, rng: &mut impl Rng) -> Enemy {
    let pool = &ENEMY_CATALOG[..pool_size(floor)];
    let entry = &pool[rng.gen_range(0..pool.len())];
    scale_entry(entry, floor)
}
