//! Static enemy catalog.
//!
//! The ordering is load-bearing: the generator's pool is always a prefix of
//! this list, so entries run weakest-ish to strongest.

/// Immutable enemy archetype template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub sprite: &'static str,
    pub base_hp: u32,
    pub base_attack: u32,
    pub base_xp: u64,
}

/// All enemy archetypes, in pool order.
pub const ENEMY_CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "Goblin",
        sprite: "👺",
        base_hp: 30,
        base_attack: 5,
        base_xp: 20,
    },
    CatalogEntry {
        name: "Skeleton",
        sprite: "💀",
        base_hp: 40,
        base_attack: 7,
        base_xp: 30,
    },
    CatalogEntry {
        name: "Orc",
        sprite: "👹",
        base_hp: 50,
        base_attack: 10,
        base_xp: 40,
    },
    CatalogEntry {
        name: "Slime",
        sprite: "👾",
        base_hp: 25,
        base_attack: 3,
        base_xp: 15,
    },
    CatalogEntry {
        name: "Ghost",
        sprite: "👻",
        base_hp: 35,
        base_attack: 8,
        base_xp: 35,
    },
    CatalogEntry {
        name: "Wolf",
        sprite: "🐺",
        base_hp: 45,
        base_attack: 12,
        base_xp: 45,
    },
    CatalogEntry {
        name: "Troll",
        sprite: "🧌",
        base_hp: 70,
        base_attack: 15,
        base_xp: 60,
    },
    CatalogEntry {
        name: "Dragon",
        sprite: "🐉",
        base_hp: 100,
        base_attack: 20,
        base_xp: 100,
    },
];
