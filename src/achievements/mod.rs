//! Achievement system module.
//!
//! Static definitions live in [`data`]; the unlock state and the evaluator
//! live in [`types`]. Unlocks are one-way and survive session resets.

pub mod data;
pub mod types;

pub use data::{get_achievement_def, ALL_ACHIEVEMENTS};
pub use types::{evaluate, AchievementDef, AchievementId, Achievements, UnlockCondition};
