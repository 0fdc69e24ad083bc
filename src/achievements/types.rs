//! Achievement state and evaluation.

use std::collections::HashMap;

use super::data::ALL_ACHIEVEMENTS;

/// Unique identifier for each achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementId {
    Floor5,
    Floor10,
    Floor20,
    Level5,
    Level10,
}

/// Exactly one threshold gates each achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockCondition {
    FloorReached(u32),
    LevelReached(u32),
}

impl UnlockCondition {
    pub fn is_met(&self, floor: u32, level: u32) -> bool {
        match *self {
            UnlockCondition::FloorReached(required) => floor >= required,
            UnlockCondition::LevelReached(required) => level >= required,
        }
    }
}

/// Static definition of an achievement.
#[derive(Debug, Clone, Copy)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub icon: &'static str,
    pub condition: UnlockCondition,
}

/// Record of a single unlock.
#[derive(Debug, Clone, Copy)]
pub struct UnlockedAchievement {
    pub unlocked_at: i64,
}

/// Unlock state, keyed by achievement id. Unlocks are one-way and survive
/// session resets.
#[derive(Debug, Clone, Default)]
pub struct Achievements {
    unlocked: HashMap<AchievementId, UnlockedAchievement>,
}

impl Achievements {
    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocked.contains_key(&id)
    }

    /// Unlocks an achievement. Returns true if newly unlocked.
    pub fn unlock(&mut self, id: AchievementId) -> bool {
        if self.is_unlocked(id) {
            return false;
        }
        self.unlocked.insert(
            id,
            UnlockedAchievement {
                unlocked_at: chrono::Utc::now().timestamp(),
            },
        );
        true
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }

    pub fn total_count(&self) -> usize {
        ALL_ACHIEVEMENTS.len()
    }
}

/// Unlocks every locked achievement whose threshold the current floor/level
/// meets. Returns the newly unlocked definitions in catalog order; already
/// unlocked achievements are never returned again.
pub fn evaluate(
    achievements: &mut Achievements,
    floor: u32,
    level: u32,
) -> Vec<&'static AchievementDef> {
    ALL_ACHIEVEMENTS
        .iter()
        .filter(|def| def.condition.is_met(floor, level) && achievements.unlock(def.id))
        .collect()
}
