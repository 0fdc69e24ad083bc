//! Static achievement definitions.

use super::types::{AchievementDef, AchievementId, UnlockCondition};

/// All achievement definitions in display (and evaluation) order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        id: AchievementId::Floor5,
        name: "Floor 5 Reached",
        icon: "🏔️",
        condition: UnlockCondition::FloorReached(5),
    },
    AchievementDef {
        id: AchievementId::Floor10,
        name: "Floor 10 Reached",
        icon: "🏔️",
        condition: UnlockCondition::FloorReached(10),
    },
    AchievementDef {
        id: AchievementId::Floor20,
        name: "Floor 20 Reached",
        icon: "🏔️",
        condition: UnlockCondition::FloorReached(20),
    },
    AchievementDef {
        id: AchievementId::Level5,
        name: "Level 5 Reached",
        icon: "📈",
        condition: UnlockCondition::LevelReached(5),
    },
    AchievementDef {
        id: AchievementId::Level10,
        name: "Level 10 Reached",
        icon: "📈",
        condition: UnlockCondition::LevelReached(10),
    },
];

/// Get the definition for a specific achievement.
pub fn get_achievement_def(id: AchievementId) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|a| a.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_achievements_have_unique_ids() {
        use std::collections::HashSet;
        let mut ids = HashSet::new();
        for achievement in ALL_ACHIEVEMENTS {
            assert!(
                ids.insert(achievement.id),
                "Duplicate achievement ID: {:?}",
                achievement.id
            );
        }
    }

    #[test]
    fn test_get_achievement_def() {
        let def = get_achievement_def(AchievementId::Floor5).unwrap();
        assert_eq!(def.name, "Floor 5 Reached");
        assert_eq!(def.condition, UnlockCondition::FloorReached(5));
    }

    #[test]
    fn test_each_achievement_has_exactly_one_condition() {
        // The condition enum makes this structural, but the thresholds
        // themselves should match the display names.
        for def in ALL_ACHIEVEMENTS {
            match def.condition {
                UnlockCondition::FloorReached(n) => {
                    assert!(def.name.contains(&format!("Floor {}", n)))
                }
                UnlockCondition::LevelReached(n) => {
                    assert!(def.name.contains(&format!("Level {}", n)))
                }
            }
        }
    }
}
