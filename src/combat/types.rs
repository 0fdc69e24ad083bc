use std::collections::VecDeque;

use crate::core::constants::BATTLE_LOG_CAPACITY;

/// A live enemy instance for the current encounter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enemy {
    pub name: &'static str,
    pub sprite: &'static str,
    pub max_hp: u32,
    pub hp: u32,
    pub attack: u32,
    pub xp_reward: u64,
}

impl Enemy {
    pub fn new(
        name: &'static str,
        sprite: &'static str,
        max_hp: u32,
        attack: u32,
        xp_reward: u64,
    ) -> Self {
        Self {
            name,
            sprite,
            max_hp,
            hp: max_hp,
            attack,
            xp_reward,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }
}

/// Append-only battle log consumed by the presentation layer.
///
/// Bounded so an arbitrarily long run cannot grow without limit; the UI only
/// ever shows the tail.
#[derive(Debug, Clone, Default)]
pub struct BattleLog {
    lines: VecDeque<String>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self {
            lines: VecDeque::with_capacity(BATTLE_LOG_CAPACITY),
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        if self.lines.len() >= BATTLE_LOG_CAPACITY {
            self.lines.pop_front();
        }
        self.lines.push_back(line.into());
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Ordered lines, oldest first.
    pub fn lines(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.back().map(String::as_str)
    }
}
