//! Delve - Terminal Turn-Based Dungeon Battler
//!
//! Fight randomly generated enemies floor by floor, level up, and chase
//! achievements. This module exposes the game logic for testing and
//! external use.

pub mod achievements;
pub mod combat;
pub mod core;
pub mod input;
pub mod ui;
