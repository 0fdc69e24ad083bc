//! Enemies, the battle log, and the player action resolution.

#![allow(unused_imports)]

pub mod data;
pub mod generation;
pub mod logic;
pub mod types;

pub use data::*;
pub use generation::*;
pub use logic::*;
pub use types::*;
