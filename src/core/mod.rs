//! Session state, progression, and the time driver.

#![allow(unused_imports)]

pub mod constants;
pub mod game_state;
pub mod progression;
pub mod tick;

pub use constants::*;
pub use game_state::*;
pub use progression::*;
pub use tick::*;
