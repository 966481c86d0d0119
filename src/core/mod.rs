//! Core engine types: sides, combatants, RNG, configuration.
//!
//! These are the leaf building blocks every other module depends on.

pub mod side;
pub mod rng;
pub mod config;
pub mod combatant;

pub use side::{Side, SideMap};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedRolls};
pub use config::{GameConfig, SLOT_COUNT};
pub use combatant::Combatant;
