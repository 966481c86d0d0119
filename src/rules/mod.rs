//! Game rules: combat, deferred removal, opponent strategy, and the turn
//! engine that sequences them.
//!
//! The turn engine is the only caller of the other three. Combat fills the
//! removal queue; the engine (or its host) drains it.

pub mod combat;
pub mod engine;
pub mod removal;
pub mod strategy;

pub use combat::{CombatReport, CombatResolver};
pub use engine::{GameSession, Phase, TurnReport};
pub use removal::{PendingRemoval, RemovalQueue};
pub use strategy::{GreedyAttackStrategy, PassiveStrategy, SummonChoice, SummonStrategy, SummonView};
