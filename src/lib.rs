//! # slot-duel
//!
//! Turn and combat resolution engine for a two-player creature card game:
//! a human player against a scripted opponent.
//!
//! ## Rules in Brief
//!
//! 1. **Mana**: Each side's wallet is refilled to `min(turn, 10)` at the
//!    start of its turn. Unspent mana is lost.
//!
//! 2. **Summoning**: Cards are copied out of a shared pool into one of eight
//!    slots per side. A new creature cannot attack until its side's next
//!    combat pass.
//!
//! 3. **Combat**: Slot `i` fights slot `i`. An empty (or dead) opposing slot
//!    lets the attacker hit the opposing combatant directly.
//!
//! 4. **Removal**: Dead creatures stay in their slot until the removal queue
//!    is drained, so a presentation layer can show them dying.
//!
//! ## Architecture
//!
//! - **Synchronous core**: No sleeping or awaiting. Pacing belongs to the
//!   host, which observes progress through an `EventSink`.
//!
//! - **Injectable opponent**: `SummonStrategy` and `RandomSource` are trait
//!   seams; tests run the opponent deterministically.
//!
//! ## Modules
//!
//! - `core`: Sides, combatants, RNG, configuration
//! - `cards`: Card templates, creature instances, the card pool
//! - `zones`: The battlefield slots
//! - `events`: Notifications for presentation layers
//! - `rules`: Combat, removal, opponent strategy, and the turn engine

pub mod core;
pub mod cards;
pub mod zones;
pub mod events;
pub mod rules;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Side, SideMap,
    GameRng, GameRngState, RandomSource, ScriptedRolls,
    GameConfig, SLOT_COUNT,
    Combatant,
};

pub use crate::cards::{Card, CardPool, Creature, standard_pool, OPPONENT_ROW, PLAYER_ROW};

pub use crate::zones::Battlefield;

pub use crate::events::{EventLog, EventSink, GameEvent, NullSink};

pub use crate::rules::{
    CombatReport, CombatResolver,
    GameSession, Phase, TurnReport,
    PendingRemoval, RemovalQueue,
    GreedyAttackStrategy, PassiveStrategy, SummonChoice, SummonStrategy, SummonView,
};

pub use crate::error::GameError;
