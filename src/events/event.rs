//! Game event types.
//!
//! Events describe what just happened, in order, so a presentation layer or
//! pacing scheduler can animate it. The engine never waits on them.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::Side;

/// Something that happened during a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Pool loaded and wallets set.
    GameStarted,

    /// The shared turn counter advanced.
    TurnAdvanced { turn: u32 },

    /// A creature entered a slot.
    CreatureSummoned { side: Side, slot: usize, card: Card },

    /// Two creatures in mirrored slots traded blows.
    ///
    /// `side` is the attacking side. `damage_dealt` went to the defender,
    /// `damage_taken` came back to the attacker.
    CombatExchange {
        side: Side,
        slot: usize,
        attacker: Card,
        defender: Card,
        damage_dealt: u32,
        damage_taken: u32,
    },

    /// A combatant was hit directly through an open lane.
    CombatantDamaged {
        side: Side,
        amount: u32,
        remaining_health: u32,
    },

    /// A creature died and is waiting in its slot to be cleared.
    CreaturePendingRemoval { side: Side, slot: usize },

    /// A dead creature was cleared from its slot.
    CreatureRemoved { side: Side, slot: usize },

    /// A creature became able to attack.
    CreatureActivated { side: Side, slot: usize },

    /// A combatant hit zero health.
    GameOver { winner: Side },
}

impl GameEvent {
    /// The side the event concerns, if any.
    #[must_use]
    pub fn side(&self) -> Option<Side> {
        match self {
            GameEvent::GameStarted | GameEvent::TurnAdvanced { .. } => None,
            GameEvent::CreatureSummoned { side, .. }
            | GameEvent::CombatExchange { side, .. }
            | GameEvent::CombatantDamaged { side, .. }
            | GameEvent::CreaturePendingRemoval { side, .. }
            | GameEvent::CreatureRemoved { side, .. }
            | GameEvent::CreatureActivated { side, .. } => Some(*side),
            GameEvent::GameOver { winner } => Some(*winner),
        }
    }
}
