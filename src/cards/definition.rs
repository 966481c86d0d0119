//! Card templates - static card data.
//!
//! A `Card` holds the immutable stats of a creature type. For example,
//! "Goblin" costs 1 mana and has 2 attack and 1 health - these are part of
//! the template.
//!
//! Per-summon state (current health, whether it may attack) lives in
//! `Creature`, which owns its own copy of the template.

use serde::{Deserialize, Serialize};

/// Static creature template.
///
/// Stats are unsigned, so a template can never carry a negative cost,
/// attack, or health.
///
/// ## Example
///
/// ```
/// use slot_duel::cards::Card;
///
/// let goblin = Card::new("Goblin", 1, 2, 1);
/// assert_eq!(goblin.attack, 2);
/// assert_eq!(goblin.to_string(), "Goblin (mana 1, atk 2, hp 1)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Card name (for display/debugging).
    pub name: String,

    /// Mana spent to summon.
    pub mana_cost: u32,

    /// Damage dealt per attack.
    pub attack: u32,

    /// Health a fresh summon starts with.
    pub health: u32,
}

impl Card {
    #[must_use]
    pub fn new(name: impl Into<String>, mana_cost: u32, attack: u32, health: u32) -> Self {
        Self {
            name: name.into(),
            mana_cost,
            attack,
            health,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (mana {}, atk {}, hp {})",
            self.name, self.mana_cost, self.attack, self.health
        )
    }
}
