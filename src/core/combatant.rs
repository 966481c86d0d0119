//! Combatants: the health and mana wallet behind each side.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// One side's hero: a health pool and a mana wallet.
///
/// Health never drops below zero and mana never goes negative. Both
/// invariants are carried by the unsigned field types plus the saturating
/// arithmetic below.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    health: u32,
    max_health: u32,
    mana: u32,
}

impl Combatant {
    /// Create a combatant at full health with an empty wallet.
    #[must_use]
    pub fn new(name: impl Into<String>, max_health: u32) -> Self {
        Self {
            name: name.into(),
            health: max_health,
            max_health,
            mana: 0,
        }
    }

    #[must_use]
    pub fn health(&self) -> u32 {
        self.health
    }

    #[must_use]
    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    #[must_use]
    pub fn mana(&self) -> u32 {
        self.mana
    }

    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    /// Check if the wallet covers a card's cost.
    #[must_use]
    pub fn can_afford(&self, card: &Card) -> bool {
        self.mana >= card.mana_cost
    }

    /// Spend mana on a card.
    ///
    /// Does nothing and returns `false` when the card is unaffordable.
    pub fn pay(&mut self, card: &Card) -> bool {
        if !self.can_afford(card) {
            return false;
        }
        self.mana -= card.mana_cost;
        true
    }

    /// Replace the wallet contents. Unspent mana does not carry over.
    pub fn refill_mana(&mut self, amount: u32) {
        self.mana = amount;
    }

    /// Apply damage, flooring health at zero.
    ///
    /// Damage is unsigned, so this can never heal.
    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }
}

impl std::fmt::Display for Combatant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (hp {}/{}, mana {})",
            self.name, self.health, self.max_health, self.mana
        )
    }
}
