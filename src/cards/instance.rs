//! Creature instances - runtime card state.
//!
//! A `Creature` is what a successful summon puts into a slot: an
//! independent copy of a `Card` plus the mutable state combat needs.
//!
//! ## Lifecycle
//!
//! 1. Summoned inactive (cannot attack this turn)
//! 2. Activated at the end of its side's turn
//! 3. Damaged in combat; once health reaches zero it is deactivated and
//!    waits in its slot for the removal queue to drain it

use serde::{Deserialize, Serialize};

use super::definition::Card;
use crate::core::Side;

/// A creature occupying a battle slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Creature {
    /// Private copy of the template; never shared with the pool.
    pub card: Card,

    /// Side that summoned it. Fixed for the creature's lifetime.
    pub side: Side,

    /// Signed so an overkill exchange stays observable (e.g. `-1`).
    current_health: i64,

    active: bool,
}

impl Creature {
    /// Summon a fresh, inactive copy of `card` for `side`.
    #[must_use]
    pub fn summon(card: &Card, side: Side) -> Self {
        Self {
            card: card.clone(),
            side,
            current_health: i64::from(card.health),
            active: false,
        }
    }

    #[must_use]
    pub fn attack(&self) -> u32 {
        self.card.attack
    }

    #[must_use]
    pub fn current_health(&self) -> i64 {
        self.current_health
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Alive and active.
    #[must_use]
    pub fn can_attack(&self) -> bool {
        self.active && self.is_alive()
    }

    /// Allow attacking from the next combat pass on. Dead creatures stay inactive.
    pub fn activate(&mut self) {
        if self.is_alive() {
            self.active = true;
        }
    }

    /// Subtract damage. Returns `true` if this blow killed the creature,
    /// which also deactivates it.
    pub fn receive_damage(&mut self, amount: u32) -> bool {
        let was_alive = self.is_alive();
        self.current_health -= i64::from(amount);
        if !self.is_alive() {
            self.active = false;
        }
        was_alive && !self.is_alive()
    }
}

impl std::fmt::Display for Creature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (atk {}, hp {}/{}{})",
            self.card.name,
            self.card.attack,
            self.current_health,
            self.card.health,
            if self.active { ", active" } else { "" }
        )
    }
}
