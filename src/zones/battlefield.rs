//! Battlefield: the two slot rows and the card pool.
//!
//! The `Battlefield` tracks which creature sits in which slot. It supports:
//! - Placement into empty, in-range slots only
//! - Mutable slot access for the combat resolver
//! - Clearing a slot (used only by the removal queue)

use serde::{Deserialize, Serialize};

use crate::cards::{CardPool, Creature};
use crate::core::{Side, SideMap, SLOT_COUNT};

/// One side's battle slots.
pub type Slots = [Option<Creature>; SLOT_COUNT];

/// Both sides' slots plus the pool they summon from.
///
/// ## Usage
///
/// ```
/// use slot_duel::cards::{Card, Creature};
/// use slot_duel::core::Side;
/// use slot_duel::zones::Battlefield;
///
/// let mut field = Battlefield::new();
/// let wolf = Creature::summon(&Card::new("Wolf", 2, 2, 3), Side::Player);
///
/// assert!(field.place_creature(wolf.clone(), 3, Side::Player));
/// assert!(!field.place_creature(wolf.clone(), 3, Side::Player)); // occupied
/// assert!(!field.place_creature(wolf, 8, Side::Player));         // out of range
/// assert_eq!(field.occupied_count(Side::Player), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Battlefield {
    slots: SideMap<Slots>,
    pool: CardPool,
}

impl Battlefield {
    /// Empty slots and an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_pool(pool: CardPool) -> Self {
        Self {
            slots: SideMap::default(),
            pool,
        }
    }

    #[must_use]
    pub fn pool(&self) -> &CardPool {
        &self.pool
    }

    /// Put a creature into an empty slot.
    ///
    /// Returns `false` without side effects for an out-of-range or occupied
    /// slot.
    pub fn place_creature(&mut self, creature: Creature, slot: usize, side: Side) -> bool {
        match self.slots[side].get_mut(slot) {
            Some(cell) if cell.is_none() => {
                *cell = Some(creature);
                true
            }
            _ => false,
        }
    }

    /// Check whether a slot index is in range and empty.
    #[must_use]
    pub fn is_vacant(&self, slot: usize, side: Side) -> bool {
        matches!(self.slots[side].get(slot), Some(None))
    }

    #[must_use]
    pub fn creatures_of(&self, side: Side) -> &Slots {
        &self.slots[side]
    }

    /// Mutable access to `side`'s slots and the other side's, in that order.
    pub fn sides_mut(&mut self, side: Side) -> (&mut Slots, &mut Slots) {
        self.slots.split_mut(side)
    }

    #[must_use]
    pub fn creature(&self, side: Side, slot: usize) -> Option<&Creature> {
        self.slots[side].get(slot)?.as_ref()
    }

    pub fn creature_mut(&mut self, side: Side, slot: usize) -> Option<&mut Creature> {
        self.slots[side].get_mut(slot)?.as_mut()
    }

    /// Empty a slot, returning what was there.
    pub(crate) fn take(&mut self, side: Side, slot: usize) -> Option<Creature> {
        self.slots[side].get_mut(slot)?.take()
    }

    /// Number of occupied slots, dead occupants included.
    #[must_use]
    pub fn occupied_count(&self, side: Side) -> usize {
        self.slots[side].iter().filter(|cell| cell.is_some()).count()
    }

    /// Set `active` on every living creature of `side`.
    ///
    /// Returns the slots that changed from inactive to active.
    pub fn activate_all(&mut self, side: Side) -> Vec<usize> {
        let mut activated = Vec::new();
        for (slot, creature) in self.slots[side].iter_mut().enumerate() {
            if let Some(creature) = creature {
                if creature.is_alive() && !creature.is_active() {
                    creature.activate();
                    activated.push(slot);
                }
            }
        }
        activated
    }
}
