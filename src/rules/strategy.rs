//! Opponent summon strategies.
//!
//! Strategies are trait-based so the scripted opponent can be swapped
//! without touching the turn engine:
//! - `GreedyAttackStrategy`: Highest-attack affordable card, hesitant to
//!   open undefended lanes
//! - `PassiveStrategy`: Never summons

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardPool};
use crate::core::{Combatant, RandomSource, SLOT_COUNT};
use crate::zones::Slots;

/// A pool column to summon from and the slot to summon into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SummonChoice {
    pub col: usize,
    pub slot: usize,
}

/// Everything a strategy may look at when choosing a summon.
#[derive(Clone, Copy, Debug)]
pub struct SummonView<'a> {
    pub pool: &'a CardPool,
    /// Pool row this side draws from.
    pub row: usize,
    pub own: &'a Slots,
    pub enemy: &'a Slots,
    pub wallet: &'a Combatant,
}

impl<'a> SummonView<'a> {
    /// `(column, card)` pairs in the strategy's row that the wallet covers.
    pub fn affordable(&self) -> impl Iterator<Item = (usize, &'a Card)> + '_ {
        self.pool
            .row(self.row)
            .filter(move |(_, card)| self.wallet.can_afford(card))
    }

    /// Empty slot indices on the strategy's own side, in order.
    pub fn open_slots(&self) -> impl Iterator<Item = usize> + '_ {
        (0..SLOT_COUNT).filter(move |&slot| self.own[slot].is_none())
    }
}

/// Chooses at most one summon per invocation.
pub trait SummonStrategy {
    /// Pick a `(column, slot)` pair, or `None` to pass.
    ///
    /// The engine still validates the choice; an illegal pick is dropped.
    fn choose_summon(
        &mut self,
        view: &SummonView<'_>,
        rng: &mut dyn RandomSource,
    ) -> Option<SummonChoice>;
}

/// Summons the hardest-hitting affordable card into the first worthwhile
/// empty slot.
///
/// A slot facing an enemy creature is always worthwhile. A slot facing an
/// empty lane is skipped with probability `skip_undefended_chance`, rolled
/// once per such slot. Attack ties go to the leftmost card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GreedyAttackStrategy {
    pub skip_undefended_chance: f64,
}

impl Default for GreedyAttackStrategy {
    fn default() -> Self {
        Self {
            skip_undefended_chance: 0.3,
        }
    }
}

impl GreedyAttackStrategy {
    #[must_use]
    pub fn new(skip_undefended_chance: f64) -> Self {
        Self {
            skip_undefended_chance,
        }
    }

    fn strongest_affordable<'a>(view: &SummonView<'a>) -> Option<(usize, &'a Card)> {
        let mut best: Option<(usize, &Card)> = None;
        for (col, card) in view.affordable() {
            if best.map_or(true, |(_, current)| card.attack > current.attack) {
                best = Some((col, card));
            }
        }
        best
    }
}

impl SummonStrategy for GreedyAttackStrategy {
    fn choose_summon(
        &mut self,
        view: &SummonView<'_>,
        rng: &mut dyn RandomSource,
    ) -> Option<SummonChoice> {
        let (col, _) = Self::strongest_affordable(view)?;

        for slot in view.open_slots() {
            let defended = view.enemy[slot].is_some();
            if !defended && rng.chance(self.skip_undefended_chance) {
                continue;
            }
            return Some(SummonChoice { col, slot });
        }

        None
    }
}

/// Never summons.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassiveStrategy;

impl SummonStrategy for PassiveStrategy {
    fn choose_summon(
        &mut self,
        _view: &SummonView<'_>,
        _rng: &mut dyn RandomSource,
    ) -> Option<SummonChoice> {
        None
    }
}
