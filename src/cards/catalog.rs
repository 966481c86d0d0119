//! Starter catalog: the canonical 8×2 pool.
//!
//! Row 0 is the opponent's selection, row 1 the player's.

use super::definition::Card;
use super::pool::CardPool;

/// Pool row the opponent draws from.
pub const OPPONENT_ROW: usize = 0;

/// Pool row the player draws from.
pub const PLAYER_ROW: usize = 1;

/// The sixteen starter creatures in catalog order.
#[must_use]
pub fn starter_cards() -> Vec<Card> {
    [
        ("Goblin", 1, 2, 1),
        ("Orc", 2, 3, 2),
        ("Troll", 3, 4, 3),
        ("Dragon", 4, 6, 5),
        ("Rat", 1, 1, 1),
        ("Wolf", 2, 2, 3),
        ("Bear", 3, 3, 4),
        ("Ogre", 4, 5, 4),
        ("Skeleton", 1, 1, 2),
        ("Zombie", 2, 2, 2),
        ("Ghost", 3, 3, 1),
        ("Vampire", 4, 4, 4),
        ("Cat", 1, 1, 1),
        ("Dog", 2, 2, 2),
        ("Bull", 3, 3, 3),
        ("Lion", 4, 5, 5),
    ]
    .into_iter()
    .map(|(name, cost, attack, health)| Card::new(name, cost, attack, health))
    .collect()
}

/// The starter cards laid out as two rows of eight.
#[must_use]
pub fn standard_pool() -> CardPool {
    let cards = starter_cards();
    CardPool::from_cards(cards.chunks(8).map(<[Card]>::to_vec).collect())
}
