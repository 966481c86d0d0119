//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! The two seats at the table: the human `Player` and the scripted
//! `Opponent`. Every creature belongs to exactly one side for its lifetime.
//!
//! ## SideMap
//!
//! Fixed two-entry storage indexed by `Side`, used for slot arrays and
//! anything else that exists once per side.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of a duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human-controlled side.
    Player,
    /// The scripted side.
    Opponent,
}

impl Side {
    /// Both sides, player first.
    pub const ALL: [Side; 2] = [Side::Player, Side::Opponent];

    /// The side across the table.
    ///
    /// ```
    /// use slot_duel::core::Side;
    ///
    /// assert_eq!(Side::Player.opposite(), Side::Opponent);
    /// assert_eq!(Side::Opponent.opposite(), Side::Player);
    /// ```
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    /// Storage index (player = 0, opponent = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Opponent => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Opponent => write!(f, "opponent"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use slot_duel::core::{Side, SideMap};
///
/// let mut kills: SideMap<u32> = SideMap::with_value(0);
/// kills[Side::Opponent] += 2;
///
/// assert_eq!(kills[Side::Player], 0);
/// assert_eq!(kills[Side::Opponent], 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Player), factory(Side::Opponent)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Borrow both entries mutably at once, `side` first.
    ///
    /// Combat needs the attacking and defending slot arrays simultaneously.
    pub fn split_mut(&mut self, side: Side) -> (&mut T, &mut T) {
        let [player, opponent] = &mut self.data;
        match side {
            Side::Player => (player, opponent),
            Side::Opponent => (opponent, player),
        }
    }

    /// Iterate over (Side, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
