//! Card pool: the read-only grid of templates offered for summoning.
//!
//! The pool is addressed by `(row, column)`. The engine only relies on
//! that lookup; row meaning (which side draws from which row) is a layout
//! convention of the catalog that built the pool.

use serde::{Deserialize, Serialize};

use super::definition::Card;

/// Immutable grid of card templates.
///
/// Rows may be ragged and cells may be empty. Out-of-range coordinates and
/// empty cells both look up as `None`.
///
/// ## Example
///
/// ```
/// use slot_duel::cards::{Card, CardPool};
///
/// let pool = CardPool::from_rows(vec![
///     vec![Some(Card::new("Rat", 1, 1, 1)), None],
/// ]);
///
/// assert_eq!(pool.get(0, 0).unwrap().name, "Rat");
/// assert!(pool.get(0, 1).is_none());
/// assert!(pool.get(3, 0).is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPool {
    rows: Vec<Vec<Option<Card>>>,
}

impl CardPool {
    /// An empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_rows(rows: Vec<Vec<Option<Card>>>) -> Self {
        Self { rows }
    }

    /// Build a pool from fully populated rows.
    #[must_use]
    pub fn from_cards(rows: Vec<Vec<Card>>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Some).collect())
                .collect(),
        }
    }

    /// Look up a template.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Card> {
        self.rows.get(row)?.get(col)?.as_ref()
    }

    /// Iterate over `(column, card)` for the populated cells of a row.
    ///
    /// A missing row yields nothing.
    pub fn row(&self, row: usize) -> impl Iterator<Item = (usize, &Card)> {
        self.rows
            .get(row)
            .into_iter()
            .flatten()
            .enumerate()
            .filter_map(|(col, cell)| cell.as_ref().map(|card| (col, card)))
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of a row, `0` if the row does not exist.
    #[must_use]
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    /// Number of populated cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
