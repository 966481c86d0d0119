//! Recoverable action failures.
//!
//! Nothing in the engine is fatal. Every failure below leaves the session
//! exactly as it was.

use serde::{Deserialize, Serialize};

use crate::core::Side;

/// Why a summon or turn advance was refused.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameError {
    /// Slot out of range, or no card at the requested pool cell.
    InvalidCoordinates { row: usize, col: usize, slot: usize },
    /// The wallet does not cover the card.
    InsufficientMana { required: u32, available: u32 },
    /// The target slot already holds a creature (possibly one awaiting removal).
    SlotOccupied { side: Side, slot: usize },
    /// The game has ended.
    GameOver,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidCoordinates { row, col, slot } => {
                write!(f, "no card can be summoned from ({}, {}) into slot {}", row, col, slot)
            }
            GameError::InsufficientMana { required, available } => {
                write!(f, "card costs {} mana but only {} available", required, available)
            }
            GameError::SlotOccupied { side, slot } => {
                write!(f, "{} slot {} is occupied", side, slot)
            }
            GameError::GameOver => write!(f, "the game is over"),
        }
    }
}

impl std::error::Error for GameError {}
