//! Game configuration.
//!
//! Hosts tune a session at startup through `GameConfig`. Everything that
//! varies between sessions lives here; the board shape does not.

use serde::{Deserialize, Serialize};

use crate::cards::OPPONENT_ROW;

/// Number of battle slots on each side.
pub const SLOT_COUNT: usize = 8;

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Display name of the human side.
    pub player_name: String,

    /// Display name of the scripted side.
    pub opponent_name: String,

    /// Health both combatants start (and cap) at.
    pub starting_health: u32,

    /// Upper bound of the per-turn mana refill.
    pub max_mana: u32,

    /// Pool row the opponent summons from.
    pub opponent_row: usize,

    /// Probability the opponent declines to open an undefended lane.
    pub skip_undefended_chance: f64,

    /// Seed for the opponent's random stream.
    /// Same seed produces the same opponent behavior.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: "Player".to_string(),
            opponent_name: "AI".to_string(),
            starting_health: 30,
            max_mana: 10,
            opponent_row: OPPONENT_ROW,
            skip_undefended_chance: 0.3,
            seed: 42,
        }
    }
}

impl GameConfig {
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    pub fn with_opponent_name(mut self, name: impl Into<String>) -> Self {
        self.opponent_name = name.into();
        self
    }

    pub fn with_starting_health(mut self, health: u32) -> Self {
        self.starting_health = health;
        self
    }

    pub fn with_max_mana(mut self, mana: u32) -> Self {
        self.max_mana = mana;
        self
    }

    pub fn with_opponent_row(mut self, row: usize) -> Self {
        self.opponent_row = row;
        self
    }

    /// Clamped into `[0, 1]`.
    pub fn with_skip_undefended_chance(mut self, chance: f64) -> Self {
        self.skip_undefended_chance = chance.clamp(0.0, 1.0);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Mana a side receives on its `turn`-th refill.
    #[must_use]
    pub fn mana_for_turn(&self, turn: u32) -> u32 {
        turn.min(self.max_mana)
    }
}
