//! Deterministic random number generation for the scripted opponent.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Injectable**: Strategies consume the narrow `RandomSource` trait, so
//!   tests can substitute `ScriptedRolls`
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use slot_duel::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.roll(), b.roll());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Source of uniform rolls in `[0, 1)`.
///
/// The only randomness the engine needs is "does this coin come up", so the
/// seam is kept to a single method.
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`.
    fn roll(&mut self) -> f64;

    /// `true` with the given probability.
    fn chance(&mut self, probability: f64) -> bool {
        self.roll() < probability
    }
}

/// Seeded ChaCha8 generator.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for GameRng {
    fn roll(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position, so capture is O(1) regardless of how
/// many rolls were taken.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Seed the stream was created from
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed list of rolls, cycling when exhausted.
///
/// An empty script always rolls `0.0`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScriptedRolls {
    rolls: Vec<f64>,
    cursor: usize,
}

impl ScriptedRolls {
    #[must_use]
    pub fn new(rolls: impl Into<Vec<f64>>) -> Self {
        Self {
            rolls: rolls.into(),
            cursor: 0,
        }
    }

    /// A source whose every roll is `value`.
    #[must_use]
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of rolls taken so far.
    #[must_use]
    pub fn taken(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRolls {
    fn roll(&mut self) -> f64 {
        let value = if self.rolls.is_empty() {
            0.0
        } else {
            self.rolls[self.cursor % self.rolls.len()]
        };
        self.cursor += 1;
        value
    }
}
