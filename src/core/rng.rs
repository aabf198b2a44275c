//! Injectable randomness for tile spawns.
//!
//! The engine never reaches for a global generator. It draws from a
//! `TileRng`, which is either:
//!
//! - **`GameRng`**: seeded ChaCha8, deterministic, forkable and serializable
//! - **`ScriptedRng`**: a queue of predetermined outcomes for exact replays
//!
//! ```
//! use rust_2048::core::{GameRng, TileRng};
//!
//! let mut rng = GameRng::new(42);
//!
//! // Fork for an independent session
//! let mut session_rng = rng.fork();
//!
//! // Forks are deterministic: same parent seed and fork counter, same stream
//! let mut rng2 = GameRng::new(42);
//! let mut session_rng2 = rng2.fork();
//! assert_eq!(session_rng.pick_index(1000), session_rng2.pick_index(1000));
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of the two random decisions a spawn needs.
pub trait TileRng {
    /// Pick an index in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Return `true` with the given probability.
    fn chance(&mut self, probability: f64) -> bool;
}

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
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
            fork_counter: state.fork_counter,
        }
    }
}

impl TileRng for GameRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

/// Replays a fixed list of decisions.
///
/// Picks larger than the available range are clamped to the last index.
/// Once a queue runs dry it answers `0` for picks and `false` for chances.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    picks: VecDeque<usize>,
    chances: VecDeque<bool>,
}

impl ScriptedRng {
    /// Create a script from pick indices and chance results.
    pub fn new(
        picks: impl IntoIterator<Item = usize>,
        chances: impl IntoIterator<Item = bool>,
    ) -> Self {
        Self {
            picks: picks.into_iter().collect(),
            chances: chances.into_iter().collect(),
        }
    }

    /// Queue another pick.
    pub fn push_pick(&mut self, index: usize) {
        self.picks.push_back(index);
    }

    /// Queue another chance result.
    pub fn push_chance(&mut self, result: bool) {
        self.chances.push_back(result);
    }

    /// Decisions not yet consumed, as `(picks, chances)`.
    #[must_use]
    pub fn remaining(&self) -> (usize, usize) {
        (self.picks.len(), self.chances.len())
    }
}

impl TileRng for ScriptedRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.picks
            .pop_front()
            .unwrap_or(0)
            .min(len.saturating_sub(1))
    }

    fn chance(&mut self, _probability: f64) -> bool {
        self.chances.pop_front().unwrap_or(false)
    }
}
