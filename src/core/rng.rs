//! Random number sources for shuffles and proc rolls.
//!
//! ## Key Features
//!
//! - **One capability**: every source yields floats in `[0, 1)`; shuffles,
//!   index picks and chance rolls are derived from that single stream.
//! - **Deterministic**: `LcgRng` replays the same sequence for the same seed.
//! - **Serializable**: `GameRng` captures its position in O(1) so a saved
//!   `GameState` resumes the exact sequence.
//!
//! ## Replays
//!
//! Every draw, shuffle and proc consumes from the same stream, so a replay must
//! issue calls in the original order.
//!
//! ```
//! use card_clash::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::seeded(42);
//! let mut b = GameRng::seeded(42);
//!
//! for _ in 0..10 {
//!     assert_eq!(a.next_f64(), b.next_f64());
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// A source of uniformly distributed floats in `[0, 1)`.
///
/// All helpers are derived from `next_f64`, so two sources that agree on the
/// float stream agree on every shuffle and roll.
pub trait RandomSource {
    /// Next float in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn gen_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "gen_index on an empty range");
        let idx = (self.next_f64() * len as f64).floor() as usize;
        idx.min(len.saturating_sub(1))
    }

    /// `true` with the given probability.
    fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }

    /// Fisher–Yates shuffle in place, walking from the last slot down.
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.gen_index(i + 1);
            slice.swap(i, j);
        }
    }

    /// Sample `count` elements without replacement.
    ///
    /// When the pool is no larger than `count` the whole pool is returned in
    /// order and no randomness is consumed.
    fn sample<T: Clone>(&mut self, pool: &[T], count: usize) -> Vec<T> {
        if pool.len() <= count {
            return pool.to_vec();
        }
        let mut shuffled = pool.to_vec();
        self.shuffle(&mut shuffled);
        shuffled.truncate(count);
        shuffled
    }
}

/// Seeded linear congruential generator.
///
/// 32-bit state, `state = state * 1664525 + 1013904223 (mod 2^32)`.
/// Cheap and fully reproducible, which is all the battle core needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LcgRng {
    seed: u64,
    state: u32,
}

impl LcgRng {
    const MULTIPLIER: u32 = 1_664_525;
    const INCREMENT: u32 = 1_013_904_223;
    const MODULUS: f64 = 4_294_967_296.0;

    /// Create a generator for the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            state: (seed ^ (seed >> 32)) as u32,
        }
    }

    /// The seed this generator started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for LcgRng {
    fn next_f64(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        f64::from(self.state) / Self::MODULUS
    }
}

/// Non-deterministic source backed by ChaCha8 seeded from system entropy.
///
/// The entropy seed is retained so the stream can still be checkpointed.
#[derive(Clone, Debug)]
pub struct EntropyRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl EntropyRng {
    /// Seed from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::thread_rng().gen())
    }

    fn with_seed(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

impl Default for EntropyRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropyRng {
    fn next_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}

/// The generator carried by a `GameState`.
#[derive(Clone, Debug)]
pub enum GameRng {
    /// Reproducible LCG stream.
    Seeded(LcgRng),
    /// System randomness.
    Entropy(EntropyRng),
}

impl GameRng {
    /// Deterministic generator for replays and tests.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::Seeded(LcgRng::new(seed))
    }

    /// Non-deterministic generator for live play.
    #[must_use]
    pub fn entropy() -> Self {
        Self::Entropy(EntropyRng::new())
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        match self {
            GameRng::Seeded(lcg) => GameRngState::Seeded {
                seed: lcg.seed,
                state: lcg.state,
            },
            GameRng::Entropy(chacha) => GameRngState::Entropy {
                seed: chacha.seed,
                word_pos: chacha.inner.get_word_pos(),
            },
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        match *state {
            GameRngState::Seeded { seed, state } => Self::Seeded(LcgRng { seed, state }),
            GameRngState::Entropy { seed, word_pos } => {
                let mut restored = EntropyRng::with_seed(seed);
                restored.inner.set_word_pos(word_pos);
                Self::Entropy(restored)
            }
        }
    }
}

impl RandomSource for GameRng {
    fn next_f64(&mut self) -> f64 {
        match self {
            GameRng::Seeded(lcg) => lcg.next_f64(),
            GameRng::Entropy(chacha) => chacha.next_f64(),
        }
    }
}

impl PartialEq for GameRng {
    fn eq(&self, other: &Self) -> bool {
        self.state() == other.state()
    }
}

impl Serialize for GameRng {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.state().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GameRng {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        GameRngState::deserialize(deserializer).map(|state| Self::from_state(&state))
    }
}

/// Serializable RNG position for checkpointing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameRngState {
    /// LCG seed and current 32-bit state.
    Seeded { seed: u64, state: u32 },
    /// ChaCha8 seed and word position (128-bit counter).
    Entropy { seed: u64, word_pos: u128 },
}
