//! xoshiro256++ random number generator
//!
//! This is a fast, high-quality PRNG that is deterministic and suitable
//! for simulation purposes. It is explicitly NOT cryptographically
//! secure.
//!
//! # Algorithm
//!
//! xoshiro256++ keeps 256 bits of state as four 64-bit words and passes
//! TestU01's BigCrush statistical tests. Each call emits
//! `rotl(s0 + s3, 23) + s0` computed from the pre-transition state,
//! then advances the state with the xoshiro256 xor/shift/rotate
//! permutation. The state transition is linear over GF(2), which is
//! what makes `jump()` possible: evaluating the transition's
//! characteristic polynomial at a precomputed constant advances the
//! stream by 2^128 steps in 256 ordinary steps.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. This is CRITICAL for:
//! - Debugging (reproduce exact simulation)
//! - Testing (verify behavior)
//! - Research (validate results)
//!
//! # Parallel streams
//!
//! A generator instance is not safe for concurrent mutation. The
//! intended pattern is one generator per worker: seed one generator,
//! then hand each worker a clone advanced by a distinct number of
//! `jump()` calls. The resulting streams never overlap within 2^128
//! draws.

use crate::splitmix::SplitMix64;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Polynomial for a 2^128-step jump, from the published
/// xoshiro256plusplus.c reference. Valid only for this exact state
/// transition.
const JUMP: [u64; 4] = [
    0x180EC6D33CFD0ABA,
    0xD5A61266F0C9392C,
    0xA9582618E03FC9AA,
    0x39ABDC4529B1661C,
];

/// Polynomial for a 2^192-step jump.
const LONG_JUMP: [u64; 4] = [
    0x76E15D3EFEFDCBBF,
    0xC5004E441C522FB3,
    0x77710069854EE241,
    0x39109BB02ACBE635,
];

/// Errors from explicit-state construction
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RngError {
    /// The all-zero state is a fixed point of the transition and would
    /// emit zeros forever. It is rejected rather than silently patched,
    /// since patching would define a different generator.
    #[error("all-zero state is degenerate: the generator would only ever return 0")]
    ZeroState,
}

/// Deterministic random number generator using xoshiro256++
///
/// # Example
/// ```
/// use xoshiro_rs::Xoshiro256PlusPlus;
///
/// let mut rng = Xoshiro256PlusPlus::new(12345);
/// let value = rng.next();
/// let probability = rng.next_f64(); // [0.0, 1.0)
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xoshiro256PlusPlus {
    /// Internal state (four 64-bit words)
    s: [u64; 4],
}

impl Xoshiro256PlusPlus {
    /// Create a new RNG with given seed
    ///
    /// The seed is expanded through splitmix64 into four well-mixed
    /// state words, so low-entropy seeds (0, 1, small integers) still
    /// start from a well-distributed state.
    ///
    /// # Arguments
    /// * `seed` - Initial seed value (u64, any value including 0)
    ///
    /// # Example
    /// ```
    /// use xoshiro_rs::Xoshiro256PlusPlus;
    ///
    /// let rng = Xoshiro256PlusPlus::new(12345);
    /// ```
    pub fn new(seed: u64) -> Self {
        let mut mixer = SplitMix64::new(seed);
        let s = [mixer.next(), mixer.next(), mixer.next(), mixer.next()];
        Self { s }
    }

    /// Create an RNG directly from four explicit state words
    ///
    /// Used to reproduce a known sequence or restore a snapshot taken
    /// with [`state()`](Self::state). The all-zero state is rejected.
    ///
    /// # Errors
    /// Returns [`RngError::ZeroState`] if all four words are zero.
    ///
    /// # Example
    /// ```
    /// use xoshiro_rs::Xoshiro256PlusPlus;
    ///
    /// let mut original = Xoshiro256PlusPlus::new(12345);
    /// original.next();
    ///
    /// let mut restored = Xoshiro256PlusPlus::from_state(original.state()).unwrap();
    /// assert_eq!(original.next(), restored.next());
    /// ```
    pub fn from_state(state: [u64; 4]) -> Result<Self, RngError> {
        if state == [0; 4] {
            return Err(RngError::ZeroState);
        }
        Ok(Self { s: state })
    }

    /// Generate next random u64 value
    ///
    /// This advances the internal state by one step and returns a
    /// random value. The output is computed from the state *before*
    /// the transition.
    ///
    /// # Example
    /// ```
    /// use xoshiro_rs::Xoshiro256PlusPlus;
    ///
    /// let mut rng = Xoshiro256PlusPlus::new(12345);
    /// assert_eq!(rng.next(), 0x8D948A82DEF8A568);
    /// ```
    pub fn next(&mut self) -> u64 {
        let result = self.s[0]
            .wrapping_add(self.s[3])
            .rotate_left(23)
            .wrapping_add(self.s[0]);

        let t = self.s[1] << 17;

        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];

        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);

        result
    }

    /// Advance the state by 2^128 steps
    ///
    /// After the call, the generator produces the same sequence that
    /// 2^128 calls to [`next()`](Self::next) would have reached, in
    /// time proportional to 256 calls. Calling it repeatedly on clones
    /// of one seeded generator yields up to 2^128 non-overlapping
    /// streams for parallel workers.
    ///
    /// # Example
    /// ```
    /// use xoshiro_rs::Xoshiro256PlusPlus;
    ///
    /// let seeded = Xoshiro256PlusPlus::new(42);
    /// let mut worker_a = seeded.clone();
    /// let mut worker_b = seeded.clone();
    /// worker_b.jump();
    /// assert_ne!(worker_a.next(), worker_b.next());
    /// ```
    pub fn jump(&mut self) {
        self.jump_with(&JUMP);
    }

    /// Advance the state by 2^192 steps
    ///
    /// Same mechanism as [`jump()`](Self::jump) with a larger stride;
    /// useful as an outer stride when each of up to 2^64 workers takes
    /// one `long_jump` and then derives 2^64 inner streams via
    /// `jump()`.
    pub fn long_jump(&mut self) {
        self.jump_with(&LONG_JUMP);
    }

    /// Shared GF(2) polynomial-evaluation loop for both strides
    ///
    /// Walks the 256 bits of the jump polynomial (table words in order,
    /// bits low-to-high within each word), XOR-folding the current
    /// state into an accumulator for each set bit and stepping the
    /// state once per bit. The accumulator then replaces the state.
    fn jump_with(&mut self, table: &[u64; 4]) {
        let mut acc = [0u64; 4];
        for &word in table {
            for bit in 0..64 {
                if word & (1u64 << bit) != 0 {
                    acc[0] ^= self.s[0];
                    acc[1] ^= self.s[1];
                    acc[2] ^= self.s[2];
                    acc[3] ^= self.s[3];
                }
                self.next();
            }
        }
        self.s = acc;
    }

    /// Generate random f64 in range [0.0, 1.0)
    ///
    /// Uses the top 53 bits of one raw draw, matching double-precision
    /// mantissa width. Useful for sampling from probability
    /// distributions.
    ///
    /// # Example
    /// ```
    /// use xoshiro_rs::Xoshiro256PlusPlus;
    ///
    /// let mut rng = Xoshiro256PlusPlus::new(12345);
    /// let probability = rng.next_f64();
    /// assert!(probability >= 0.0 && probability < 1.0);
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next();
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Generate random value in range [min, max)
    ///
    /// # Arguments
    /// * `min` - Minimum value (inclusive)
    /// * `max` - Maximum value (exclusive)
    ///
    /// # Panics
    /// Panics if min >= max
    ///
    /// # Example
    /// ```
    /// use xoshiro_rs::Xoshiro256PlusPlus;
    ///
    /// let mut rng = Xoshiro256PlusPlus::new(12345);
    /// let amount = rng.range(10_000, 100_000);
    /// assert!(amount >= 10_000 && amount < 100_000);
    /// ```
    pub fn range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min < max, "min must be less than max");

        let value = self.next();
        let range_size = (max - min) as u64;
        min + (value % range_size) as i64
    }

    /// Get a snapshot of the current state words (for checkpointing/replay)
    ///
    /// Never mutates the generator.
    ///
    /// # Example
    /// ```
    /// use xoshiro_rs::Xoshiro256PlusPlus;
    ///
    /// let rng = Xoshiro256PlusPlus::new(12345);
    /// let words = rng.state();
    ///
    /// // Later, can recreate the RNG from this snapshot
    /// let rng2 = Xoshiro256PlusPlus::from_state(words).unwrap();
    /// ```
    pub fn state(&self) -> [u64; 4] {
        self.s
    }
}
