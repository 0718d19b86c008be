//! splitmix64 seed expander
//!
//! A fast avalanche mixer used to turn a single scalar seed into
//! well-distributed 64-bit words. Any seed is acceptable, including 0:
//! the additive constant guarantees the accumulator leaves zero on the
//! first step, so low-entropy seeds still produce well-mixed output.
//!
//! # Determinism
//!
//! Same seed → same sequence of words. This is CRITICAL for
//! reproducible simulation runs.

use serde::{Deserialize, Serialize};

/// splitmix64 stepper
///
/// # Example
/// ```
/// use xoshiro_rs::SplitMix64;
///
/// let mut mixer = SplitMix64::new(12345);
/// let word = mixer.next();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitMix64 {
    /// Running accumulator (64-bit)
    state: u64,
}

impl SplitMix64 {
    /// Create a new mixer from a seed
    ///
    /// # Example
    /// ```
    /// use xoshiro_rs::SplitMix64;
    ///
    /// let mixer = SplitMix64::new(0); // zero is fine
    /// ```
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Produce the next mixed 64-bit word, advancing the accumulator
    ///
    /// Two multiply/xor-shift avalanche rounds after the Weyl-sequence
    /// increment, then a final xor-shift.
    ///
    /// # Example
    /// ```
    /// use xoshiro_rs::SplitMix64;
    ///
    /// let mut mixer = SplitMix64::new(42);
    /// let a = mixer.next();
    /// let b = mixer.next();
    /// assert_ne!(a, b);
    /// ```
    pub fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }
}
