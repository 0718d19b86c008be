//! Xoshiro256++ - Deterministic PRNG Core
//!
//! Seedable, reproducible random number generation for simulation use.
//!
//! # Architecture
//!
//! - **splitmix**: Seed expansion (one scalar seed → four state words)
//! - **xoshiro**: The xoshiro256++ generator with jump support
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic (same seed → same sequence)
//! 2. The all-zero state is unreachable through seeded construction
//!    and rejected at explicit-state construction
//! 3. `jump()`/`long_jump()` derive non-overlapping streams for
//!    parallel consumers without sharing a generator

// Module declarations
pub mod splitmix;
pub mod xoshiro;

// Re-exports for convenience
pub use splitmix::SplitMix64;
pub use xoshiro::{RngError, Xoshiro256PlusPlus};
