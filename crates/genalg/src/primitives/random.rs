//! Deterministic pseudo-random source for member generation.
//!
//! ## Purpose
//!
//! This module provides the random source threaded through
//! [`RandomSource`](crate::algebra::traits::RandomSource) implementations and
//! the randomized algorithms (generation, k-means seeding).
//!
//! ## Design notes
//!
//! * **No-std**: Pure integer arithmetic, no OS entropy.
//! * **Reproducible**: The same seed always yields the same sequence.
//!
//! ## Non-goals
//!
//! * This generator is not cryptographically secure.

// ============================================================================
// SimpleRng
// ============================================================================

/// Minimal PRNG usable in `no_std` builds.
///
/// Uses an LCG (Linear Congruential Generator) with constants from PCG/MQL.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    /// Create a generator from a seed.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next 32 random bits (the high half of the LCG state).
    pub fn next_u32(&mut self) -> u32 {
        // LCG constants for 64-bit state
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }

    /// Next 64 random bits, assembled from two 32-bit draws.
    pub fn next_u64(&mut self) -> u64 {
        let hi = self.next_u32() as u64;
        let lo = self.next_u32() as u64;
        (hi << 32) | lo
    }

    /// Uniform value in `[0, 1)` with 53 bits of precision.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Uniform index in `0..bound`. Returns 0 when `bound` is 0.
    pub fn gen_range(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        (self.next_u64() % bound as u64) as usize
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(0x853c_49e6_748f_ea9b)
    }
}
