//! Per-worker seed derivation.
//!
//! Worker streams must be decorrelated even though their indices are
//! consecutive small integers. Deriving each seed as `base + index × γ`,
//! where γ is the 64-bit golden-ratio increment, spreads neighbouring
//! indices across the whole seed space before the generator's own
//! avalanche expands them into state.

/// Additive increment between the seeds of adjacent worker streams.
///
/// This is the 64-bit golden-ratio reciprocal (⌊2⁶⁴/φ⌋, forced odd), the
/// Weyl increment used by SplitMix64. Because it is odd, multiples modulo
/// 2⁶⁴ are pairwise distinct, so derived seeds never collide for distinct
/// worker indices.
pub const SEED_MULTIPLIER: u64 = 0x9E37_79B9_7F4A_7C15;

/// Derives per-worker seeds from a single base seed.
///
/// Worker 0 always receives the base seed itself, which makes a one-worker
/// run reproduce the sequential reference stream exactly.
///
/// # Examples
///
/// ```rust
/// use quadrant_core::rng::{StreamSeeder, SEED_MULTIPLIER};
///
/// let seeder = StreamSeeder::new(12345);
///
/// assert_eq!(seeder.derive(0), 12345);
/// assert_eq!(seeder.derive(1), 12345u64.wrapping_add(SEED_MULTIPLIER));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreamSeeder {
    base_seed: u64,
}

impl StreamSeeder {
    /// Creates a seeder for the given base seed.
    #[inline]
    pub fn new(base_seed: u64) -> Self {
        Self { base_seed }
    }

    /// Returns the base seed.
    #[inline]
    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    /// Derives the seed for one worker index.
    ///
    /// Computes `base_seed + worker_index × SEED_MULTIPLIER` with wrapping
    /// arithmetic; overflow is part of the derivation, not an error.
    #[inline]
    pub fn derive(&self, worker_index: u32) -> u64 {
        self.base_seed
            .wrapping_add(u64::from(worker_index).wrapping_mul(SEED_MULTIPLIER))
    }
}
