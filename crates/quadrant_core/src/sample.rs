//! Quarter-circle sampling kernel.
//!
//! The kernel is the entirety of a worker's job: seed one generator, draw
//! point coordinates, count hits. It touches nothing but its own generator
//! and counter, so workers never contend for shared state.

use rand::SeedableRng;

use crate::rng::Xoshiro256StarStar;

/// Counts how many of `iterations` uniform draws from the unit square fall
/// inside the unit quarter circle.
///
/// Each iteration draws `x` and `y` in [0, 1) and scores a hit when
/// `x² + y² ≤ 1`. The expected hit fraction is π/4. Runs to completion;
/// there is no early termination, and a panic mid-run yields no partial
/// count.
///
/// # Arguments
///
/// * `iterations` - Number of points to draw
/// * `seed` - Seed for this worker's stream
///
/// # Examples
///
/// ```rust
/// use quadrant_core::count_hits;
///
/// let hits = count_hits(1000, 12345);
/// assert!(hits <= 1000);
///
/// // The same seed always reproduces the same count.
/// assert_eq!(hits, count_hits(1000, 12345));
/// ```
pub fn count_hits(iterations: u64, seed: u64) -> u64 {
    let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
    let mut hits = 0u64;

    for _ in 0..iterations {
        let x = rng.next_double();
        let y = rng.next_double();
        if x * x + y * y <= 1.0 {
            hits += 1;
        }
    }

    hits
}

/// Hit count reported by a single worker.
///
/// Produced exactly once per worker and consumed by the reduction; results
/// are ordered by worker index in
/// [`EstimationResult::worker_hits`](crate::estimate::EstimationResult).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkerResult {
    /// Worker index within the run.
    pub worker: u32,
    /// Samples that landed inside the quarter circle.
    pub hits: u64,
}
