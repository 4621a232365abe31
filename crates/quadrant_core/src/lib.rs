//! # Quadrant Core: Monte Carlo π Estimation Engine
//!
//! Quadrant estimates π by uniform sampling of the unit square: a point
//! `(x, y)` with `x, y ∈ [0, 1)` lands inside the unit quarter circle when
//! `x² + y² ≤ 1`, and the hit fraction converges to π/4. The engine offers a
//! single-threaded reference path and a data-parallel path in which every
//! worker thread owns an independent xoshiro256** stream.
//!
//! ## Determinism
//!
//! A run is fully determined by `(base_seed, total_iterations, num_workers)`.
//! Worker seeds are derived by adding multiples of the golden-ratio increment
//! to the base seed, which decorrelates neighbouring streams without any
//! coordination between workers. Worker 0 receives the base seed unchanged,
//! so a one-worker parallel run reproduces the sequential reference exactly.
//!
//! ## Module Structure
//!
//! - [`config`]: run configuration, builder, and validation limits
//! - [`error`]: structured error types
//! - [`rng`]: the xoshiro256** generator and per-worker seed derivation
//! - [`sample`]: the quarter-circle sampling kernel
//! - [`estimate`]: partitioning, worker orchestration, and reduction
//!
//! ## Usage Example
//!
//! ```rust
//! use quadrant_core::{EstimatorConfig, PiEstimator};
//!
//! let config = EstimatorConfig::builder()
//!     .total_iterations(1_000_000)
//!     .num_workers(4)
//!     .base_seed(12345)
//!     .build()
//!     .unwrap();
//!
//! let estimator = PiEstimator::new(config).unwrap();
//! let result = estimator.estimate().unwrap();
//!
//! assert!(result.error < 0.05);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod error;
pub mod estimate;
pub mod rng;
pub mod sample;

// Re-export commonly used items for convenience
pub use config::{
    EstimatorConfig, EstimatorConfigBuilder, RemainderPolicy, DEFAULT_BASE_SEED,
    DEFAULT_ITERATIONS, MAX_WORKERS,
};
pub use error::EstimatorError;
pub use estimate::{EstimationResult, PiEstimator, PI_REFERENCE};
pub use rng::{StreamSeeder, Xoshiro256StarStar, SEED_MULTIPLIER};
pub use sample::{count_hits, WorkerResult};
