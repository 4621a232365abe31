//! Monte Carlo π estimation engine.
//!
//! This module provides the orchestration layer for estimation runs.
//!
//! # Overview
//!
//! The [`PiEstimator`] coordinates:
//! 1. Work partitioning across the configured worker count
//! 2. Per-worker seed derivation (via [`StreamSeeder`](crate::rng::StreamSeeder))
//! 3. Parallel sampling (via [`count_hits`](crate::sample::count_hits)) on a
//!    dedicated thread pool sized to the worker count
//! 4. Reduction of per-worker hit counts into the final estimate
//!
//! # Structured Concurrency
//!
//! Each run builds its own rayon pool with exactly `num_workers` threads.
//! The pool joins every worker before `estimate` returns, so no sampling
//! outlives the call; a panicking worker aborts the whole run rather than
//! contributing a partial count.

use rayon::prelude::*;

use crate::config::{EstimatorConfig, RemainderPolicy};
use crate::error::EstimatorError;
use crate::rng::StreamSeeder;
use crate::sample::{count_hits, WorkerResult};

/// Reference value the estimate is scored against.
pub const PI_REFERENCE: f64 = std::f64::consts::PI;

/// Result of one estimation run.
///
/// Created once per run and immutable thereafter; this is the sole output
/// handed to reporting layers.
///
/// # Examples
///
/// ```rust
/// use quadrant_core::{EstimatorConfig, PiEstimator};
///
/// let config = EstimatorConfig::builder()
///     .total_iterations(100_000)
///     .num_workers(4)
///     .build()
///     .unwrap();
///
/// let result = PiEstimator::new(config).unwrap().estimate().unwrap();
///
/// println!("pi = {:.6} (error {:.6})", result.pi_estimate, result.error);
/// assert_eq!(result.worker_hits.len(), 4);
/// assert_eq!(result.total_hits(), result.worker_hits.iter().map(|w| w.hits).sum::<u64>());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EstimationResult {
    /// Estimate of π produced by the run.
    pub pi_estimate: f64,
    /// Absolute error of the estimate against [`PI_REFERENCE`].
    pub error: f64,
    /// Iteration count the run was asked for.
    pub total_iterations: u64,
    /// Iterations actually drawn after partitioning.
    ///
    /// Differs from `total_iterations` only under
    /// [`RemainderPolicy::Truncate`] with a non-zero remainder.
    pub sampled_iterations: u64,
    /// Number of workers that produced the estimate.
    pub worker_count: u32,
    /// Per-worker hit counts, ordered by worker index.
    pub worker_hits: Vec<WorkerResult>,
}

impl EstimationResult {
    /// Total hits across all workers.
    #[inline]
    pub fn total_hits(&self) -> u64 {
        self.worker_hits.iter().map(|w| w.hits).sum()
    }
}

/// Monte Carlo π estimation engine.
///
/// Orchestrates seed derivation, parallel sampling, and reduction for a
/// validated configuration. The estimator itself holds no generator state;
/// every run derives fresh streams, so repeated calls return identical
/// results.
///
/// # Examples
///
/// ```rust
/// use quadrant_core::{EstimatorConfig, PiEstimator};
///
/// let config = EstimatorConfig::builder()
///     .total_iterations(1_000_000)
///     .num_workers(4)
///     .base_seed(12345)
///     .build()
///     .unwrap();
///
/// let estimator = PiEstimator::new(config).unwrap();
/// let result = estimator.estimate().unwrap();
///
/// assert!(result.error < 0.01);
/// ```
pub struct PiEstimator {
    config: EstimatorConfig,
}

impl PiEstimator {
    /// Creates a new estimator with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Estimation run configuration
    ///
    /// # Errors
    ///
    /// Returns `EstimatorError` if the configuration is invalid.
    pub fn new(config: EstimatorConfig) -> Result<Self, EstimatorError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Runs the parallel estimate.
    ///
    /// Partitions the requested iterations across the configured workers,
    /// samples every partition on a dedicated thread pool, and reduces the
    /// per-worker hit counts after all workers have joined:
    ///
    /// ```text
    /// pi_estimate = 4 × total_hits / total_iterations
    /// error       = |pi_estimate − π|
    /// ```
    ///
    /// The division always uses the requested `total_iterations`, also
    /// under [`RemainderPolicy::Truncate`] when fewer iterations were
    /// actually drawn; `sampled_iterations` records the drawn count so the
    /// truncation is observable.
    ///
    /// # Errors
    ///
    /// Returns [`EstimatorError::WorkerPool`] if the thread pool cannot be
    /// constructed. A panicking worker propagates and fails the whole run;
    /// no partial result is returned.
    pub fn estimate(&self) -> Result<EstimationResult, EstimatorError> {
        let total_iterations = self.config.total_iterations();
        let num_workers = self.config.num_workers();
        let policy = self.config.remainder();
        let seeder = StreamSeeder::new(self.config.base_seed());

        let per_worker = total_iterations / u64::from(num_workers);
        let remainder = total_iterations % u64::from(num_workers);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_workers as usize)
            .build()
            .map_err(|e| EstimatorError::WorkerPool(e.to_string()))?;

        let worker_hits: Vec<WorkerResult> = pool.install(|| {
            (0..num_workers)
                .into_par_iter()
                .map(|worker| {
                    let iterations = match policy {
                        RemainderPolicy::Truncate => per_worker,
                        RemainderPolicy::Distribute if u64::from(worker) < remainder => {
                            per_worker + 1
                        }
                        RemainderPolicy::Distribute => per_worker,
                    };
                    let hits = count_hits(iterations, seeder.derive(worker));
                    WorkerResult { worker, hits }
                })
                .collect()
        });

        let sampled_iterations = match policy {
            RemainderPolicy::Truncate => total_iterations - remainder,
            RemainderPolicy::Distribute => total_iterations,
        };

        Ok(self.reduce(worker_hits, sampled_iterations))
    }

    /// Runs the single-threaded reference estimate.
    ///
    /// Seeds one stream with the base seed and draws every requested
    /// iteration on the calling thread. Produces a result identical to
    /// [`PiEstimator::estimate`] with one worker, since worker 0 receives
    /// the base seed unchanged.
    pub fn estimate_sequential(&self) -> EstimationResult {
        let total_iterations = self.config.total_iterations();
        let hits = count_hits(total_iterations, self.config.base_seed());

        let worker_hits = vec![WorkerResult { worker: 0, hits }];
        let pi_estimate = 4.0 * hits as f64 / total_iterations as f64;

        EstimationResult {
            pi_estimate,
            error: (pi_estimate - PI_REFERENCE).abs(),
            total_iterations,
            sampled_iterations: total_iterations,
            worker_count: 1,
            worker_hits,
        }
    }

    /// Reduces per-worker hit counts into the final result.
    fn reduce(&self, worker_hits: Vec<WorkerResult>, sampled_iterations: u64) -> EstimationResult {
        let total_iterations = self.config.total_iterations();
        let total_hits: u64 = worker_hits.iter().map(|w| w.hits).sum();

        let pi_estimate = 4.0 * total_hits as f64 / total_iterations as f64;

        EstimationResult {
            pi_estimate,
            error: (pi_estimate - PI_REFERENCE).abs(),
            total_iterations,
            sampled_iterations,
            worker_count: self.config.num_workers(),
            worker_hits,
        }
    }
}
