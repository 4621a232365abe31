//! Single command implementation
//!
//! Estimates pi on a single thread with one unpartitioned sample stream.

use std::time::Instant;

use tracing::info;

use quadrant_core::{EstimatorConfig, PiEstimator};

use crate::report::{write_report, RunReport};
use crate::Result;

/// Run the single command
pub fn run(iterations: u64, seed: u64, format: &str) -> Result<()> {
    info!("Starting single-threaded estimation...");
    info!("  Iterations: {}", iterations);
    info!("  Seed: {}", seed);

    let config = EstimatorConfig::builder()
        .total_iterations(iterations)
        .num_workers(1)
        .base_seed(seed)
        .build()?;
    let estimator = PiEstimator::new(config)?;

    let start = Instant::now();
    let result = estimator.estimate_sequential();
    let elapsed = start.elapsed();

    info!(
        "Estimation complete: pi = {:.6}, error = {:.6}, {:.2} ms",
        result.pi_estimate,
        result.error,
        elapsed.as_secs_f64() * 1_000.0
    );

    let report = RunReport::single(&result, elapsed);
    write_report(&report, format)
}
