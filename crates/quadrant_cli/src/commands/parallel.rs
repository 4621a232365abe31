//! Parallel command implementation
//!
//! Estimates pi across parallel workers, each sampling an independent
//! seed-derived stream.

use std::time::Instant;

use tracing::{debug, info};

use quadrant_core::{EstimatorConfig, PiEstimator, RemainderPolicy};

use crate::report::{write_report, RunReport};
use crate::Result;

/// Run the parallel command
pub fn run(
    iterations: u64,
    workers: Option<u32>,
    seed: u64,
    distribute_remainder: bool,
    format: &str,
) -> Result<()> {
    let num_workers = workers.unwrap_or_else(|| num_cpus::get().max(1) as u32);
    let remainder = if distribute_remainder {
        RemainderPolicy::Distribute
    } else {
        RemainderPolicy::Truncate
    };

    info!("Starting parallel estimation...");
    info!("  Iterations: {}", iterations);
    info!("  Workers: {}", num_workers);
    info!("  Seed: {}", seed);
    debug!("  Remainder policy: {:?}", remainder);

    let config = EstimatorConfig::builder()
        .total_iterations(iterations)
        .num_workers(num_workers)
        .base_seed(seed)
        .remainder(remainder)
        .build()?;
    let estimator = PiEstimator::new(config)?;

    let start = Instant::now();
    let result = estimator.estimate()?;
    let elapsed = start.elapsed();

    info!(
        "Estimation complete: pi = {:.6}, error = {:.6}, {:.2} ms on {} workers",
        result.pi_estimate,
        result.error,
        elapsed.as_secs_f64() * 1_000.0,
        result.worker_count
    );

    let report = RunReport::parallel(&result, elapsed);
    write_report(&report, format)
}
