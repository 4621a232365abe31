//! Run report construction and output
//!
//! Mirrors the stable report keys emitted by the estimator across output
//! formats: `json` for machine consumption, `text` for terminals. Fields
//! that only an external harness can measure (memory, cache misses) are
//! deliberately absent rather than reported as placeholders.

use std::time::Duration;

use serde::Serialize;

use quadrant_core::EstimationResult;

use crate::{CliError, Result};

/// Serialisable summary of a completed estimation run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Implementation language identifier
    pub language: &'static str,
    /// Execution mode (`single` or `parallel`)
    pub mode: &'static str,
    /// Iterations requested on the command line
    pub iterations: u64,
    /// Iterations actually sampled after remainder handling
    pub sampled_iterations: u64,
    /// The Monte Carlo estimate of pi
    pub pi_estimate: f64,
    /// Absolute error against the reference value of pi
    pub error: f64,
    /// Wall-clock duration of the estimation call in milliseconds
    pub time_ms: f64,
    /// Number of worker threads used
    pub thread_count: u32,
    /// Logical CPU cores available on this machine
    pub cpu_cores: usize,
    /// Operating system identifier
    pub os: &'static str,
    /// Per-worker hit counts, ordered by worker index
    pub worker_hits: Vec<u64>,
}

impl RunReport {
    /// Builds a report for a single-threaded run.
    pub fn single(result: &EstimationResult, elapsed: Duration) -> Self {
        Self::new("single", result, elapsed)
    }

    /// Builds a report for a parallel run.
    pub fn parallel(result: &EstimationResult, elapsed: Duration) -> Self {
        Self::new("parallel", result, elapsed)
    }

    fn new(mode: &'static str, result: &EstimationResult, elapsed: Duration) -> Self {
        Self {
            language: "Rust",
            mode,
            iterations: result.total_iterations,
            sampled_iterations: result.sampled_iterations,
            pi_estimate: result.pi_estimate,
            error: result.error,
            time_ms: elapsed.as_secs_f64() * 1_000.0,
            thread_count: result.worker_count,
            cpu_cores: num_cpus::get(),
            os: std::env::consts::OS,
            worker_hits: result.worker_hits.iter().map(|w| w.hits).collect(),
        }
    }

    /// Total hits across all workers.
    pub fn total_hits(&self) -> u64 {
        self.worker_hits.iter().sum()
    }
}

/// Writes the report to stdout in the requested format.
pub fn write_report(report: &RunReport, format: &str) -> Result<()> {
    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        "text" => {
            println!("Monte Carlo pi estimation ({})", report.mode);
            println!("  {:<20} {}", "iterations", report.iterations);
            println!("  {:<20} {}", "sampled iterations", report.sampled_iterations);
            println!("  {:<20} {}", "hits", report.total_hits());
            println!("  {:<20} {:.15}", "pi estimate", report.pi_estimate);
            println!("  {:<20} {:.15}", "error", report.error);
            println!("  {:<20} {:.2} ms", "time", report.time_ms);
            println!("  {:<20} {}", "threads", report.thread_count);
            println!("  {:<20} {}", "cpu cores", report.cpu_cores);
            println!("  {:<20} {}", "os", report.os);
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: text, json",
                other
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadrant_core::WorkerResult;

    fn sample_result() -> EstimationResult {
        EstimationResult {
            pi_estimate: 3.152,
            error: 3.152 - std::f64::consts::PI,
            total_iterations: 1_000,
            sampled_iterations: 1_000,
            worker_count: 4,
            worker_hits: [188, 193, 202, 205]
                .iter()
                .enumerate()
                .map(|(worker, &hits)| WorkerResult {
                    worker: worker as u32,
                    hits,
                })
                .collect(),
        }
    }

    /// Verifies that report fields mirror the estimation result.
    #[test]
    fn test_report_mirrors_result() {
        let report = RunReport::parallel(&sample_result(), Duration::from_millis(12));

        assert_eq!(report.language, "Rust");
        assert_eq!(report.mode, "parallel");
        assert_eq!(report.iterations, 1_000);
        assert_eq!(report.sampled_iterations, 1_000);
        assert_eq!(report.pi_estimate, 3.152);
        assert_eq!(report.thread_count, 4);
        assert_eq!(report.worker_hits, vec![188, 193, 202, 205]);
        assert_eq!(report.total_hits(), 788);
        assert_eq!(report.time_ms, 12.0);
    }

    /// Verifies the JSON serialisation carries the stable keys.
    #[test]
    fn test_json_report_keys() {
        let report = RunReport::single(&sample_result(), Duration::from_millis(5));
        let value: serde_json::Value =
            serde_json::to_value(&report).expect("report must serialise");

        assert_eq!(value["language"], "Rust");
        assert_eq!(value["mode"], "single");
        assert_eq!(value["iterations"], 1_000);
        assert_eq!(value["pi_estimate"], 3.152);
        assert_eq!(value["thread_count"], 4);
        assert_eq!(value["worker_hits"][3], 205);
        assert!(value["time_ms"].is_f64());
        assert!(value["cpu_cores"].as_u64().is_some());
        assert!(value["os"].is_string());
    }

    /// Verifies that unknown formats are rejected with a helpful message.
    #[test]
    fn test_unknown_format_rejected() {
        let report = RunReport::single(&sample_result(), Duration::from_millis(1));
        let err = write_report(&report, "yaml").unwrap_err();

        assert!(matches!(err, CliError::InvalidArgument(_)));
        assert!(err.to_string().contains("yaml"));
    }
}
