//! Error types for the estimation engine.
//!
//! All preconditions are checked before any worker is dispatched, so a run
//! either starts with a valid configuration or fails synchronously with one
//! of these variants.

use thiserror::Error;

use crate::config::MAX_WORKERS;

/// Estimation engine error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EstimatorError {
    /// Iteration count outside valid range.
    #[error("Invalid iteration count {0}: must be at least 1")]
    InvalidIterationCount(u64),

    /// Worker count outside valid range [1, 32_768].
    #[error("Invalid worker count {0}: must be in range [1, {MAX_WORKERS}]")]
    InvalidWorkerCount(u32),

    /// Worker thread pool could not be constructed.
    #[error("Worker pool construction failed: {0}")]
    WorkerPool(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EstimatorError::InvalidIterationCount(0);
        assert!(err.to_string().contains("Invalid iteration count 0"));

        let err = EstimatorError::InvalidWorkerCount(0);
        assert!(err.to_string().contains("Invalid worker count 0"));
        assert!(err.to_string().contains("32768"));

        let err = EstimatorError::WorkerPool("out of threads".to_string());
        assert!(err.to_string().contains("out of threads"));
    }
}
