//! CLI error types
//!
//! Wraps engine errors and CLI-specific failures behind a single error type
//! so command handlers can use `?` throughout.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// An argument failed validation before reaching the engine
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The estimation engine rejected the run configuration or failed
    #[error("Estimation failed: {0}")]
    Estimator(#[from] quadrant_core::EstimatorError),

    /// Report serialisation failed
    #[error("Report serialisation failed: {0}")]
    Serialisation(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadrant_core::EstimatorError;

    /// Verifies that engine errors convert into CLI errors via `From`.
    #[test]
    fn test_estimator_error_conversion() {
        let err: CliError = EstimatorError::InvalidIterationCount(0).into();
        assert!(matches!(err, CliError::Estimator(_)));
        assert_eq!(
            err.to_string(),
            "Estimation failed: Invalid iteration count 0: must be at least 1"
        );
    }

    /// Verifies the invalid-argument display format.
    #[test]
    fn test_invalid_argument_display() {
        let err = CliError::InvalidArgument("Unknown format: yaml. Supported: text, json".into());
        assert_eq!(
            err.to_string(),
            "Invalid argument: Unknown format: yaml. Supported: text, json"
        );
    }
}
