//! Estimation run configuration.
//!
//! This module provides the configuration type and builder for Monte Carlo
//! π estimation runs, together with the validation limits and the default
//! workload constants shared by the library and its callers.

use crate::error::EstimatorError;

/// Maximum number of workers allowed per run.
///
/// Each worker is backed by one OS thread, so the cap bounds the resource
/// footprint of a single run.
pub const MAX_WORKERS: u32 = 32_768;

/// Default number of Monte Carlo iterations for a full run.
pub const DEFAULT_ITERATIONS: u64 = 100_000_000;

/// Default base seed when the caller does not supply one.
pub const DEFAULT_BASE_SEED: u64 = 12345;

/// Policy for iterations left over when the total does not divide evenly
/// across workers.
///
/// With `w` workers and `n` total iterations, each worker runs `n / w`
/// iterations and `n % w` iterations remain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RemainderPolicy {
    /// Drop the remainder. The estimate still divides by the requested
    /// total, so the result is biased very slightly low whenever the
    /// remainder is non-zero. This is the default.
    #[default]
    Truncate,

    /// Give the first `n % w` workers one extra iteration each, so every
    /// requested iteration is sampled. Worker seeds are unchanged; only
    /// the iteration counts differ from [`RemainderPolicy::Truncate`].
    Distribute,
}

/// Monte Carlo estimation configuration.
///
/// Immutable configuration specifying run parameters.
/// Use [`EstimatorConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use quadrant_core::{EstimatorConfig, RemainderPolicy};
///
/// let config = EstimatorConfig::builder()
///     .total_iterations(1_000_000)
///     .num_workers(8)
///     .base_seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.total_iterations(), 1_000_000);
/// assert_eq!(config.num_workers(), 8);
/// assert_eq!(config.remainder(), RemainderPolicy::Truncate);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EstimatorConfig {
    /// Total number of Monte Carlo iterations requested.
    total_iterations: u64,
    /// Number of parallel workers.
    num_workers: u32,
    /// Base seed from which worker seeds are derived.
    base_seed: u64,
    /// Handling of the iteration remainder.
    remainder: RemainderPolicy,
}

impl EstimatorConfig {
    /// Creates a new configuration builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quadrant_core::EstimatorConfig;
    ///
    /// let config = EstimatorConfig::builder()
    ///     .total_iterations(10_000)
    ///     .num_workers(2)
    ///     .build()
    ///     .unwrap();
    /// ```
    #[inline]
    pub fn builder() -> EstimatorConfigBuilder {
        EstimatorConfigBuilder::default()
    }

    /// Returns the total number of iterations requested.
    #[inline]
    pub fn total_iterations(&self) -> u64 {
        self.total_iterations
    }

    /// Returns the number of parallel workers.
    #[inline]
    pub fn num_workers(&self) -> u32 {
        self.num_workers
    }

    /// Returns the base seed.
    #[inline]
    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    /// Returns the remainder policy.
    #[inline]
    pub fn remainder(&self) -> RemainderPolicy {
        self.remainder
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `EstimatorError` if:
    /// - `total_iterations` is 0
    /// - `num_workers` is 0 or greater than [`MAX_WORKERS`]
    pub fn validate(&self) -> Result<(), EstimatorError> {
        if self.total_iterations == 0 {
            return Err(EstimatorError::InvalidIterationCount(self.total_iterations));
        }
        if self.num_workers == 0 || self.num_workers > MAX_WORKERS {
            return Err(EstimatorError::InvalidWorkerCount(self.num_workers));
        }
        Ok(())
    }
}

/// Builder for [`EstimatorConfig`].
///
/// Provides a fluent API for constructing run configurations with
/// validation at build time.
///
/// # Examples
///
/// ```rust
/// use quadrant_core::{EstimatorConfig, RemainderPolicy};
///
/// let config = EstimatorConfig::builder()
///     .total_iterations(100)
///     .num_workers(3)
///     .remainder(RemainderPolicy::Distribute)
///     .build()
///     .expect("valid config");
/// ```
#[derive(Clone, Debug, Default)]
pub struct EstimatorConfigBuilder {
    total_iterations: Option<u64>,
    num_workers: Option<u32>,
    base_seed: Option<u64>,
    remainder: RemainderPolicy,
}

impl EstimatorConfigBuilder {
    /// Sets the total number of Monte Carlo iterations.
    ///
    /// # Arguments
    ///
    /// * `total_iterations` - Iteration count, at least 1
    #[inline]
    pub fn total_iterations(mut self, total_iterations: u64) -> Self {
        self.total_iterations = Some(total_iterations);
        self
    }

    /// Sets the number of parallel workers.
    ///
    /// # Arguments
    ///
    /// * `num_workers` - Worker count in [1, 32_768]
    #[inline]
    pub fn num_workers(mut self, num_workers: u32) -> Self {
        self.num_workers = Some(num_workers);
        self
    }

    /// Sets the base seed for worker stream derivation.
    ///
    /// Defaults to [`DEFAULT_BASE_SEED`] when not set.
    ///
    /// # Arguments
    ///
    /// * `base_seed` - 64-bit seed value
    #[inline]
    pub fn base_seed(mut self, base_seed: u64) -> Self {
        self.base_seed = Some(base_seed);
        self
    }

    /// Sets the remainder policy.
    ///
    /// # Arguments
    ///
    /// * `remainder` - Handling of iterations left over by partitioning
    #[inline]
    pub fn remainder(mut self, remainder: RemainderPolicy) -> Self {
        self.remainder = remainder;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `EstimatorError` if:
    /// - `total_iterations` not set or 0
    /// - `num_workers` not set, 0, or greater than [`MAX_WORKERS`]
    pub fn build(self) -> Result<EstimatorConfig, EstimatorError> {
        let total_iterations = self
            .total_iterations
            .ok_or(EstimatorError::InvalidIterationCount(0))?;

        let num_workers = self
            .num_workers
            .ok_or(EstimatorError::InvalidWorkerCount(0))?;

        let config = EstimatorConfig {
            total_iterations,
            num_workers,
            base_seed: self.base_seed.unwrap_or(DEFAULT_BASE_SEED),
            remainder: self.remainder,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_valid() {
        let config = EstimatorConfig::builder()
            .total_iterations(10_000)
            .num_workers(4)
            .build()
            .unwrap();

        assert_eq!(config.total_iterations(), 10_000);
        assert_eq!(config.num_workers(), 4);
        assert_eq!(config.base_seed(), DEFAULT_BASE_SEED);
        assert_eq!(config.remainder(), RemainderPolicy::Truncate);
    }

    #[test]
    fn test_config_builder_with_seed() {
        let config = EstimatorConfig::builder()
            .total_iterations(1000)
            .num_workers(1)
            .base_seed(42)
            .build()
            .unwrap();

        assert_eq!(config.base_seed(), 42);
    }

    #[test]
    fn test_config_builder_with_remainder_policy() {
        let config = EstimatorConfig::builder()
            .total_iterations(100)
            .num_workers(3)
            .remainder(RemainderPolicy::Distribute)
            .build()
            .unwrap();

        assert_eq!(config.remainder(), RemainderPolicy::Distribute);
    }

    #[test]
    fn test_config_invalid_zero_iterations() {
        let result = EstimatorConfig::builder()
            .total_iterations(0)
            .num_workers(4)
            .build();

        assert!(matches!(
            result,
            Err(EstimatorError::InvalidIterationCount(0))
        ));
    }

    #[test]
    fn test_config_invalid_zero_workers() {
        let result = EstimatorConfig::builder()
            .total_iterations(1000)
            .num_workers(0)
            .build();

        assert!(matches!(result, Err(EstimatorError::InvalidWorkerCount(0))));
    }

    #[test]
    fn test_config_invalid_too_many_workers() {
        let result = EstimatorConfig::builder()
            .total_iterations(1000)
            .num_workers(MAX_WORKERS + 1)
            .build();

        assert!(matches!(result, Err(EstimatorError::InvalidWorkerCount(_))));
    }

    #[test]
    fn test_config_missing_iterations() {
        let result = EstimatorConfig::builder().num_workers(4).build();

        assert!(matches!(
            result,
            Err(EstimatorError::InvalidIterationCount(0))
        ));
    }

    #[test]
    fn test_config_missing_workers() {
        let result = EstimatorConfig::builder().total_iterations(1000).build();

        assert!(matches!(result, Err(EstimatorError::InvalidWorkerCount(0))));
    }

    #[test]
    fn test_remainder_policy_default() {
        assert_eq!(RemainderPolicy::default(), RemainderPolicy::Truncate);
    }

    #[test]
    fn test_default_workload_constants() {
        assert_eq!(DEFAULT_ITERATIONS, 100_000_000);
        assert_eq!(DEFAULT_BASE_SEED, 12345);
    }
}
