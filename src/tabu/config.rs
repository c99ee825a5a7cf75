//! Tabu Search configuration.

use crate::construct::DEFAULT_MAX_RETRIES;
use crate::error::{Result, TspError};

/// Seed used when [`TabuConfig::seed`] is `None`.
pub const DEFAULT_SEED: u64 = 42;

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use tabu_tsp::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(1000)
///     .with_tabu_size(7)
///     .with_seed(3);
/// assert_eq!(config.max_iterations, 1000);
/// assert_eq!(config.tabu_size, 7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabuConfig {
    /// Capacity of the tabu list (number of remembered tours).
    pub tabu_size: usize,
    /// Exact number of iterations to run. There is no early stop.
    pub max_iterations: usize,
    /// Extra backtracking attempts allowed when building the initial tour.
    pub max_retries: usize,
    /// Random seed (`None` falls back to [`DEFAULT_SEED`]).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            tabu_size: 7,
            max_iterations: 500,
            max_retries: DEFAULT_MAX_RETRIES,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the tabu list capacity.
    pub fn with_tabu_size(mut self, n: usize) -> Self {
        self.tabu_size = n;
        self
    }

    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the extra backtracking attempts for the initial tour.
    pub fn with_max_retries(mut self, n: usize) -> Self {
        self.max_retries = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.tabu_size == 0 {
            return Err(TspError::InvalidParameter(
                "tabu_size must be positive".into(),
            ));
        }
        Ok(())
    }
}
