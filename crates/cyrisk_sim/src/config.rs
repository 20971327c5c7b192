//! Simulation configuration.
//!
//! This module provides configuration types and a builder for Monte Carlo
//! loss simulations: iteration count and the base seed from which all
//! per-scenario sampling streams are derived.

use cyrisk_core::types::EngineError;

/// Default number of iterations per simulation run.
pub const DEFAULT_ITERATIONS: usize = 50_000;

/// Default base seed, fixed so that analyses are reproducible unless the
/// caller supplies its own seed.
pub const DEFAULT_SEED: u64 = 42;

/// Maximum number of iterations allowed (allocation guard).
pub const MAX_ITERATIONS: usize = 10_000_000;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying iteration count and base seed.
/// Use [`SimulationConfigBuilder`] for validated construction, or
/// [`SimulationConfig::default`] for the standard 50,000-iteration
/// reproducible setup.
///
/// # Examples
///
/// ```rust
/// use cyrisk_sim::config::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .iterations(10_000)
///     .seed(7)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.iterations(), 10_000);
/// assert_eq!(config.seed(), 7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    /// Number of simulated annual iterations.
    iterations: usize,
    /// Base seed for all derived sampling streams.
    seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            seed: DEFAULT_SEED,
        }
    }
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of iterations per run.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns the base seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidIterationCount`] if `iterations` is 0
    /// or greater than [`MAX_ITERATIONS`].
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.iterations == 0 || self.iterations > MAX_ITERATIONS {
            return Err(EngineError::InvalidIterationCount(self.iterations));
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
///
/// Unset fields fall back to [`DEFAULT_ITERATIONS`] / [`DEFAULT_SEED`];
/// validation happens at build time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimulationConfigBuilder {
    iterations: Option<usize>,
    seed: Option<u64>,
}

impl SimulationConfigBuilder {
    /// Sets the number of iterations per run.
    ///
    /// # Arguments
    ///
    /// * `iterations` - Iteration count in [1, 10_000_000]
    #[inline]
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }

    /// Sets the base seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidIterationCount`] when the iteration
    /// count is outside the allocatable range.
    pub fn build(self) -> Result<SimulationConfig, EngineError> {
        let config = SimulationConfig {
            iterations: self.iterations.unwrap_or(DEFAULT_ITERATIONS),
            seed: self.seed.unwrap_or(DEFAULT_SEED),
        };
        config.validate()?;
        Ok(config)
    }
}
