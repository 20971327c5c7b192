//! Error types for structured error handling.
//!
//! The engine absorbs recoverable conditions (invalid parameters, empty
//! inputs, zero denominators) into its result records, so the error surface
//! is deliberately narrow: only systemic conditions that make a simulation
//! run unrepresentable reach the caller.

use thiserror::Error;

/// Systemic errors surfaced to the collaborating application layer.
///
/// # Variants
/// - `InvalidIterationCount`: Requested iteration count is zero or exceeds
///   the allocation guard
/// - `InvalidConfiguration`: A configuration field is unusable
///
/// # Examples
/// ```
/// use cyrisk_core::types::EngineError;
///
/// let err = EngineError::InvalidIterationCount(0);
/// assert_eq!(
///     format!("{}", err),
///     "Invalid iteration count: 0 (must be in 1..=10000000)"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineError {
    /// Iteration count outside the allocatable range.
    #[error("Invalid iteration count: {0} (must be in 1..=10000000)")]
    InvalidIterationCount(usize),

    /// A configuration field holds an unusable value.
    #[error("Invalid configuration for {name}: {value}")]
    InvalidConfiguration {
        /// Name of the offending field.
        name: &'static str,
        /// Description of the unusable value.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_iteration_count_display() {
        let err = EngineError::InvalidIterationCount(0);
        assert!(format!("{}", err).contains("Invalid iteration count: 0"));
    }

    #[test]
    fn test_invalid_configuration_display() {
        let err = EngineError::InvalidConfiguration {
            name: "discount_rate",
            value: "NaN".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Invalid configuration for discount_rate: NaN"
        );
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = EngineError::InvalidIterationCount(0);
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = EngineError::InvalidIterationCount(7);
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
