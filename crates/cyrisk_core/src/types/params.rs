//! Elicited risk parameters for a single scenario.
//!
//! A scenario is described by its annual occurrence probability and a 90%
//! confidence interval for loss severity: the analyst asserts the loss, if
//! the event occurs, falls between `lower_bound` and `upper_bound` with 90%
//! confidence (5th/95th percentile of a lognormal severity distribution).

/// Elicited parameters for one risk scenario.
///
/// # Validity
///
/// A parameter set is *valid* when `probability >= 0`, both bounds are
/// positive and finite, and `lower_bound <= upper_bound`. Equal bounds are
/// accepted and treated as a point estimate (the calibrator clamps the
/// dispersion to a small positive floor).
///
/// Invalid parameter sets are deliberately constructible: batch analyses
/// must tolerate partially specified scenarios, so downstream consumers map
/// invalid parameters to an all-zero loss distribution rather than failing.
///
/// # Examples
///
/// ```rust
/// use cyrisk_core::types::RiskParameters;
///
/// let params = RiskParameters::new(0.10, 10_000.0, 100_000.0);
/// assert!(params.is_valid());
///
/// // Inconsistent bounds do not panic; they degrade downstream.
/// let bad = RiskParameters::new(0.10, 100_000.0, 10_000.0);
/// assert!(!bad.is_valid());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskParameters {
    /// Annual occurrence probability in [0, 1].
    pub probability: f64,
    /// 5th percentile of loss severity (currency units, > 0).
    pub lower_bound: f64,
    /// 95th percentile of loss severity (currency units, >= lower_bound).
    pub upper_bound: f64,
}

impl RiskParameters {
    /// Creates a new parameter set without validation.
    ///
    /// Validation is intentionally deferred to [`RiskParameters::is_valid`]
    /// so that malformed records can flow through batch pipelines and
    /// degrade to zero-risk results.
    #[inline]
    pub fn new(probability: f64, lower_bound: f64, upper_bound: f64) -> Self {
        Self {
            probability,
            lower_bound,
            upper_bound,
        }
    }

    /// Checks whether the parameters describe a usable scenario.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.probability >= 0.0
            && self.probability.is_finite()
            && self.lower_bound > 0.0
            && self.lower_bound.is_finite()
            && self.upper_bound.is_finite()
            && self.upper_bound >= self.lower_bound
    }

    /// Returns the occurrence probability clamped to [0, 1].
    #[inline]
    pub fn effective_probability(&self) -> f64 {
        self.probability.clamp(0.0, 1.0)
    }

    /// Returns a copy with the occurrence probability scaled by `factor`,
    /// capped at 1.0.
    ///
    /// Used by the stress tester for probability-multiplier perturbations.
    #[inline]
    pub fn with_probability_scaled(&self, factor: f64) -> Self {
        Self {
            probability: (self.probability * factor).min(1.0),
            ..*self
        }
    }

    /// Returns a copy with both severity bounds scaled by `factor`.
    ///
    /// Used by the stress tester for impact-multiplier perturbations.
    #[inline]
    pub fn with_impact_scaled(&self, factor: f64) -> Self {
        Self {
            lower_bound: self.lower_bound * factor,
            upper_bound: self.upper_bound * factor,
            ..*self
        }
    }
}

/// A named risk scenario: the record the portfolio layer consumes.
///
/// # Examples
///
/// ```rust
/// use cyrisk_core::types::{RiskParameters, ScenarioSpec};
///
/// let scenario = ScenarioSpec::new(
///     "Ransomware outbreak",
///     RiskParameters::new(0.2, 50_000.0, 200_000.0),
/// );
/// assert_eq!(scenario.name, "Ransomware outbreak");
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioSpec {
    /// Human-readable scenario name (unique within one analysis).
    pub name: String,
    /// Elicited likelihood and severity parameters.
    pub params: RiskParameters,
}

impl ScenarioSpec {
    /// Creates a new named scenario.
    #[inline]
    pub fn new(name: impl Into<String>, params: RiskParameters) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }
}
