//! Lognormal severity calibration from elicited confidence intervals.
//!
//! Analysts express loss severity as a 90% confidence interval: the loss,
//! given the event occurs, falls between `lower` and `upper` with 90%
//! confidence. Interpreting those as the 5th and 95th percentile of a
//! lognormal distribution gives the closed form
//!
//! ```text
//! sigma = (ln(upper) - ln(lower)) / (2 z)
//! mu    = (ln(upper) + ln(lower)) / 2
//! ```
//!
//! with `z = 1.645`, the standard normal 95th-percentile quantile.

/// Standard normal quantile at the 95th percentile (one tail of a 90%
/// central interval).
pub const Z_90: f64 = 1.645;

/// Dispersion floor for degenerate point-estimate intervals.
///
/// A `lower == upper` interval would calibrate to `sigma == 0`, which makes
/// downstream sampling degenerate to a constant. The floor keeps the
/// distribution well-defined while remaining numerically negligible.
pub const SIGMA_FLOOR: f64 = 1e-6;

/// Calibrated lognormal distribution parameters.
///
/// # Examples
///
/// ```rust
/// use cyrisk_core::math::lognormal::LognormalParams;
///
/// let dist = LognormalParams::from_confidence_interval(10_000.0, 100_000.0)
///     .expect("valid interval");
///
/// // The geometric midpoint of the interval is exp(mu).
/// let midpoint = dist.mu.exp();
/// assert!((midpoint - (10_000.0_f64 * 100_000.0).sqrt()).abs() < 1e-6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LognormalParams {
    /// Location parameter (mean of the underlying normal).
    pub mu: f64,
    /// Scale parameter (standard deviation of the underlying normal),
    /// always strictly positive.
    pub sigma: f64,
}

impl LognormalParams {
    /// Calibrates from a 90% confidence interval on severity.
    ///
    /// `lower` and `upper` are interpreted as the 5th and 95th percentile.
    /// A point estimate (`lower == upper`) calibrates to `mu = ln(lower)`
    /// with `sigma` clamped to [`SIGMA_FLOOR`].
    ///
    /// # Returns
    ///
    /// `None` when either bound is non-positive, non-finite, or
    /// `lower > upper`. Batch callers treat `None` as a zero-loss scenario.
    pub fn from_confidence_interval(lower: f64, upper: f64) -> Option<Self> {
        if !(lower > 0.0) || !(upper > 0.0) || !lower.is_finite() || !upper.is_finite() {
            return None;
        }
        if lower > upper {
            return None;
        }

        let ln_lower = lower.ln();
        let ln_upper = upper.ln();
        let mu = (ln_upper + ln_lower) / 2.0;
        let sigma = ((ln_upper - ln_lower) / (2.0 * Z_90)).max(SIGMA_FLOOR);

        Some(Self { mu, sigma })
    }

    /// Expected value of the lognormal distribution: `exp(mu + sigma²/2)`.
    ///
    /// Multiplied by the occurrence probability this gives the analytic
    /// single-scenario ALE, used as the reference value in convergence
    /// tests.
    #[inline]
    pub fn mean(&self) -> f64 {
        (self.mu + 0.5 * self.sigma * self.sigma).exp()
    }
}
