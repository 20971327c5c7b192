//! Distributional risk metrics over a simulated loss vector.
//!
//! Computes the standard snapshot consumed by the portfolio and ROI layers:
//! mean (ALE), dispersion, Value-at-Risk at the standard confidence levels,
//! Expected Shortfall, exceedance-probability loss levels, and the
//! probability of loss.
//!
//! Currency-valued outputs are rounded to 2 decimal places at this boundary
//! only; internal computation stays at full precision.

use cyrisk_core::math::percentile::{percentile_sorted, sorted_ascending};
use cyrisk_core::math::round_currency;
use cyrisk_core::types::LossVector;

/// Exceedance probabilities (in percent) at which loss levels are reported.
pub const EXCEEDANCE_LEVELS: [f64; 5] = [50.0, 25.0, 10.0, 5.0, 1.0];

/// Derived read-only risk metrics for one loss distribution.
///
/// All currency fields are rounded to 2 decimal places; probabilities are
/// reported at full precision.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskMetrics {
    /// Mean annual loss (ALE).
    pub mean: f64,
    /// Population standard deviation of annual losses.
    pub std_dev: f64,
    /// Value-at-Risk at 90% confidence.
    pub var_90: f64,
    /// Value-at-Risk at 95% confidence.
    pub var_95: f64,
    /// Value-at-Risk at 99% confidence.
    pub var_99: f64,
    /// Value-at-Risk at 99.9% confidence.
    pub var_999: f64,
    /// Expected Shortfall at 99% (mean loss beyond VaR-99).
    pub expected_shortfall_99: f64,
    /// Largest observed loss.
    pub max_loss: f64,
    /// Fraction of iterations with a strictly positive loss.
    pub probability_of_loss: f64,
    /// Fraction of iterations exceeding the caller-supplied threshold
    /// (`None` when no threshold was given).
    pub probability_above_threshold: Option<f64>,
    /// `(exceedance_probability_pct, loss)` pairs at the levels in
    /// [`EXCEEDANCE_LEVELS`]: the loss exceeded with the given probability.
    pub loss_at_exceedance: Vec<(f64, f64)>,
}

impl RiskMetrics {
    /// The all-zero snapshot used for empty loss vectors.
    pub fn zero() -> Self {
        Self {
            loss_at_exceedance: EXCEEDANCE_LEVELS.iter().map(|&p| (p, 0.0)).collect(),
            ..Self::default()
        }
    }
}

/// Computes the metrics snapshot for a loss vector.
///
/// An empty vector yields [`RiskMetrics::zero`] — empty input is a
/// degradation, not an error.
///
/// # Examples
///
/// ```rust
/// use cyrisk_core::types::LossVector;
/// use cyrisk_sim::metrics::compute_metrics;
///
/// let losses = LossVector::from_vec(vec![0.0, 0.0, 100.0, 300.0]);
/// let metrics = compute_metrics(&losses, Some(150.0));
///
/// assert_eq!(metrics.mean, 100.0);
/// assert_eq!(metrics.probability_of_loss, 0.5);
/// assert_eq!(metrics.probability_above_threshold, Some(0.25));
/// ```
pub fn compute_metrics(losses: &LossVector, threshold: Option<f64>) -> RiskMetrics {
    if losses.is_empty() {
        return RiskMetrics::zero();
    }

    let n = losses.len() as f64;
    let slice = losses.as_slice();
    let sorted = sorted_ascending(slice);

    let mean = losses.mean();
    let variance = slice.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    let var_99 = percentile_sorted(&sorted, 99.0);
    let expected_shortfall_99 = expected_shortfall(&sorted, var_99);

    let probability_above_threshold =
        threshold.map(|t| slice.iter().filter(|&&x| x > t).count() as f64 / n);

    let loss_at_exceedance = EXCEEDANCE_LEVELS
        .iter()
        .map(|&p| (p, round_currency(percentile_sorted(&sorted, 100.0 - p))))
        .collect();

    RiskMetrics {
        mean: round_currency(mean),
        std_dev: round_currency(std_dev),
        var_90: round_currency(percentile_sorted(&sorted, 90.0)),
        var_95: round_currency(percentile_sorted(&sorted, 95.0)),
        var_99: round_currency(var_99),
        var_999: round_currency(percentile_sorted(&sorted, 99.9)),
        expected_shortfall_99: round_currency(expected_shortfall_99),
        max_loss: round_currency(sorted[sorted.len() - 1]),
        probability_of_loss: losses.non_zero_fraction(),
        probability_above_threshold,
        loss_at_exceedance,
    }
}

/// Mean of all losses at or above the VaR threshold; falls back to the
/// threshold itself when no loss qualifies.
fn expected_shortfall(sorted: &[f64], var: f64) -> f64 {
    // sorted is ascending, so the tail starts at the first index >= var.
    let start = sorted.partition_point(|&x| x < var);
    let tail = &sorted[start..];
    if tail.is_empty() {
        var
    } else {
        tail.iter().sum::<f64>() / tail.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cyrisk_core::types::RiskParameters;

    use crate::rng::SimRng;
    use crate::simulator::simulate_scenario;

    fn simulated_losses() -> LossVector {
        let params = RiskParameters::new(0.10, 10_000.0, 100_000.0);
        let mut rng = SimRng::from_seed(42);
        simulate_scenario(&params, 50_000, &mut rng)
    }

    #[test]
    fn test_empty_vector_zeroed_metrics() {
        let metrics = compute_metrics(&LossVector::default(), Some(100.0));
        assert_eq!(metrics.mean, 0.0);
        assert_eq!(metrics.var_99, 0.0);
        assert_eq!(metrics.expected_shortfall_99, 0.0);
        assert_eq!(metrics.probability_of_loss, 0.0);
        assert_eq!(metrics.loss_at_exceedance.len(), EXCEEDANCE_LEVELS.len());
    }

    #[test]
    fn test_all_zero_vector_zeroed_metrics() {
        let metrics = compute_metrics(&LossVector::zeros(1_000), None);
        assert_eq!(metrics.mean, 0.0);
        assert_eq!(metrics.std_dev, 0.0);
        assert_eq!(metrics.var_999, 0.0);
        assert_eq!(metrics.max_loss, 0.0);
        assert_eq!(metrics.probability_of_loss, 0.0);
        assert_eq!(metrics.probability_above_threshold, None);
    }

    #[test]
    fn test_var_monotone_in_level() {
        let metrics = compute_metrics(&simulated_losses(), None);
        assert!(metrics.var_90 <= metrics.var_95);
        assert!(metrics.var_95 <= metrics.var_99);
        assert!(metrics.var_99 <= metrics.var_999);
        assert!(metrics.var_999 <= metrics.max_loss);
    }

    #[test]
    fn test_expected_shortfall_dominates_var() {
        let metrics = compute_metrics(&simulated_losses(), None);
        assert!(metrics.expected_shortfall_99 >= metrics.var_99);
    }

    #[test]
    fn test_expected_shortfall_degenerate_distribution() {
        // Constant losses: VaR-99 equals every loss, tail mean is trivial.
        let losses = LossVector::from_vec(vec![5.0; 100]);
        let metrics = compute_metrics(&losses, None);
        assert_eq!(metrics.expected_shortfall_99, 5.0);
    }

    #[test]
    fn test_probability_above_threshold() {
        let losses = LossVector::from_vec(vec![0.0, 10.0, 20.0, 30.0]);
        let metrics = compute_metrics(&losses, Some(15.0));
        assert_eq!(metrics.probability_above_threshold, Some(0.5));
        assert_eq!(metrics.probability_of_loss, 0.75);
    }

    #[test]
    fn test_exceedance_losses_monotone() {
        // Lower exceedance probability means a rarer, larger loss.
        let metrics = compute_metrics(&simulated_losses(), None);
        for pair in metrics.loss_at_exceedance.windows(2) {
            let (p_hi, loss_hi) = pair[0];
            let (p_lo, loss_lo) = pair[1];
            assert!(p_hi > p_lo);
            assert!(loss_hi <= loss_lo);
        }
    }

    #[test]
    fn test_mean_matches_loss_vector() {
        let losses = simulated_losses();
        let metrics = compute_metrics(&losses, None);
        assert_relative_eq!(metrics.mean, losses.mean(), max_relative = 1e-4);
    }

    #[test]
    fn test_currency_rounding() {
        let losses = LossVector::from_vec(vec![10.111, 10.222, 10.333]);
        let metrics = compute_metrics(&losses, None);
        assert_relative_eq!(metrics.mean, 10.22);
        assert_eq!(metrics.max_loss, 10.33);
    }
}
