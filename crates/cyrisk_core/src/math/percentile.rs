//! Percentiles via linear interpolation between order statistics.
//!
//! Uses the exclusive interpolation variant (rank `h = p(n+1)/100`), so
//! percentile outputs vary smoothly with the sample size instead of jumping
//! between nearest ranks.

/// Computes the `p`-th percentile of an ascending-sorted sample.
///
/// `p` is in percent (0..=100). Uses exclusive linear interpolation: the
/// fractional rank is `h = p (n+1) / 100`, clamped to the first/last order
/// statistic outside the interpolable range.
///
/// Returns 0.0 for an empty sample — the documented degradation for empty
/// loss vectors.
///
/// # Examples
///
/// ```rust
/// use cyrisk_core::math::percentile::percentile_sorted;
///
/// let sample = [10.0, 20.0, 30.0, 40.0];
/// assert_eq!(percentile_sorted(&sample, 50.0), 25.0);
/// assert_eq!(percentile_sorted(&sample, 100.0), 40.0);
/// ```
pub fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }
    if n == 1 {
        return sorted[0];
    }

    let h = p / 100.0 * (n + 1) as f64;
    if h <= 1.0 {
        return sorted[0];
    }
    if h >= n as f64 {
        return sorted[n - 1];
    }

    // 0-based fractional rank within the interpolable range.
    let rank = h - 1.0;
    let lo = rank.floor() as usize;
    let frac = rank - rank.floor();
    sorted[lo] + frac * (sorted[lo + 1] - sorted[lo])
}

/// Returns an ascending-sorted copy of `values`.
///
/// NaN-free input is assumed (simulated losses are always finite); ties are
/// left in arbitrary order.
pub fn sorted_ascending(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted
}
