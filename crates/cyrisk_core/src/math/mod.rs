//! Mathematical primitives for the simulation and metrics layers.
//!
//! This module provides:
//! - `lognormal`: Calibration of lognormal severity distributions from
//!   elicited 90% confidence intervals
//! - `percentile`: Linear-interpolation percentiles over order statistics

pub mod lognormal;
pub mod percentile;

/// Rounds a currency-valued output to 2 decimal places.
///
/// Applied at the result boundary only; internal computation stays at full
/// precision. Non-finite values pass through unchanged so that documented
/// infinities (e.g. payback period) survive rounding.
///
/// # Examples
///
/// ```rust
/// use cyrisk_core::math::round_currency;
///
/// assert_eq!(round_currency(1234.5678), 1234.57);
/// assert_eq!(round_currency(f64::INFINITY), f64::INFINITY);
/// ```
#[inline]
pub fn round_currency(value: f64) -> f64 {
    if value.is_finite() {
        (value * 100.0).round() / 100.0
    } else {
        value
    }
}
