//! Loss exceedance curve construction.
//!
//! The loss exceedance curve (LEC) plots loss level against the probability
//! of exceeding that level in a year: the i-th largest of N simulated
//! losses (1-indexed) is exceeded with empirical probability i/N.

use cyrisk_core::math::percentile::sorted_ascending;
use cyrisk_core::math::round_currency;
use cyrisk_core::types::LossVector;

/// Default maximum number of points retained after downsampling.
pub const MAX_LEC_POINTS: usize = 1_000;

/// One point on the loss exceedance curve.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LecPoint {
    /// Loss level (currency units, rounded to 2 decimal places).
    pub loss: f64,
    /// Probability of an annual loss exceeding this level, in (0, 1].
    pub exceedance_probability: f64,
}

/// An ordered loss exceedance curve.
///
/// Points are sorted by loss ascending with exceedance probability
/// monotonically non-increasing from 1 toward 0.
///
/// # Examples
///
/// ```rust
/// use cyrisk_core::types::LossVector;
/// use cyrisk_sim::lec::LossExceedanceCurve;
///
/// let losses = LossVector::from_vec(vec![10.0, 40.0, 20.0, 30.0]);
/// let curve = LossExceedanceCurve::from_losses(&losses);
///
/// assert_eq!(curve.len(), 4);
/// assert_eq!(curve.points()[0].exceedance_probability, 1.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LossExceedanceCurve {
    points: Vec<LecPoint>,
}

impl LossExceedanceCurve {
    /// Builds the empirical curve from a loss vector.
    ///
    /// An empty vector yields an empty curve.
    pub fn from_losses(losses: &LossVector) -> Self {
        let n = losses.len();
        if n == 0 {
            return Self::default();
        }

        let sorted = sorted_ascending(losses.as_slice());
        let points = sorted
            .iter()
            .enumerate()
            .map(|(j, &loss)| LecPoint {
                loss: round_currency(loss),
                // The j-th smallest of n losses is the (n - j)-th largest.
                exceedance_probability: (n - j) as f64 / n as f64,
            })
            .collect();

        Self { points }
    }

    /// Downsamples to at most `max_points` by uniform striding, always
    /// preserving the first and last point so the curve keeps its range.
    ///
    /// Striding a monotone sequence keeps it monotone, so the curve
    /// invariants survive downsampling. Curves already within the budget
    /// are returned unchanged; `max_points` below 2 is raised to 2, since
    /// both endpoints are always kept.
    pub fn downsample(&self, max_points: usize) -> Self {
        let n = self.points.len();
        let max_points = max_points.max(2);
        if n <= max_points {
            return self.clone();
        }

        let mut points = Vec::with_capacity(max_points);
        let last = n - 1;
        let mut prev_idx = usize::MAX;
        for k in 0..max_points {
            // Evenly spaced indices over [0, last], endpoints inclusive.
            // Rounding can repeat an index; skip on the index rather than
            // comparing point values.
            let idx = (k as f64 * last as f64 / (max_points - 1) as f64).round() as usize;
            if idx != prev_idx {
                points.push(self.points[idx]);
                prev_idx = idx;
            }
        }

        Self { points }
    }

    /// Returns the curve points, loss ascending.
    #[inline]
    pub fn points(&self) -> &[LecPoint] {
        &self.points
    }

    /// Returns the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` when the curve is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
