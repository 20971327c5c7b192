//! Ordered threshold tables for qualitative rating bands.
//!
//! Rating bands (ROI rating, concentration level) are data: an ordered
//! sequence of `(lower_bound, label)` pairs consulted top-down. Keeping
//! them as tables rather than chained conditionals makes the thresholds
//! testable in isolation and trivially adjustable.

/// An ordered lookup table mapping a numeric measure to a qualitative label.
///
/// Bands are held sorted descending by lower bound; classification returns
/// the label of the first band whose bound the value strictly exceeds, or
/// the default label when no band matches.
///
/// # Examples
///
/// ```rust
/// use cyrisk_core::ratings::RatingScale;
///
/// let scale = RatingScale::new(
///     vec![(200.0, "excellent"), (50.0, "good"), (0.0, "acceptable")],
///     "poor",
/// );
/// assert_eq!(scale.classify(500.0), "excellent");
/// assert_eq!(scale.classify(75.0), "good");
/// assert_eq!(scale.classify(-10.0), "poor");
/// ```
#[derive(Clone, Debug)]
pub struct RatingScale<L> {
    bands: Vec<(f64, L)>,
    default: L,
}

impl<L: Copy> RatingScale<L> {
    /// Creates a scale from `(lower_bound, label)` bands and a default
    /// label for values below every band.
    ///
    /// Bands may be supplied in any order; they are sorted descending so
    /// classification is a single top-down scan.
    pub fn new(mut bands: Vec<(f64, L)>, default: L) -> Self {
        bands.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        Self { bands, default }
    }

    /// Returns the label of the first band whose lower bound `value`
    /// strictly exceeds.
    pub fn classify(&self, value: f64) -> L {
        for &(lower_bound, label) in &self.bands {
            if value > lower_bound {
                return label;
            }
        }
        self.default
    }

    /// Returns the bands in descending bound order.
    pub fn bands(&self) -> &[(f64, L)] {
        &self.bands
    }
}
