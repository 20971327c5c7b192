//! Simulated annual loss storage.
//!
//! A [`LossVector`] holds the N simulated annual losses for one scenario or
//! for a portfolio. It is produced once by the simulator and consumed
//! read-only by every downstream metric; no in-place mutation is exposed
//! beyond element-wise accumulation used by the aggregator.

/// An ordered sequence of non-negative simulated annual losses.
///
/// # Examples
///
/// ```rust
/// use cyrisk_core::types::LossVector;
///
/// let losses = LossVector::from_vec(vec![0.0, 120.5, 0.0, 87.25]);
/// assert_eq!(losses.len(), 4);
/// assert!((losses.mean() - 51.9375).abs() < 1e-12);
/// assert!((losses.non_zero_fraction() - 0.5).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LossVector(Vec<f64>);

impl LossVector {
    /// Creates a loss vector of `n` zeros.
    ///
    /// This is the degenerate result for invalid or zero-probability
    /// scenarios.
    #[inline]
    pub fn zeros(n: usize) -> Self {
        Self(vec![0.0; n])
    }

    /// Wraps an existing vector of losses.
    #[inline]
    pub fn from_vec(losses: Vec<f64>) -> Self {
        Self(losses)
    }

    /// Returns the number of iterations.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the vector holds no iterations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the losses as a read-only slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Returns the mean annual loss (ALE for this vector).
    ///
    /// An empty vector has mean 0.0.
    pub fn mean(&self) -> f64 {
        if self.0.is_empty() {
            return 0.0;
        }
        self.0.iter().sum::<f64>() / self.0.len() as f64
    }

    /// Returns the fraction of iterations with a strictly positive loss.
    ///
    /// An empty vector has fraction 0.0.
    pub fn non_zero_fraction(&self) -> f64 {
        if self.0.is_empty() {
            return 0.0;
        }
        let non_zero = self.0.iter().filter(|&&x| x > 0.0).count();
        non_zero as f64 / self.0.len() as f64
    }

    /// Returns the largest observed loss (0.0 for an empty vector).
    pub fn max(&self) -> f64 {
        self.0.iter().copied().fold(0.0, f64::max)
    }

    /// Adds `other` element-wise into `self`.
    ///
    /// Used by the portfolio aggregator under the independence assumption.
    /// Trailing elements of the longer vector are left unchanged; callers
    /// are expected to simulate all scenarios with the same iteration count.
    pub fn accumulate(&mut self, other: &LossVector) {
        for (acc, x) in self.0.iter_mut().zip(other.0.iter()) {
            *acc += x;
        }
    }

    /// Sums a set of equally sized loss vectors element-wise.
    ///
    /// Returns an empty vector when `vectors` is empty.
    pub fn sum_elementwise(vectors: &[LossVector]) -> LossVector {
        let Some(first) = vectors.first() else {
            return LossVector::default();
        };
        let mut total = LossVector::zeros(first.len());
        for v in vectors {
            total.accumulate(v);
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zeros() {
        let v = LossVector::zeros(5);
        assert_eq!(v.len(), 5);
        assert_eq!(v.mean(), 0.0);
        assert_eq!(v.non_zero_fraction(), 0.0);
        assert_eq!(v.max(), 0.0);
    }

    #[test]
    fn test_empty_vector_statistics() {
        let v = LossVector::default();
        assert!(v.is_empty());
        assert_eq!(v.mean(), 0.0);
        assert_eq!(v.non_zero_fraction(), 0.0);
        assert_eq!(v.max(), 0.0);
    }

    #[test]
    fn test_mean_and_fraction() {
        let v = LossVector::from_vec(vec![0.0, 10.0, 0.0, 30.0]);
        assert_relative_eq!(v.mean(), 10.0);
        assert_relative_eq!(v.non_zero_fraction(), 0.5);
        assert_relative_eq!(v.max(), 30.0);
    }

    #[test]
    fn test_accumulate() {
        let mut a = LossVector::from_vec(vec![1.0, 2.0, 3.0]);
        let b = LossVector::from_vec(vec![10.0, 20.0, 30.0]);
        a.accumulate(&b);
        assert_eq!(a.as_slice(), &[11.0, 22.0, 33.0]);
    }

    #[test]
    fn test_sum_elementwise() {
        let vectors = vec![
            LossVector::from_vec(vec![1.0, 0.0]),
            LossVector::from_vec(vec![2.0, 5.0]),
            LossVector::from_vec(vec![3.0, 0.0]),
        ];
        let total = LossVector::sum_elementwise(&vectors);
        assert_eq!(total.as_slice(), &[6.0, 5.0]);
    }

    #[test]
    fn test_sum_elementwise_empty() {
        let total = LossVector::sum_elementwise(&[]);
        assert!(total.is_empty());
    }
}
