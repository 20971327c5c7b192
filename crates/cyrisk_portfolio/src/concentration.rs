//! Concentration risk over per-scenario loss expectancies.
//!
//! Given the standalone ALEs of a portfolio's scenarios, measures how
//! concentrated the expected loss is: Herfindahl-Hirschman index over ALE
//! shares, Gini coefficient via the rank-sum formula, and top-N shares,
//! with a qualitative level derived from ordered threshold tables.

use cyrisk_core::ratings::RatingScale;

/// Qualitative concentration level, ordered from least to most severe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConcentrationLevel {
    /// Expected loss spread broadly across scenarios.
    #[default]
    Low,
    /// A handful of scenarios carry a notable share.
    Moderate,
    /// Expected loss visibly dominated by few scenarios.
    High,
    /// A single scenario (or very few) dominates the portfolio.
    VeryHigh,
}

/// Concentration measures for one portfolio.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskConcentration {
    /// Herfindahl-Hirschman index: sum of squared ALE shares, in (0, 1]
    /// for a portfolio with positive ALE.
    pub hhi: f64,
    /// Gini coefficient of the ALE distribution, in [0, 1).
    pub gini: f64,
    /// Combined share of the 3 largest scenarios.
    pub top3_share: f64,
    /// Combined share of the 5 largest scenarios.
    pub top5_share: f64,
    /// Qualitative level derived from `hhi` and `top3_share`.
    pub level: ConcentrationLevel,
}

/// HHI thresholds for the qualitative level.
fn hhi_scale() -> RatingScale<ConcentrationLevel> {
    RatingScale::new(
        vec![
            (0.25, ConcentrationLevel::VeryHigh),
            (0.15, ConcentrationLevel::High),
            (0.10, ConcentrationLevel::Moderate),
        ],
        ConcentrationLevel::Low,
    )
}

/// Top-3 share thresholds for the qualitative level.
fn top3_scale() -> RatingScale<ConcentrationLevel> {
    RatingScale::new(
        vec![
            (0.8, ConcentrationLevel::VeryHigh),
            (0.6, ConcentrationLevel::High),
            (0.4, ConcentrationLevel::Moderate),
        ],
        ConcentrationLevel::Low,
    )
}

/// Computes concentration measures from standalone scenario ALEs.
///
/// Negative inputs are treated as zero (an ALE cannot be negative). An
/// empty list or an all-zero portfolio yields zeroed measures at
/// [`ConcentrationLevel::Low`] — the documented degradation, not an error.
///
/// # Examples
///
/// ```rust
/// use cyrisk_portfolio::concentration::{concentration_from_ales, ConcentrationLevel};
///
/// // One dominant scenario.
/// let conc = concentration_from_ales(&[90_000.0, 5_000.0, 5_000.0]);
/// assert!(conc.hhi > 0.8);
/// assert_eq!(conc.level, ConcentrationLevel::VeryHigh);
/// ```
pub fn concentration_from_ales(ales: &[f64]) -> RiskConcentration {
    let ales: Vec<f64> = ales.iter().map(|&a| a.max(0.0)).collect();
    let total: f64 = ales.iter().sum();
    if ales.is_empty() || total <= 0.0 {
        return RiskConcentration::default();
    }

    let mut shares: Vec<f64> = ales.iter().map(|a| a / total).collect();
    let hhi: f64 = shares.iter().map(|s| s * s).sum();

    shares.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    let top3_share: f64 = shares.iter().take(3).sum();
    let top5_share: f64 = shares.iter().take(5).sum();

    let gini = gini_coefficient(&ales);

    // The level is the more severe of the two threshold lookups, which is
    // exactly the "either condition" rule for each band.
    let level = hhi_scale()
        .classify(hhi)
        .max(top3_scale().classify(top3_share));

    RiskConcentration {
        hhi,
        gini,
        top3_share,
        top5_share,
        level,
    }
}

/// Gini coefficient via the rank-sum formula on ascending-sorted values:
/// `G = (2 Σ i·x_i) / (n Σ x) − (n + 1)/n`, i 1-indexed.
fn gini_coefficient(values: &[f64]) -> f64 {
    let n = values.len();
    let total: f64 = values.iter().sum();
    if n == 0 || total <= 0.0 {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let rank_sum: f64 = sorted
        .iter()
        .enumerate()
        .map(|(i, &x)| (i + 1) as f64 * x)
        .sum();

    (2.0 * rank_sum) / (n as f64 * total) - (n as f64 + 1.0) / n as f64
}
