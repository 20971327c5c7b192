//! Treatment-option comparison.
//!
//! Ranks alternative risk treatments (different controls against the same
//! current risk) by ROI. Every option is evaluated against the same
//! simulated current ALE, and each residual risk is simulated on the same
//! seed, so the ranking compares treatments rather than sampling noise.

use cyrisk_core::types::RiskParameters;
use cyrisk_sim::config::SimulationConfig;
use cyrisk_sim::simulator::simulate_scenario_seeded;
use tracing::debug;

use crate::roi::{control_roi_from_ales, ControlCost, ControlRoi, RoiConfig};

/// One candidate treatment: a control and the residual risk it leaves.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreatmentOption {
    /// Treatment name.
    pub name: String,
    /// Cost structure of the control.
    pub cost: ControlCost,
    /// Risk remaining after the control is applied.
    pub residual: RiskParameters,
}

impl TreatmentOption {
    /// Creates a treatment option.
    pub fn new(name: impl Into<String>, cost: ControlCost, residual: RiskParameters) -> Self {
        Self {
            name: name.into(),
            cost,
            residual,
        }
    }
}

/// A ranked treatment with its full economic evaluation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreatmentComparison {
    /// Treatment name.
    pub name: String,
    /// Economic evaluation of the treatment.
    pub roi: ControlRoi,
    /// 1-based rank, best ROI first.
    pub rank: usize,
}

/// Evaluates and ranks treatment options against a shared current risk.
///
/// Options are returned sorted by descending `roi_pct` with 1-based ranks.
/// An empty option list yields an empty comparison.
///
/// # Examples
///
/// ```rust
/// use cyrisk_core::types::RiskParameters;
/// use cyrisk_roi::roi::{ControlCost, RoiConfig};
/// use cyrisk_roi::treatment::{compare_treatment_options, TreatmentOption};
/// use cyrisk_sim::config::SimulationConfig;
///
/// let current = RiskParameters::new(0.30, 50_000.0, 500_000.0);
/// let options = vec![
///     TreatmentOption::new(
///         "MFA rollout",
///         ControlCost::new(5_000.0, 15_000.0),
///         RiskParameters::new(0.05, 20_000.0, 200_000.0),
///     ),
///     TreatmentOption::new(
///         "Do nothing better",
///         ControlCost::new(50_000.0, 0.0),
///         RiskParameters::new(0.29, 50_000.0, 500_000.0),
///     ),
/// ];
/// let sim = SimulationConfig::builder().iterations(10_000).build().unwrap();
///
/// let ranked = compare_treatment_options(&current, &options, &RoiConfig::default(), &sim);
/// assert_eq!(ranked[0].name, "MFA rollout");
/// assert_eq!(ranked[0].rank, 1);
/// ```
pub fn compare_treatment_options(
    current_risk: &RiskParameters,
    options: &[TreatmentOption],
    config: &RoiConfig,
    sim_config: &SimulationConfig,
) -> Vec<TreatmentComparison> {
    debug!(option_count = options.len(), "comparing treatment options");

    let current_ale = simulate_scenario_seeded(current_risk, sim_config).mean();

    let mut compared: Vec<TreatmentComparison> = options
        .iter()
        .map(|option| {
            let residual_ale = simulate_scenario_seeded(&option.residual, sim_config).mean();
            TreatmentComparison {
                name: option.name.clone(),
                roi: control_roi_from_ales(&option.cost, current_ale, residual_ale, config),
                rank: 0,
            }
        })
        .collect();

    compared.sort_by(|a, b| {
        b.roi
            .roi_pct
            .partial_cmp(&a.roi.roi_pct)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    for (i, comparison) in compared.iter_mut().enumerate() {
        comparison.rank = i + 1;
    }
    compared
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim_config() -> SimulationConfig {
        SimulationConfig::builder()
            .iterations(20_000)
            .seed(42)
            .build()
            .unwrap()
    }

    fn current() -> RiskParameters {
        RiskParameters::new(0.30, 50_000.0, 500_000.0)
    }

    #[test]
    fn test_ranked_by_descending_roi() {
        let options = vec![
            TreatmentOption::new(
                "Expensive, weak",
                ControlCost::new(100_000.0, 50_000.0),
                RiskParameters::new(0.25, 50_000.0, 500_000.0),
            ),
            TreatmentOption::new(
                "Cheap, strong",
                ControlCost::new(5_000.0, 10_000.0),
                RiskParameters::new(0.05, 10_000.0, 100_000.0),
            ),
        ];
        let ranked =
            compare_treatment_options(&current(), &options, &RoiConfig::default(), &sim_config());

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].name, "Cheap, strong");
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[1].rank, 2);
        assert!(ranked[0].roi.roi_pct >= ranked[1].roi.roi_pct);
    }

    #[test]
    fn test_empty_options() {
        let ranked =
            compare_treatment_options(&current(), &[], &RoiConfig::default(), &sim_config());
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_shared_current_ale() {
        // Two identical options must evaluate identically.
        let option = TreatmentOption::new(
            "Same",
            ControlCost::new(5_000.0, 10_000.0),
            RiskParameters::new(0.05, 10_000.0, 100_000.0),
        );
        let ranked = compare_treatment_options(
            &current(),
            &[option.clone(), option],
            &RoiConfig::default(),
            &sim_config(),
        );
        assert_eq!(ranked[0].roi, ranked[1].roi);
    }

    #[test]
    fn test_invalid_residual_degrades() {
        // A malformed residual simulates to zero losses, which reads as a
        // perfect control; the comparison still completes.
        let options = vec![TreatmentOption::new(
            "Broken residual",
            ControlCost::new(1_000.0, 0.0),
            RiskParameters::new(0.5, -1.0, 100.0),
        )];
        let ranked =
            compare_treatment_options(&current(), &options, &RoiConfig::default(), &sim_config());
        assert_eq!(ranked.len(), 1);
        assert!(ranked[0].roi.risk_reduction > 0.0);
    }
}
