//! Budget-constrained control selection.
//!
//! Greedy heuristic: candidates are evaluated individually, sorted by
//! descending ROI%, and accepted while their first-year cost fits the
//! remaining budget. This is deterministic and explainable, not an exact
//! knapsack solve.

use cyrisk_core::math::round_currency;
use cyrisk_core::types::RiskParameters;
use cyrisk_sim::config::SimulationConfig;
use tracing::debug;

use crate::roi::{calculate_control_roi, ControlCost, ControlRoi, RoiConfig};

/// A candidate control: the risk it addresses and the residual it leaves.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlCandidate {
    /// Control name.
    pub name: String,
    /// Cost structure.
    pub cost: ControlCost,
    /// Risk before the control.
    pub current_risk: RiskParameters,
    /// Risk after the control.
    pub residual_risk: RiskParameters,
}

impl ControlCandidate {
    /// Creates a candidate control.
    pub fn new(
        name: impl Into<String>,
        cost: ControlCost,
        current_risk: RiskParameters,
        residual_risk: RiskParameters,
    ) -> Self {
        Self {
            name: name.into(),
            cost,
            current_risk,
            residual_risk,
        }
    }
}

/// A control accepted by the optimizer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectedControl {
    /// Control name.
    pub name: String,
    /// Cash outlay counted against the budget (annual + implementation).
    pub first_year_cost: f64,
    /// Economic evaluation of the control.
    pub roi: ControlRoi,
}

/// Result of a budget-constrained selection run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimalControlSet {
    /// Budget the selection ran against.
    pub budget: f64,
    /// Accepted controls in acceptance (descending ROI) order.
    pub selected: Vec<SelectedControl>,
    /// Total first-year cost of the accepted controls.
    pub total_cost: f64,
    /// Total annual risk reduction of the accepted controls.
    pub total_risk_reduction: f64,
    /// Budget left after the accepted controls.
    pub remaining_budget: f64,
}

/// Selects controls greedily by ROI% under a first-year budget.
///
/// Each candidate is evaluated with [`calculate_control_roi`] (paired
/// seeds), then candidates are taken in descending ROI% order while their
/// first-year cost fits the remaining budget. Candidates that do not fit
/// are skipped, not truncated; a non-positive budget selects nothing.
///
/// # Examples
///
/// ```rust
/// use cyrisk_core::types::RiskParameters;
/// use cyrisk_roi::optimizer::{optimize_control_selection, ControlCandidate};
/// use cyrisk_roi::roi::{ControlCost, RoiConfig};
/// use cyrisk_sim::config::SimulationConfig;
///
/// let candidates = vec![ControlCandidate::new(
///     "MFA",
///     ControlCost::new(5_000.0, 10_000.0),
///     RiskParameters::new(0.30, 50_000.0, 500_000.0),
///     RiskParameters::new(0.05, 20_000.0, 200_000.0),
/// )];
/// let sim = SimulationConfig::builder().iterations(10_000).build().unwrap();
///
/// let set = optimize_control_selection(
///     20_000.0,
///     &candidates,
///     &RoiConfig::default(),
///     &sim,
/// );
/// assert_eq!(set.selected.len(), 1);
/// assert!(set.total_cost <= set.budget);
/// ```
pub fn optimize_control_selection(
    budget: f64,
    candidates: &[ControlCandidate],
    config: &RoiConfig,
    sim_config: &SimulationConfig,
) -> OptimalControlSet {
    debug!(
        budget,
        candidate_count = candidates.len(),
        "optimizing control selection"
    );

    let mut evaluated: Vec<SelectedControl> = candidates
        .iter()
        .map(|candidate| SelectedControl {
            name: candidate.name.clone(),
            first_year_cost: candidate.cost.first_year_cost(),
            roi: calculate_control_roi(
                &candidate.cost,
                &candidate.current_risk,
                &candidate.residual_risk,
                config,
                sim_config,
            ),
        })
        .collect();

    evaluated.sort_by(|a, b| {
        b.roi
            .roi_pct
            .partial_cmp(&a.roi.roi_pct)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let budget = if budget.is_finite() && budget > 0.0 {
        budget
    } else {
        0.0
    };
    let mut remaining = budget;
    let mut selected = Vec::new();
    let mut total_cost = 0.0;
    let mut total_risk_reduction = 0.0;

    for control in evaluated {
        if control.first_year_cost <= remaining {
            remaining -= control.first_year_cost;
            total_cost += control.first_year_cost;
            total_risk_reduction += control.roi.risk_reduction;
            selected.push(control);
        }
    }

    OptimalControlSet {
        budget,
        selected,
        total_cost: round_currency(total_cost),
        total_risk_reduction: round_currency(total_risk_reduction),
        remaining_budget: round_currency(remaining),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim_config() -> SimulationConfig {
        SimulationConfig::builder()
            .iterations(10_000)
            .seed(42)
            .build()
            .unwrap()
    }

    fn candidates() -> Vec<ControlCandidate> {
        vec![
            ControlCandidate::new(
                "MFA",
                ControlCost::new(5_000.0, 10_000.0),
                RiskParameters::new(0.30, 50_000.0, 500_000.0),
                RiskParameters::new(0.05, 20_000.0, 200_000.0),
            ),
            ControlCandidate::new(
                "EDR",
                ControlCost::new(40_000.0, 20_000.0),
                RiskParameters::new(0.20, 100_000.0, 800_000.0),
                RiskParameters::new(0.10, 50_000.0, 400_000.0),
            ),
            ControlCandidate::new(
                "Gold-plated SIEM",
                ControlCost::new(500_000.0, 300_000.0),
                RiskParameters::new(0.10, 10_000.0, 50_000.0),
                RiskParameters::new(0.05, 10_000.0, 50_000.0),
            ),
        ]
    }

    #[test]
    fn test_never_exceeds_budget() {
        for &budget in &[0.0, 10_000.0, 60_000.0, 100_000.0, 1_000_000.0] {
            let set =
                optimize_control_selection(budget, &candidates(), &RoiConfig::default(), &sim_config());
            assert!(
                set.total_cost <= budget + 0.01,
                "budget {budget}: total {}",
                set.total_cost
            );
            assert!(set.remaining_budget >= -0.01);
        }
    }

    #[test]
    fn test_zero_budget_selects_nothing() {
        let set = optimize_control_selection(0.0, &candidates(), &RoiConfig::default(), &sim_config());
        assert!(set.selected.is_empty());
        assert_eq!(set.total_cost, 0.0);
        assert_eq!(set.total_risk_reduction, 0.0);
    }

    #[test]
    fn test_greedy_prefers_higher_roi() {
        // 20k fits only the MFA control (15k first-year).
        let set =
            optimize_control_selection(20_000.0, &candidates(), &RoiConfig::default(), &sim_config());
        assert_eq!(set.selected.len(), 1);
        assert_eq!(set.selected[0].name, "MFA");
    }

    #[test]
    fn test_skips_unaffordable_keeps_scanning() {
        // 75k: MFA (15k) and EDR (60k) both fit; the SIEM never does.
        let set =
            optimize_control_selection(75_000.0, &candidates(), &RoiConfig::default(), &sim_config());
        let names: Vec<&str> = set.selected.iter().map(|c| c.name.as_str()).collect();
        assert!(names.contains(&"MFA"));
        assert!(names.contains(&"EDR"));
        assert!(!names.contains(&"Gold-plated SIEM"));
    }

    #[test]
    fn test_selection_ordered_by_roi() {
        let set = optimize_control_selection(
            1_000_000.0,
            &candidates(),
            &RoiConfig::default(),
            &sim_config(),
        );
        for pair in set.selected.windows(2) {
            assert!(pair[0].roi.roi_pct >= pair[1].roi.roi_pct);
        }
    }

    #[test]
    fn test_non_finite_budget_treated_as_zero() {
        let set = optimize_control_selection(
            f64::NAN,
            &candidates(),
            &RoiConfig::default(),
            &sim_config(),
        );
        assert!(set.selected.is_empty());
        assert_eq!(set.budget, 0.0);
    }

    #[test]
    fn test_empty_candidates() {
        let set =
            optimize_control_selection(100_000.0, &[], &RoiConfig::default(), &sim_config());
        assert!(set.selected.is_empty());
        assert_eq!(set.remaining_budget, 100_000.0);
    }
}
