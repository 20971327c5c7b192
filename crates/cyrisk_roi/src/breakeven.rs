//! Breakeven analysis: how much risk a control must remove to pay for
//! itself.
//!
//! The breakeven point is where the net annual benefit is zero, i.e. the
//! annual risk reduction equals the total annualized cost. That reduction
//! is also expressed as a share of the current ALE and as an equivalent
//! probability reduction under linear ALE scaling.

use cyrisk_core::math::round_currency;
use cyrisk_core::types::RiskParameters;
use cyrisk_sim::config::SimulationConfig;
use cyrisk_sim::simulator::simulate_scenario_seeded;

use crate::roi::{ControlCost, RoiConfig};

/// Breakeven thresholds for one control against one risk.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakevenAnalysis {
    /// Simulated current ALE of the risk.
    pub current_ale: f64,
    /// Annual risk reduction required for zero net benefit
    /// (annual cost + implementation cost annualized over the horizon).
    pub required_risk_reduction: f64,
    /// Required reduction as a percentage of the current ALE
    /// (0.0 for a zero ALE).
    pub required_reduction_pct: f64,
    /// Probability reduction achieving the required ALE reduction,
    /// assuming ALE scales linearly with occurrence probability.
    pub equivalent_probability_reduction: f64,
    /// Whether the required reduction fits within the current ALE.
    pub viable: bool,
}

/// Computes the breakeven thresholds for a control.
///
/// The current risk is simulated once with the given configuration; an
/// invalid risk degrades to a zero ALE, which makes any costed control
/// non-viable.
///
/// # Examples
///
/// ```rust
/// use cyrisk_core::types::RiskParameters;
/// use cyrisk_roi::breakeven::calculate_breakeven;
/// use cyrisk_roi::roi::{ControlCost, RoiConfig};
/// use cyrisk_sim::config::SimulationConfig;
///
/// let risk = RiskParameters::new(0.30, 50_000.0, 500_000.0);
/// let sim = SimulationConfig::builder().iterations(10_000).build().unwrap();
///
/// let analysis = calculate_breakeven(
///     &ControlCost::new(5_000.0, 10_000.0),
///     &risk,
///     &RoiConfig::default(),
///     &sim,
/// );
/// assert!(analysis.viable);
/// assert!(analysis.required_risk_reduction > 0.0);
/// ```
pub fn calculate_breakeven(
    cost: &ControlCost,
    current_risk: &RiskParameters,
    config: &RoiConfig,
    sim_config: &SimulationConfig,
) -> BreakevenAnalysis {
    let current_ale = simulate_scenario_seeded(current_risk, sim_config).mean();

    let horizon = config.horizon_years.max(1) as f64;
    let required = cost.annual_cost + cost.implementation_cost / horizon;

    let (required_pct, probability_reduction) = if current_ale > 0.0 {
        let share = required / current_ale;
        (
            share * 100.0,
            current_risk.effective_probability() * share,
        )
    } else {
        (0.0, 0.0)
    };

    BreakevenAnalysis {
        current_ale: round_currency(current_ale),
        required_risk_reduction: round_currency(required),
        required_reduction_pct: required_pct,
        equivalent_probability_reduction: probability_reduction,
        viable: required <= current_ale,
    }
}
