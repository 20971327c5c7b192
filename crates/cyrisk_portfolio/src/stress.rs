//! Stress testing via scenario re-parameterisation.
//!
//! A stress scenario perturbs the elicited parameters — a probability
//! multiplier (capped at 1.0) and an impact multiplier scaling both
//! severity bounds — optionally restricted to a named subset of scenarios.
//! Base and stressed portfolios are simulated on identical seed streams so
//! the reported deltas are paired rather than confounded by sampling noise.

use cyrisk_core::math::round_currency;
use cyrisk_core::types::ScenarioSpec;
use cyrisk_sim::config::SimulationConfig;
use cyrisk_sim::metrics::compute_metrics;
use tracing::debug;

use crate::aggregator::simulate_portfolio_vector;

/// A named stress perturbation over the scenario set.
///
/// # Examples
///
/// ```rust
/// use cyrisk_portfolio::stress::StressScenario;
///
/// // Double likelihoods, +50% impact, for the ransomware scenario only.
/// let stress = StressScenario::new("Ransomware surge", 2.0, 1.5)
///     .with_affected(vec!["Ransomware".to_string()]);
/// assert!(stress.applies_to("Ransomware"));
/// assert!(!stress.applies_to("Insider"));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StressScenario {
    /// Stress scenario name.
    pub name: String,
    /// Factor applied to occurrence probabilities (result capped at 1.0).
    pub probability_multiplier: f64,
    /// Factor applied to both severity bounds.
    pub impact_multiplier: f64,
    /// Names of affected scenarios; `None` affects all.
    pub affected: Option<Vec<String>>,
}

impl StressScenario {
    /// Creates a stress affecting every scenario.
    pub fn new(name: impl Into<String>, probability_multiplier: f64, impact_multiplier: f64) -> Self {
        Self {
            name: name.into(),
            probability_multiplier,
            impact_multiplier,
            affected: None,
        }
    }

    /// Restricts the stress to the named scenarios.
    pub fn with_affected(mut self, affected: Vec<String>) -> Self {
        self.affected = Some(affected);
        self
    }

    /// Whether this stress applies to the named scenario.
    pub fn applies_to(&self, scenario_name: &str) -> bool {
        match &self.affected {
            None => true,
            Some(names) => names.iter().any(|n| n == scenario_name),
        }
    }

    /// Applies the perturbation, producing the stressed scenario set.
    ///
    /// Non-finite or negative multipliers are replaced with 1.0, so a
    /// malformed stress definition degrades to a zero-delta result instead
    /// of poisoning the batch.
    pub fn apply(&self, scenarios: &[ScenarioSpec]) -> Vec<ScenarioSpec> {
        let p_mult = sanitize_multiplier(self.probability_multiplier);
        let i_mult = sanitize_multiplier(self.impact_multiplier);

        scenarios
            .iter()
            .map(|scenario| {
                if self.applies_to(&scenario.name) {
                    ScenarioSpec {
                        name: scenario.name.clone(),
                        params: scenario
                            .params
                            .with_probability_scaled(p_mult)
                            .with_impact_scaled(i_mult),
                    }
                } else {
                    scenario.clone()
                }
            })
            .collect()
    }
}

fn sanitize_multiplier(m: f64) -> f64 {
    if m.is_finite() && m >= 0.0 {
        m
    } else {
        1.0
    }
}

/// Sensitivity of the portfolio to one stress scenario.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StressTestResult {
    /// Stress scenario name.
    pub name: String,
    /// Base portfolio ALE.
    pub base_ale: f64,
    /// Portfolio ALE under stress.
    pub stressed_ale: f64,
    /// Absolute ALE change.
    pub ale_delta: f64,
    /// ALE change as a percentage of the base (0.0 for a zero base).
    pub ale_delta_pct: f64,
    /// Base portfolio VaR-99.
    pub base_var_99: f64,
    /// Portfolio VaR-99 under stress.
    pub stressed_var_99: f64,
    /// Absolute VaR-99 change.
    pub var_99_delta: f64,
    /// VaR-99 change as a percentage of the base (0.0 for a zero base).
    pub var_99_delta_pct: f64,
}

/// Evaluates each stress definition independently against the same base
/// portfolio.
///
/// The base is simulated once; every stress re-simulates the stressed set
/// on the same seed streams. One malformed stress cannot abort the others:
/// it simply reports a degenerate (zero-delta or zero-risk) result.
///
/// # Examples
///
/// ```rust
/// use cyrisk_core::types::{RiskParameters, ScenarioSpec};
/// use cyrisk_portfolio::stress::{run_stress_tests, StressScenario};
/// use cyrisk_sim::config::SimulationConfig;
///
/// let scenarios = vec![
///     ScenarioSpec::new("Phishing", RiskParameters::new(0.3, 5_000.0, 50_000.0)),
/// ];
/// let stresses = vec![StressScenario::new("Impact +50%", 1.0, 1.5)];
/// let config = SimulationConfig::builder().iterations(5_000).build().unwrap();
///
/// let results = run_stress_tests(&scenarios, &stresses, &config);
/// assert_eq!(results.len(), 1);
/// assert!(results[0].ale_delta > 0.0);
/// ```
pub fn run_stress_tests(
    scenarios: &[ScenarioSpec],
    stresses: &[StressScenario],
    config: &SimulationConfig,
) -> Vec<StressTestResult> {
    debug!(
        scenario_count = scenarios.len(),
        stress_count = stresses.len(),
        "running stress tests"
    );

    let base_vector = simulate_portfolio_vector(scenarios, config);
    let base_metrics = compute_metrics(&base_vector, None);
    let base_ale = base_metrics.mean;
    let base_var_99 = base_metrics.var_99;

    stresses
        .iter()
        .map(|stress| {
            let stressed_set = stress.apply(scenarios);
            let stressed_vector = simulate_portfolio_vector(&stressed_set, config);
            let stressed_metrics = compute_metrics(&stressed_vector, None);

            let ale_delta = stressed_metrics.mean - base_ale;
            let var_99_delta = stressed_metrics.var_99 - base_var_99;

            StressTestResult {
                name: stress.name.clone(),
                base_ale,
                stressed_ale: stressed_metrics.mean,
                ale_delta: round_currency(ale_delta),
                ale_delta_pct: pct_of(ale_delta, base_ale),
                base_var_99,
                stressed_var_99: stressed_metrics.var_99,
                var_99_delta: round_currency(var_99_delta),
                var_99_delta_pct: pct_of(var_99_delta, base_var_99),
            }
        })
        .collect()
}

fn pct_of(delta: f64, base: f64) -> f64 {
    if base > 0.0 {
        delta / base * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cyrisk_core::types::RiskParameters;

    fn scenarios() -> Vec<ScenarioSpec> {
        vec![
            ScenarioSpec::new("Ransomware", RiskParameters::new(0.2, 50_000.0, 200_000.0)),
            ScenarioSpec::new("Insider", RiskParameters::new(0.05, 20_000.0, 80_000.0)),
        ]
    }

    fn config() -> SimulationConfig {
        SimulationConfig::builder()
            .iterations(20_000)
            .seed(42)
            .build()
            .unwrap()
    }

    #[test]
    fn test_identity_stress_zero_delta() {
        let stresses = vec![StressScenario::new("No-op", 1.0, 1.0)];
        let results = run_stress_tests(&scenarios(), &stresses, &config());
        assert_eq!(results.len(), 1);
        // Same seeds, same parameters: the runs are identical.
        assert_eq!(results[0].ale_delta, 0.0);
        assert_eq!(results[0].var_99_delta, 0.0);
    }

    #[test]
    fn test_impact_stress_scales_ale_linearly() {
        // Severity scales linearly with the impact multiplier, so the
        // paired-seed ALE delta is exactly +50%.
        let stresses = vec![StressScenario::new("Impact +50%", 1.0, 1.5)];
        let results = run_stress_tests(&scenarios(), &stresses, &config());
        assert_relative_eq!(results[0].ale_delta_pct, 50.0, epsilon = 0.1);
    }

    #[test]
    fn test_probability_stress_increases_ale() {
        let stresses = vec![StressScenario::new("Likelihood x2", 2.0, 1.0)];
        let results = run_stress_tests(&scenarios(), &stresses, &config());
        assert!(results[0].ale_delta > 0.0);
        assert!(results[0].stressed_ale > results[0].base_ale);
    }

    #[test]
    fn test_probability_capped_at_one() {
        let scenarios = vec![ScenarioSpec::new(
            "Certain",
            RiskParameters::new(0.9, 1_000.0, 2_000.0),
        )];
        let stresses = vec![StressScenario::new("Likelihood x10", 10.0, 1.0)];
        let results = run_stress_tests(&scenarios, &stresses, &config());
        // Capped at p = 1.0: stressed ALE is bounded by the severity mean.
        assert!(results[0].stressed_ale < 2_500.0);
    }

    #[test]
    fn test_affected_subset_only() {
        let stresses = vec![
            StressScenario::new("Ransomware only", 1.0, 2.0)
                .with_affected(vec!["Ransomware".to_string()]),
        ];
        let subset = run_stress_tests(&scenarios(), &stresses, &config());

        let all = vec![StressScenario::new("All", 1.0, 2.0)];
        let full = run_stress_tests(&scenarios(), &all, &config());

        assert!(subset[0].ale_delta > 0.0);
        assert!(subset[0].ale_delta < full[0].ale_delta);
    }

    #[test]
    fn test_malformed_stress_does_not_abort_batch() {
        let stresses = vec![
            StressScenario::new("Broken", f64::NAN, -3.0),
            StressScenario::new("Valid", 1.0, 1.5),
        ];
        let results = run_stress_tests(&scenarios(), &stresses, &config());
        assert_eq!(results.len(), 2);
        // Malformed multipliers degrade to the identity perturbation.
        assert_eq!(results[0].ale_delta, 0.0);
        assert!(results[1].ale_delta > 0.0);
    }

    #[test]
    fn test_empty_portfolio_zero_base() {
        let stresses = vec![StressScenario::new("Any", 2.0, 2.0)];
        let results = run_stress_tests(&[], &stresses, &config());
        assert_eq!(results[0].base_ale, 0.0);
        assert_eq!(results[0].ale_delta_pct, 0.0);
    }

    #[test]
    fn test_stresses_evaluated_against_same_base() {
        let stresses = vec![
            StressScenario::new("A", 1.0, 1.2),
            StressScenario::new("B", 1.5, 1.0),
        ];
        let results = run_stress_tests(&scenarios(), &stresses, &config());
        assert_eq!(results[0].base_ale, results[1].base_ale);
        assert_eq!(results[0].base_var_99, results[1].base_var_99);
    }
}
