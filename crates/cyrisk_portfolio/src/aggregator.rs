//! Portfolio aggregation of independently simulated scenarios.
//!
//! Each scenario is simulated on its own seed stream derived from the
//! configured base seed; the portfolio loss vector is the element-wise sum
//! under the independence assumption. Marginal contributions re-simulate
//! the portfolio without each scenario on a distinct seed stream — an
//! O(K²) amount of simulation work, deliberately kept for simplicity and
//! explainability over a single-pass allocation scheme.

use cyrisk_core::math::round_currency;
use cyrisk_core::types::{LossVector, ScenarioSpec};
use cyrisk_sim::config::SimulationConfig;
use cyrisk_sim::lec::{LossExceedanceCurve, MAX_LEC_POINTS};
use cyrisk_sim::metrics::{compute_metrics, RiskMetrics};
use cyrisk_sim::rng::{scenario_seed, SimRng, MARGINAL_SEED_OFFSET};
use cyrisk_sim::simulator::simulate_scenario;
use rayon::prelude::*;
use tracing::debug;

use crate::concentration::{concentration_from_ales, RiskConcentration};

/// Per-scenario contribution to the portfolio expected loss.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioContribution {
    /// Scenario name.
    pub name: String,
    /// ALE of the scenario simulated on its own.
    pub standalone_ale: f64,
    /// Portfolio ALE minus the ALE of the portfolio excluding this
    /// scenario (re-simulated on a distinct seed stream).
    pub marginal_contribution: f64,
    /// Marginal contribution as a percentage of portfolio ALE.
    pub contribution_pct: f64,
    /// Standalone ALE minus marginal contribution.
    pub diversification_benefit: f64,
}

/// Aggregated portfolio risk snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortfolioMetrics {
    /// Portfolio mean annual loss.
    pub total_ale: f64,
    /// Distributional metrics of the portfolio loss vector.
    pub metrics: RiskMetrics,
    /// Portfolio ALE divided by the sum of standalone ALEs; 1.0 for a
    /// zero-ALE or single-scenario portfolio. Values below 1 indicate a
    /// diversification benefit.
    pub diversification_ratio: f64,
    /// Per-scenario contributions, in input order.
    pub contributions: Vec<ScenarioContribution>,
    /// Concentration measures over standalone ALEs.
    pub concentration: RiskConcentration,
    /// Portfolio loss exceedance curve, downsampled for presentation.
    pub exceedance_curve: LossExceedanceCurve,
}

impl PortfolioMetrics {
    /// The zeroed snapshot returned for an empty scenario list.
    fn zero() -> Self {
        Self {
            metrics: RiskMetrics::zero(),
            diversification_ratio: 1.0,
            ..Self::default()
        }
    }
}

/// Simulates every scenario on its own derived seed stream and returns the
/// per-scenario loss vectors, in input order.
fn simulate_scenarios(
    scenarios: &[ScenarioSpec],
    config: &SimulationConfig,
    base_seed: u64,
) -> Vec<LossVector> {
    scenarios
        .par_iter()
        .enumerate()
        .map(|(i, scenario)| {
            let mut rng = SimRng::from_seed(scenario_seed(base_seed, i));
            simulate_scenario(&scenario.params, config.iterations(), &mut rng)
        })
        .collect()
}

/// Simulates the portfolio loss vector (element-wise scenario sum) for the
/// configured base seed. Shared with the stress tester so base and stressed
/// runs are paired on identical seed streams.
pub(crate) fn simulate_portfolio_vector(
    scenarios: &[ScenarioSpec],
    config: &SimulationConfig,
) -> LossVector {
    let vectors = simulate_scenarios(scenarios, config, config.seed());
    LossVector::sum_elementwise(&vectors)
}

/// Runs the full portfolio analysis.
///
/// Simulates all scenarios, aggregates them into a portfolio loss vector,
/// and derives metrics, diversification ratio, marginal contributions,
/// concentration measures, and the loss exceedance curve. An optional loss
/// `threshold` feeds the probability-above-threshold metric.
///
/// An empty scenario list yields a zeroed snapshot (diversification ratio
/// 1.0); invalid scenarios participate as zero-loss streams.
///
/// # Examples
///
/// ```rust
/// use cyrisk_core::types::{RiskParameters, ScenarioSpec};
/// use cyrisk_portfolio::aggregator::analyze_portfolio;
/// use cyrisk_sim::config::SimulationConfig;
///
/// let scenarios = vec![
///     ScenarioSpec::new("DDoS", RiskParameters::new(0.3, 5_000.0, 40_000.0)),
/// ];
/// let config = SimulationConfig::builder().iterations(5_000).build().unwrap();
///
/// let portfolio = analyze_portfolio(&scenarios, &config, None);
/// assert_eq!(portfolio.diversification_ratio, 1.0);
/// ```
pub fn analyze_portfolio(
    scenarios: &[ScenarioSpec],
    config: &SimulationConfig,
    threshold: Option<f64>,
) -> PortfolioMetrics {
    if scenarios.is_empty() {
        return PortfolioMetrics::zero();
    }

    debug!(
        scenario_count = scenarios.len(),
        iterations = config.iterations(),
        seed = config.seed(),
        "analyzing portfolio"
    );

    let vectors = simulate_scenarios(scenarios, config, config.seed());
    let portfolio = LossVector::sum_elementwise(&vectors);

    let portfolio_ale = portfolio.mean();
    let standalone_ales: Vec<f64> = vectors.iter().map(LossVector::mean).collect();
    let standalone_total: f64 = standalone_ales.iter().sum();

    let diversification_ratio = if standalone_total > 0.0 {
        portfolio_ale / standalone_total
    } else {
        1.0
    };

    let contributions =
        marginal_contributions(scenarios, config, portfolio_ale, &standalone_ales);

    PortfolioMetrics {
        total_ale: round_currency(portfolio_ale),
        metrics: compute_metrics(&portfolio, threshold),
        diversification_ratio,
        contributions,
        concentration: concentration_from_ales(&standalone_ales),
        exceedance_curve: LossExceedanceCurve::from_losses(&portfolio).downsample(MAX_LEC_POINTS),
    }
}

/// Computes per-scenario marginal contributions by re-simulating the
/// portfolio without each scenario.
///
/// Exclusion runs use a seed stream offset from the base seed so their
/// sampling noise is independent of the full-portfolio run.
fn marginal_contributions(
    scenarios: &[ScenarioSpec],
    config: &SimulationConfig,
    portfolio_ale: f64,
    standalone_ales: &[f64],
) -> Vec<ScenarioContribution> {
    let marginal_base = config.seed().wrapping_add(MARGINAL_SEED_OFFSET);

    scenarios
        .par_iter()
        .enumerate()
        .map(|(k, scenario)| {
            let excluded: Vec<ScenarioSpec> = scenarios
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != k)
                .map(|(_, s)| s.clone())
                .collect();

            let excl_vectors = simulate_scenarios(&excluded, config, marginal_base);
            let excl_ale = LossVector::sum_elementwise(&excl_vectors).mean();
            let marginal = portfolio_ale - excl_ale;

            let contribution_pct = if portfolio_ale > 0.0 {
                marginal / portfolio_ale * 100.0
            } else {
                0.0
            };

            ScenarioContribution {
                name: scenario.name.clone(),
                standalone_ale: round_currency(standalone_ales[k]),
                marginal_contribution: round_currency(marginal),
                contribution_pct,
                diversification_benefit: round_currency(standalone_ales[k] - marginal),
            }
        })
        .collect()
}
