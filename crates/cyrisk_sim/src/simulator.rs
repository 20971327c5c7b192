//! Scenario loss simulator.
//!
//! One simulated iteration represents one year: a Bernoulli draw decides
//! whether the scenario occurs, and if it does, severity is drawn from the
//! lognormal distribution calibrated from the elicited confidence interval.
//!
//! # Degradation
//!
//! Invalid parameters and zero probability produce an all-zero
//! [`LossVector`] of the requested length, never an error; a bad scenario
//! must not abort a batch analysis.

use cyrisk_core::math::lognormal::LognormalParams;
use cyrisk_core::types::{LossVector, RiskParameters};

use crate::config::SimulationConfig;
use crate::rng::SimRng;

/// Simulates `iterations` annual losses for one scenario.
///
/// Sampling is batched: the uniforms for the occurrence draws and the
/// standard normals for the severity draws are each filled in one pass
/// before losses are assembled, keeping the hot loop allocation-free.
/// Normal variates are consumed for every iteration regardless of
/// occurrence so that the stream layout, and with it reproducibility, does
/// not depend on the occurrence pattern.
///
/// # Guarantees
///
/// - Losses are non-negative.
/// - For a fixed seed and iteration count the output is bit-reproducible.
/// - In the long run a `probability`-fraction of iterations is non-zero
///   (law of large numbers, not a hard constraint for finite N).
///
/// # Examples
///
/// ```rust
/// use cyrisk_core::types::RiskParameters;
/// use cyrisk_sim::rng::SimRng;
/// use cyrisk_sim::simulator::simulate_scenario;
///
/// let params = RiskParameters::new(0.10, 10_000.0, 100_000.0);
/// let mut rng = SimRng::from_seed(42);
/// let losses = simulate_scenario(&params, 10_000, &mut rng);
///
/// assert_eq!(losses.len(), 10_000);
/// assert!(losses.as_slice().iter().all(|&x| x >= 0.0));
/// ```
pub fn simulate_scenario(
    params: &RiskParameters,
    iterations: usize,
    rng: &mut SimRng,
) -> LossVector {
    let probability = params.effective_probability();
    if !params.is_valid() || probability <= 0.0 {
        return LossVector::zeros(iterations);
    }

    let Some(severity) =
        LognormalParams::from_confidence_interval(params.lower_bound, params.upper_bound)
    else {
        return LossVector::zeros(iterations);
    };

    let mut uniforms = vec![0.0; iterations];
    let mut normals = vec![0.0; iterations];
    rng.fill_uniform(&mut uniforms);
    rng.fill_normal(&mut normals);

    let losses = uniforms
        .iter()
        .zip(normals.iter())
        .map(|(&u, &z)| {
            if u < probability {
                (severity.mu + severity.sigma * z).exp()
            } else {
                0.0
            }
        })
        .collect();

    LossVector::from_vec(losses)
}

/// Convenience wrapper: simulates one scenario using the configuration's
/// iteration count and base seed directly.
///
/// Multi-scenario analyses should instead derive per-scenario seeds via
/// [`SimRng::for_scenario`](crate::rng::SimRng::for_scenario) so that
/// scenario streams stay independent.
pub fn simulate_scenario_seeded(
    params: &RiskParameters,
    config: &SimulationConfig,
) -> LossVector {
    let mut rng = SimRng::from_seed(config.seed());
    simulate_scenario(params, config.iterations(), &mut rng)
}
