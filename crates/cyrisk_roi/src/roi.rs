//! Control ROI: risk reduction against cost.
//!
//! A control is economically characterised by its recurring annual cost and
//! a one-off implementation cost. Its benefit is the reduction in annual
//! loss expectancy between the current and residual risk, obtained through
//! the simulation pipeline with paired seeds so that the comparison is not
//! confounded by sampling noise.

use cyrisk_core::math::round_currency;
use cyrisk_core::ratings::RatingScale;
use cyrisk_core::types::{EngineError, RiskParameters};
use cyrisk_sim::config::SimulationConfig;
use cyrisk_sim::simulator::simulate_scenario_seeded;

/// Cost structure of a candidate control.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlCost {
    /// Recurring annual cost (licences, operations).
    pub annual_cost: f64,
    /// One-off implementation cost.
    pub implementation_cost: f64,
}

impl ControlCost {
    /// Creates a cost record.
    #[inline]
    pub fn new(annual_cost: f64, implementation_cost: f64) -> Self {
        Self {
            annual_cost,
            implementation_cost,
        }
    }

    /// Total cash outlay in the first year.
    #[inline]
    pub fn first_year_cost(&self) -> f64 {
        self.annual_cost + self.implementation_cost
    }
}

/// Discounting configuration for ROI and NPV.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoiConfig {
    /// Annual discount rate (e.g. 0.05 for 5%).
    pub discount_rate: f64,
    /// Evaluation horizon in years; implementation cost is annualized over
    /// this horizon.
    pub horizon_years: u32,
}

impl Default for RoiConfig {
    fn default() -> Self {
        Self {
            discount_rate: 0.05,
            horizon_years: 5,
        }
    }
}

impl RoiConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] for a non-finite
    /// discount rate, a rate at or below -100%, or a zero horizon.
    pub fn new(discount_rate: f64, horizon_years: u32) -> Result<Self, EngineError> {
        if !discount_rate.is_finite() || discount_rate <= -1.0 {
            return Err(EngineError::InvalidConfiguration {
                name: "discount_rate",
                value: discount_rate.to_string(),
            });
        }
        if horizon_years == 0 {
            return Err(EngineError::InvalidConfiguration {
                name: "horizon_years",
                value: "0".to_string(),
            });
        }
        Ok(Self {
            discount_rate,
            horizon_years,
        })
    }
}

/// Qualitative ROI rating band, ordered from worst to best.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoiRating {
    /// ROI at or below -25%.
    Poor,
    /// ROI in (-25%, 0%].
    Marginal,
    /// ROI in (0%, 50%].
    Acceptable,
    /// ROI in (50%, 100%].
    Good,
    /// ROI in (100%, 200%].
    VeryGood,
    /// ROI above 200%.
    Excellent,
}

/// ROI thresholds as an ordered threshold table.
fn roi_rating_scale() -> RatingScale<RoiRating> {
    RatingScale::new(
        vec![
            (200.0, RoiRating::Excellent),
            (100.0, RoiRating::VeryGood),
            (50.0, RoiRating::Good),
            (0.0, RoiRating::Acceptable),
            (-25.0, RoiRating::Marginal),
        ],
        RoiRating::Poor,
    )
}

/// Economic evaluation of one control.
///
/// Currency fields are rounded to 2 decimal places at this boundary;
/// `payback_years` is `f64::INFINITY` when the control never pays back.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlRoi {
    /// Recurring annual cost.
    pub annual_cost: f64,
    /// One-off implementation cost.
    pub implementation_cost: f64,
    /// Current ALE minus residual ALE.
    pub risk_reduction: f64,
    /// Risk reduction minus annual cost.
    pub net_annual_benefit: f64,
    /// Annual cost plus implementation cost annualized over the horizon.
    pub total_annualized_cost: f64,
    /// Net annual benefit over total annualized cost, in percent.
    /// 0.0 for a costless, benefit-free control; +inf for a costless
    /// control with positive benefit.
    pub roi_pct: f64,
    /// Years until cumulative net benefit covers the first-year outlay.
    pub payback_years: f64,
    /// Net present value over the horizon: discounted annual net benefits
    /// minus the upfront implementation cost.
    pub npv: f64,
    /// Qualitative rating band for `roi_pct`.
    pub rating: RoiRating,
}

/// Computes control economics from already-known ALE values.
///
/// This is the analytic core shared by the simulation-driven entry point,
/// the treatment ranker, the optimizer, and the sensitivity analysis
/// (which perturbs the ALE inputs directly).
pub fn control_roi_from_ales(
    cost: &ControlCost,
    current_ale: f64,
    residual_ale: f64,
    config: &RoiConfig,
) -> ControlRoi {
    let horizon = config.horizon_years.max(1) as f64;

    let risk_reduction = current_ale - residual_ale;
    let net_annual_benefit = risk_reduction - cost.annual_cost;
    let total_annualized_cost = cost.annual_cost + cost.implementation_cost / horizon;

    let roi_pct = if total_annualized_cost > 0.0 {
        net_annual_benefit / total_annualized_cost * 100.0
    } else if net_annual_benefit > 0.0 {
        f64::INFINITY
    } else {
        0.0
    };

    let payback_years = if net_annual_benefit > 0.0 {
        cost.first_year_cost() / net_annual_benefit
    } else {
        f64::INFINITY
    };

    let rate = config.discount_rate;
    let discounted_benefits: f64 = (1..=config.horizon_years.max(1))
        .map(|t| net_annual_benefit / (1.0 + rate).powi(t as i32))
        .sum();
    let npv = discounted_benefits - cost.implementation_cost;

    ControlRoi {
        annual_cost: cost.annual_cost,
        implementation_cost: cost.implementation_cost,
        risk_reduction: round_currency(risk_reduction),
        net_annual_benefit: round_currency(net_annual_benefit),
        total_annualized_cost: round_currency(total_annualized_cost),
        roi_pct,
        payback_years,
        npv: round_currency(npv),
        rating: roi_rating_scale().classify(roi_pct),
    }
}

/// Evaluates a control by simulating current and residual risk.
///
/// Both risks are simulated on the same seed (paired comparison), so the
/// reported risk reduction reflects the parameter change rather than
/// sampling noise. Malformed parameters degrade to a zero ALE on that side.
///
/// # Examples
///
/// ```rust
/// use cyrisk_core::types::RiskParameters;
/// use cyrisk_roi::roi::{calculate_control_roi, ControlCost, RoiConfig, RoiRating};
/// use cyrisk_sim::config::SimulationConfig;
///
/// let current = RiskParameters::new(0.30, 50_000.0, 500_000.0);
/// let residual = RiskParameters::new(0.05, 10_000.0, 100_000.0);
/// let sim = SimulationConfig::builder().iterations(10_000).build().unwrap();
///
/// let roi = calculate_control_roi(
///     &ControlCost::new(5_000.0, 10_000.0),
///     &current,
///     &residual,
///     &RoiConfig::default(),
///     &sim,
/// );
/// assert!(roi.roi_pct > 0.0);
/// ```
pub fn calculate_control_roi(
    cost: &ControlCost,
    current_risk: &RiskParameters,
    residual_risk: &RiskParameters,
    config: &RoiConfig,
    sim_config: &SimulationConfig,
) -> ControlRoi {
    let current_ale = simulate_scenario_seeded(current_risk, sim_config).mean();
    let residual_ale = simulate_scenario_seeded(residual_risk, sim_config).mean();
    control_roi_from_ales(cost, current_ale, residual_ale, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn config() -> RoiConfig {
        RoiConfig::default()
    }

    #[test]
    fn test_basic_roi_arithmetic() {
        // Reduction 100k, annual cost 20k, impl 50k over 5 years:
        // net benefit 80k, total cost 30k -> ROI 266.67%.
        let cost = ControlCost::new(20_000.0, 50_000.0);
        let roi = control_roi_from_ales(&cost, 150_000.0, 50_000.0, &config());

        assert_relative_eq!(roi.risk_reduction, 100_000.0);
        assert_relative_eq!(roi.net_annual_benefit, 80_000.0);
        assert_relative_eq!(roi.total_annualized_cost, 30_000.0);
        assert_relative_eq!(roi.roi_pct, 80_000.0 / 30_000.0 * 100.0, epsilon = 1e-9);
        assert_eq!(roi.rating, RoiRating::Excellent);
    }

    #[test]
    fn test_payback_period() {
        // First-year outlay 70k, net benefit 80k/yr -> payback 0.875 years.
        let cost = ControlCost::new(20_000.0, 50_000.0);
        let roi = control_roi_from_ales(&cost, 150_000.0, 50_000.0, &config());
        assert_relative_eq!(roi.payback_years, 0.875, epsilon = 1e-9);
    }

    #[test]
    fn test_negative_benefit_infinite_payback() {
        let cost = ControlCost::new(200_000.0, 0.0);
        let roi = control_roi_from_ales(&cost, 150_000.0, 50_000.0, &config());
        assert!(roi.net_annual_benefit < 0.0);
        assert!(roi.payback_years.is_infinite());
        assert!(roi.roi_pct < 0.0);
    }

    #[test]
    fn test_zero_annual_cost_positive_reduction() {
        // annual_cost = 0 with positive reduction: ROI > 0, finite payback.
        let cost = ControlCost::new(0.0, 50_000.0);
        let roi = control_roi_from_ales(&cost, 150_000.0, 50_000.0, &config());
        assert!(roi.roi_pct > 0.0);
        assert!(roi.payback_years.is_finite());
    }

    #[test]
    fn test_free_control_degrades_to_zero_roi() {
        let cost = ControlCost::new(0.0, 0.0);
        let no_benefit = control_roi_from_ales(&cost, 100.0, 100.0, &config());
        assert_eq!(no_benefit.roi_pct, 0.0);

        let with_benefit = control_roi_from_ales(&cost, 200.0, 100.0, &config());
        assert!(with_benefit.roi_pct.is_infinite());
        assert_eq!(with_benefit.payback_years, 0.0);
    }

    #[test]
    fn test_npv_discounting() {
        // Net benefit 80k/yr, 5 years at 5%, minus 50k upfront.
        let cost = ControlCost::new(20_000.0, 50_000.0);
        let roi = control_roi_from_ales(&cost, 150_000.0, 50_000.0, &config());

        let annuity: f64 = (1..=5)
            .map(|t| 80_000.0 / 1.05_f64.powi(t))
            .sum();
        assert_relative_eq!(roi.npv, round_currency(annuity - 50_000.0), epsilon = 0.01);
        assert!(roi.npv > 0.0);
    }

    #[test]
    fn test_rating_bands() {
        let scale = roi_rating_scale();
        assert_eq!(scale.classify(250.0), RoiRating::Excellent);
        assert_eq!(scale.classify(150.0), RoiRating::VeryGood);
        assert_eq!(scale.classify(75.0), RoiRating::Good);
        assert_eq!(scale.classify(25.0), RoiRating::Acceptable);
        assert_eq!(scale.classify(-10.0), RoiRating::Marginal);
        assert_eq!(scale.classify(-50.0), RoiRating::Poor);
    }

    #[test]
    fn test_simulated_roi_positive_for_effective_control() {
        let current = RiskParameters::new(0.30, 50_000.0, 500_000.0);
        let residual = RiskParameters::new(0.05, 10_000.0, 100_000.0);
        let sim = SimulationConfig::builder()
            .iterations(20_000)
            .seed(42)
            .build()
            .unwrap();

        let roi = calculate_control_roi(
            &ControlCost::new(5_000.0, 10_000.0),
            &current,
            &residual,
            &config(),
            &sim,
        );
        assert!(roi.risk_reduction > 0.0);
        assert!(roi.roi_pct > 0.0);
        assert!(roi.npv > 0.0);
    }

    #[test]
    fn test_invalid_risk_degrades_to_zero_benefit() {
        let broken = RiskParameters::new(0.5, -1.0, 100.0);
        let sim = SimulationConfig::builder().iterations(1_000).build().unwrap();

        let roi = calculate_control_roi(
            &ControlCost::new(1_000.0, 0.0),
            &broken,
            &broken,
            &config(),
            &sim,
        );
        assert_eq!(roi.risk_reduction, 0.0);
        assert!(roi.payback_years.is_infinite());
        assert_eq!(roi.rating, RoiRating::Poor);
    }

    #[test]
    fn test_roi_config_validation() {
        assert!(RoiConfig::new(0.05, 5).is_ok());
        assert!(RoiConfig::new(f64::NAN, 5).is_err());
        assert!(RoiConfig::new(-1.5, 5).is_err());
        assert!(RoiConfig::new(0.05, 0).is_err());
    }
}
