//! One-factor-at-a-time ROI sensitivity analysis.
//!
//! Re-evaluates ROI at fixed percentage variations applied independently
//! to control cost, residual ALE, and current ALE, holding the other two
//! inputs at their base values. Not a joint or tornado analysis.

use crate::roi::{control_roi_from_ales, ControlCost, RoiConfig};

/// Variation levels applied to each factor, in percent.
pub const VARIATION_LEVELS: [f64; 5] = [-20.0, -10.0, 0.0, 10.0, 20.0];

/// ROI at one variation level of one factor.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensitivityPoint {
    /// Variation applied to the factor, in percent.
    pub variation_pct: f64,
    /// ROI% at that variation.
    pub roi_pct: f64,
}

/// ROI sensitivity to each input factor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoiSensitivity {
    /// ROI under variations of both cost components.
    pub cost: Vec<SensitivityPoint>,
    /// ROI under variations of the residual ALE.
    pub residual_risk: Vec<SensitivityPoint>,
    /// ROI under variations of the current ALE.
    pub current_risk: Vec<SensitivityPoint>,
}

impl RoiSensitivity {
    /// The ROI at the unvaried base point (identical across factors).
    pub fn base_roi_pct(&self) -> Option<f64> {
        self.cost
            .iter()
            .find(|p| p.variation_pct == 0.0)
            .map(|p| p.roi_pct)
    }
}

/// Evaluates ROI sensitivity for a control with known ALE inputs.
///
/// Cost variations scale both the annual and implementation cost by the
/// same factor. ALE inputs are taken as given; callers working from
/// `RiskParameters` obtain them from the simulation pipeline first.
///
/// # Examples
///
/// ```rust
/// use cyrisk_roi::roi::{ControlCost, RoiConfig};
/// use cyrisk_roi::sensitivity::sensitivity_analysis;
///
/// let sensitivity = sensitivity_analysis(
///     &ControlCost::new(5_000.0, 10_000.0),
///     150_000.0,
///     50_000.0,
///     &RoiConfig::default(),
/// );
/// assert_eq!(sensitivity.cost.len(), 5);
/// // Cheaper control, better ROI.
/// assert!(sensitivity.cost[0].roi_pct > sensitivity.cost[4].roi_pct);
/// ```
pub fn sensitivity_analysis(
    cost: &ControlCost,
    current_ale: f64,
    residual_ale: f64,
    config: &RoiConfig,
) -> RoiSensitivity {
    let vary = |f: &dyn Fn(f64) -> f64| -> Vec<SensitivityPoint> {
        VARIATION_LEVELS
            .iter()
            .map(|&variation_pct| SensitivityPoint {
                variation_pct,
                roi_pct: f(1.0 + variation_pct / 100.0),
            })
            .collect()
    };

    let cost_points = vary(&|factor| {
        let scaled = ControlCost::new(cost.annual_cost * factor, cost.implementation_cost * factor);
        control_roi_from_ales(&scaled, current_ale, residual_ale, config).roi_pct
    });
    let residual_points = vary(&|factor| {
        control_roi_from_ales(cost, current_ale, residual_ale * factor, config).roi_pct
    });
    let current_points = vary(&|factor| {
        control_roi_from_ales(cost, current_ale * factor, residual_ale, config).roi_pct
    });

    RoiSensitivity {
        cost: cost_points,
        residual_risk: residual_points,
        current_risk: current_points,
    }
}
