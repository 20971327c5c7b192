//! # cyrisk_roi: Control Investment Economics (L4)
//!
//! Return-on-security-investment analytics built on the simulation kernel:
//! control ROI with NPV and payback, treatment-option comparison, a
//! budget-constrained greedy control selector, breakeven thresholds, and
//! one-factor-at-a-time sensitivity analysis.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            cyrisk_roi (L4)              │
//! ├─────────────────────────────────────────┤
//! │  roi/         - ROSI, NPV, payback      │
//! │  treatment/   - Option ranking          │
//! │  optimizer/   - Greedy budget selection │
//! │  breakeven/   - Viability thresholds    │
//! │  sensitivity/ - One-factor variations   │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │            cyrisk_sim (L2)              │
//! │  Monte Carlo loss simulation, metrics   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Degradation
//!
//! Malformed risk parameters flow through the simulation pipeline as
//! zero-loss distributions, so every operation here stays total: ROI
//! degrades to 0%, payback to infinity, selections to the empty set.
//!
//! ## Example
//!
//! ```
//! use cyrisk_core::types::RiskParameters;
//! use cyrisk_roi::roi::{calculate_control_roi, ControlCost, RoiConfig};
//! use cyrisk_sim::config::SimulationConfig;
//!
//! let current = RiskParameters::new(0.30, 50_000.0, 500_000.0);
//! let residual = RiskParameters::new(0.10, 20_000.0, 150_000.0);
//! let cost = ControlCost::new(10_000.0, 25_000.0);
//!
//! let sim = SimulationConfig::builder().iterations(10_000).build().unwrap();
//! let roi = calculate_control_roi(&cost, &current, &residual, &RoiConfig::default(), &sim);
//!
//! assert!(roi.risk_reduction > 0.0);
//! assert!(roi.payback_years.is_finite());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod breakeven;
pub mod optimizer;
pub mod roi;
pub mod sensitivity;
pub mod treatment;

pub use breakeven::{calculate_breakeven, BreakevenAnalysis};
pub use optimizer::{optimize_control_selection, ControlCandidate, OptimalControlSet, SelectedControl};
pub use roi::{
    calculate_control_roi, control_roi_from_ales, ControlCost, ControlRoi, RoiConfig, RoiRating,
};
pub use sensitivity::{sensitivity_analysis, RoiSensitivity, SensitivityPoint};
pub use treatment::{compare_treatment_options, TreatmentComparison, TreatmentOption};
