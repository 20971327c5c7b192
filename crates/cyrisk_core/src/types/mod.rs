//! Core value types shared across the CyRisk workspace.
//!
//! This module provides:
//! - [`RiskParameters`]: Elicited annual likelihood and severity bounds
//! - [`ScenarioSpec`]: A named scenario carrying its parameters
//! - [`LossVector`]: Ordered simulated annual losses
//! - [`EngineError`]: Systemic errors that propagate to the caller

mod error;
mod loss;
mod params;

pub use error::EngineError;
pub use loss::LossVector;
pub use params::{RiskParameters, ScenarioSpec};
