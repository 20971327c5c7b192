//! # cyrisk_core: Foundation for the CyRisk Analytics Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! cyrisk_core is the bottom layer of the CyRisk workspace, providing:
//! - Elicited risk parameter types: `RiskParameters`, `ScenarioSpec` (`types`)
//! - Simulated loss storage: `LossVector` (`types::loss`)
//! - Lognormal calibration from confidence intervals (`math::lognormal`)
//! - Percentile mathematics for VaR-style metrics (`math::percentile`)
//! - Ordered threshold tables for qualitative ratings (`ratings`)
//! - Error types: `EngineError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other cyrisk_* crates, with minimal
//! external dependencies:
//! - thiserror: Structured error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Degradation Over Failure
//!
//! Scenario inputs are elicited from workshops and imports, so partially
//! specified or inconsistent parameters are routine. The foundation types
//! therefore degrade to well-defined zero-risk values instead of erroring:
//! an invalid `RiskParameters` simulates to an all-zero `LossVector`, and
//! calibration of an invalid severity interval yields `None`. Only systemic
//! conditions (an unusable iteration count) surface as [`EngineError`].
//!
//! ## Usage Examples
//!
//! ```rust
//! use cyrisk_core::math::lognormal::LognormalParams;
//! use cyrisk_core::types::RiskParameters;
//!
//! // A scenario with 10% annual likelihood and a 90% confidence
//! // severity interval of 10k..100k.
//! let params = RiskParameters::new(0.10, 10_000.0, 100_000.0);
//! assert!(params.is_valid());
//!
//! // Calibrate the lognormal severity distribution.
//! let dist = LognormalParams::from_confidence_interval(10_000.0, 100_000.0)
//!     .expect("valid interval");
//! assert!(dist.sigma > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod ratings;
pub mod types;

pub use ratings::RatingScale;
pub use types::{EngineError, LossVector, RiskParameters, ScenarioSpec};
