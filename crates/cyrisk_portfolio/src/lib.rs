//! # cyrisk_portfolio: Portfolio Risk Analytics (L3)
//!
//! Aggregation of independently simulated risk scenarios into portfolio
//! metrics, concentration analysis, and stress testing.
//!
//! This crate provides:
//! - Portfolio aggregation by element-wise loss summation
//! - Diversification ratio and per-scenario marginal contribution
//! - Concentration risk: HHI, Gini coefficient, top-N shares
//! - Stress testing via probability/impact multiplier perturbations
//! - Rayon-based parallelisation across scenario simulations
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         cyrisk_portfolio (L3)           │
//! ├─────────────────────────────────────────┤
//! │  aggregator/     - Portfolio metrics,   │
//! │                    marginal contribution│
//! │  concentration/  - HHI, Gini, top-N     │
//! │  stress/         - Multiplier scenarios │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │            cyrisk_sim (L2)              │
//! │  Monte Carlo loss simulation, metrics   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Independence Assumption
//!
//! Scenario losses are summed index-by-index under the assumption that
//! scenarios are statistically independent. Real-world correlation between
//! cyber risk scenarios is not modelled; see the workspace design notes for
//! the copula extension question.
//!
//! ## Example
//!
//! ```
//! use cyrisk_core::types::{RiskParameters, ScenarioSpec};
//! use cyrisk_portfolio::aggregator::analyze_portfolio;
//! use cyrisk_sim::config::SimulationConfig;
//!
//! let scenarios = vec![
//!     ScenarioSpec::new("Ransomware", RiskParameters::new(0.2, 50_000.0, 200_000.0)),
//!     ScenarioSpec::new("Insider", RiskParameters::new(0.05, 20_000.0, 80_000.0)),
//! ];
//!
//! let config = SimulationConfig::builder()
//!     .iterations(10_000)
//!     .build()
//!     .unwrap();
//! let portfolio = analyze_portfolio(&scenarios, &config, None);
//!
//! assert!(portfolio.total_ale > 0.0);
//! assert_eq!(portfolio.contributions.len(), 2);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod aggregator;
pub mod concentration;
pub mod stress;

pub use aggregator::{analyze_portfolio, PortfolioMetrics, ScenarioContribution};
pub use concentration::{concentration_from_ales, ConcentrationLevel, RiskConcentration};
pub use stress::{run_stress_tests, StressScenario, StressTestResult};
