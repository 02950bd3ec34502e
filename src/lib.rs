//! GBM Monte Carlo risk engine in Rust
//!
//! Simulates the price of a single equity under Geometric Brownian Motion
//! and derives terminal-price risk statistics: mean price, 5% Value-at-Risk
//! and probability of loss. Rendering lives outside the crate; the optional
//! `python` feature exposes the results to a Python plotting front end.

pub mod market;
pub mod risk;
pub mod simulation;
pub mod types;

#[cfg(feature = "python")]
mod python;

pub use market::{resolve_initial_price, FixedQuote, NormalSource, PriceFeed, ReplaySource};
pub use risk::{summarize, RiskError, RiskSummary};
pub use simulation::{run, run_parallel, simulate, simulate_parallel, SimulationError};
pub use types::{PathEnsemble, SimulationParameters, SimulationReport};
