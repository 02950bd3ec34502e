//! Core types for the simulation engine.

pub mod config;
pub mod result;

pub use config::SimulationParameters;
pub use result::{PathEnsemble, SimulationReport};
