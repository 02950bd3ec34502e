//! Simulation engine and parallel runner.

pub mod engine;
pub mod runner;

pub use engine::{run, simulate, SimulationError};
pub use runner::{run_parallel, simulate_parallel};
