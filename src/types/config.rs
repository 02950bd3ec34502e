//! Simulation parameters.

use crate::market::quote::FALLBACK_PRICE;
use crate::simulation::engine::SimulationError;

/// Expected annual return used when nothing else is supplied (SPY).
pub const DEFAULT_DRIFT: f64 = 0.10;
/// Annual volatility used when nothing else is supplied (SPY).
pub const DEFAULT_VOLATILITY: f64 = 0.1125;
/// Simulation horizon in years.
pub const DEFAULT_HORIZON_YEARS: f64 = 1.0;
/// Trading days per year.
pub const DEFAULT_STEP_COUNT: usize = 252;
/// Number of simulated paths.
pub const DEFAULT_PATH_COUNT: usize = 10_000;
/// Paths a line plot draws from an ensemble.
pub const DEFAULT_SAMPLE_PATHS: usize = 250;
/// Bins in the terminal-price histogram.
pub const DEFAULT_HISTOGRAM_BINS: usize = 100;

/// Parameters of one GBM Monte Carlo run.
///
/// The simulator only ever borrows this, so a single value can drive any
/// number of independent runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParameters {
    /// Price at t = 0
    pub initial_price: f64,

    /// GBM drift (annualized)
    pub drift: f64,

    /// GBM volatility (annualized)
    pub volatility: f64,

    /// Length of the simulated period in years
    pub horizon_years: f64,

    /// Number of time steps per path
    pub step_count: usize,

    /// Number of simulated paths
    pub path_count: usize,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            initial_price: FALLBACK_PRICE,
            drift: DEFAULT_DRIFT,
            volatility: DEFAULT_VOLATILITY,
            horizon_years: DEFAULT_HORIZON_YEARS,
            step_count: DEFAULT_STEP_COUNT,
            path_count: DEFAULT_PATH_COUNT,
        }
    }
}

impl SimulationParameters {
    pub fn new(
        initial_price: f64,
        drift: f64,
        volatility: f64,
        horizon_years: f64,
        step_count: usize,
        path_count: usize,
    ) -> Self {
        Self {
            initial_price,
            drift,
            volatility,
            horizon_years,
            step_count,
            path_count,
        }
    }

    /// Same parameters starting from a different price.
    pub fn with_initial_price(self, initial_price: f64) -> Self {
        Self {
            initial_price,
            ..self
        }
    }

    /// Time step size in years.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.horizon_years / self.step_count as f64
    }

    /// Columns of the path ensemble (the initial price plus one per step).
    #[inline]
    pub fn column_count(&self) -> usize {
        self.step_count + 1
    }

    /// Check every precondition of a simulation run.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.step_count == 0 {
            return Err(invalid("step_count must be at least 1"));
        }
        if self.path_count == 0 {
            return Err(invalid("path_count must be at least 1"));
        }
        if !(self.initial_price.is_finite() && self.initial_price > 0.0) {
            return Err(invalid(format!(
                "initial_price must be positive, got {}",
                self.initial_price
            )));
        }
        if !(self.horizon_years.is_finite() && self.horizon_years > 0.0) {
            return Err(invalid(format!(
                "horizon_years must be positive, got {}",
                self.horizon_years
            )));
        }
        if !self.drift.is_finite() {
            return Err(invalid(format!("drift must be finite, got {}", self.drift)));
        }
        if !(self.volatility.is_finite() && self.volatility >= 0.0) {
            return Err(invalid(format!(
                "volatility must be non-negative, got {}",
                self.volatility
            )));
        }
        if !(self.dt() > 0.0) {
            return Err(invalid("time step underflows to zero"));
        }
        if self.path_count.checked_mul(self.column_count()).is_none() {
            return Err(invalid("path ensemble size overflows usize"));
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> SimulationError {
    SimulationError::InvalidParameters(msg.into())
}
