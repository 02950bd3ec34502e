//! Main simulation engine.

use thiserror::Error;
use tracing::debug;

use crate::market::{DrawError, GBMPriceProcess, NormalSource};
use crate::risk::{summarize, RiskError};
use crate::types::config::SimulationParameters;
use crate::types::result::{PathEnsemble, SimulationReport};

/// Error type for simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),
    #[error("Random source exhausted: needed {needed} draws, {available} available")]
    InsufficientDraws { needed: usize, available: usize },
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
    #[error("Risk summary failed: {0}")]
    Risk(#[from] RiskError),
}

impl From<DrawError> for SimulationError {
    fn from(e: DrawError) -> Self {
        SimulationError::InsufficientDraws {
            needed: e.needed,
            available: e.available,
        }
    }
}

/// Simulate `params.path_count` GBM paths of `params.step_count` steps.
///
/// Draws one `path_count * step_count` batch from `source`, row-major, so
/// path `i` only ever sees draws `i * step_count .. (i + 1) * step_count`.
pub fn simulate<S: NormalSource + ?Sized>(
    params: &SimulationParameters,
    source: &mut S,
) -> Result<PathEnsemble, SimulationError> {
    params.validate()?;
    debug!(
        path_count = params.path_count,
        step_count = params.step_count,
        "simulating GBM paths"
    );

    let draws = draw_batch(params, source)?;
    let process = GBMPriceProcess::from_parameters(params);
    let mut data = initial_matrix(params);

    for (path, shocks) in data
        .chunks_exact_mut(params.column_count())
        .zip(draws.chunks_exact(params.step_count))
    {
        process.fill_path(path, shocks);
    }

    Ok(PathEnsemble::from_raw(
        data,
        params.path_count,
        params.column_count(),
    ))
}

/// Simulate paths and summarize their terminal prices.
pub fn run<S: NormalSource + ?Sized>(
    params: &SimulationParameters,
    source: &mut S,
) -> Result<SimulationReport, SimulationError> {
    let paths = simulate(params, source)?;
    build_report(paths, params.initial_price)
}

pub(crate) fn build_report(
    paths: PathEnsemble,
    initial_price: f64,
) -> Result<SimulationReport, SimulationError> {
    let terminal_prices = paths.terminal_prices();
    let summary = summarize(&terminal_prices, initial_price)?;
    Ok(SimulationReport {
        paths,
        terminal_prices,
        summary,
    })
}

/// Standard normal shocks for every path, row-major `[path_count, step_count]`.
pub(crate) fn draw_batch<S: NormalSource + ?Sized>(
    params: &SimulationParameters,
    source: &mut S,
) -> Result<Vec<f64>, SimulationError> {
    let len = params
        .path_count
        .checked_mul(params.step_count)
        .ok_or_else(|| SimulationError::InvalidParameters("draw count overflows usize".to_string()))?;
    let mut draws = vec![0.0; len];
    source.fill_standard_normal(&mut draws)?;
    Ok(draws)
}

/// Matrix with every path set to the initial price; steps are overwritten.
pub(crate) fn initial_matrix(params: &SimulationParameters) -> Vec<f64> {
    vec![params.initial_price; params.path_count * params.column_count()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::ReplaySource;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    fn params(step_count: usize, path_count: usize) -> SimulationParameters {
        SimulationParameters::new(100.0, 0.10, 0.1125, 1.0, step_count, path_count)
    }

    #[test]
    fn test_shape_and_initial_column() {
        let paths = simulate(&params(12, 5), &mut Pcg64::seed_from_u64(1)).unwrap();
        assert_eq!(paths.shape(), (5, 13));
        assert_eq!(paths.column(0).unwrap(), vec![100.0; 5]);
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let p = params(20, 50);
        let a = simulate(&p, &mut Pcg64::seed_from_u64(42)).unwrap();
        let b = simulate(&p, &mut Pcg64::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_replayed_draws_follow_recurrence() {
        let p = SimulationParameters::new(50.0, 0.05, 0.2, 2.0, 2, 2);
        let draws = vec![0.5, -1.0, 0.0, 2.0];
        let paths = simulate(&p, &mut ReplaySource::new(draws.clone())).unwrap();

        let process = GBMPriceProcess::new(0.05, 0.2, 1.0);
        let row0 = [50.0, process.step(50.0, 0.5), process.step(process.step(50.0, 0.5), -1.0)];
        assert_eq!(paths.path(0).unwrap(), &row0);
        assert_eq!(paths.path(1).unwrap()[1], process.step(50.0, 0.0));
    }

    #[test]
    fn test_zero_steps_rejected_before_drawing() {
        let mut source = ReplaySource::new(vec![0.0; 4]);
        let err = simulate(&params(0, 2), &mut source).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidParameters(_)));
        assert_eq!(source.remaining(), 4);
    }

    #[test]
    fn test_short_replay_source() {
        let err = simulate(&params(3, 2), &mut ReplaySource::new(vec![0.0; 5])).unwrap_err();
        assert_eq!(
            err,
            SimulationError::InsufficientDraws {
                needed: 6,
                available: 5
            }
        );
    }

    #[test]
    fn test_run_builds_report() {
        let p = params(10, 200);
        let report = run(&p, &mut Pcg64::seed_from_u64(3)).unwrap();
        assert_eq!(report.terminal_prices, report.paths.terminal_prices());
        assert_eq!(report.summary.initial_price, 100.0);
        assert!((0.0..=1.0).contains(&report.summary.loss_probability));
    }
}
