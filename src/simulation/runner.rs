//! Parallel path simulation using rayon.

use rayon::prelude::*;
use tracing::debug;

use crate::market::{GBMPriceProcess, NormalSource};
use crate::simulation::engine::{build_report, draw_batch, initial_matrix, SimulationError};
use crate::types::config::SimulationParameters;
use crate::types::result::{PathEnsemble, SimulationReport};

/// Simulate paths on a dedicated thread pool.
///
/// Draws are taken from `source` in exactly the order [`simulate`] takes
/// them, and each row runs the same recurrence, so the result is
/// bit-identical to the sequential engine.
///
/// [`simulate`]: crate::simulation::engine::simulate
pub fn simulate_parallel<S: NormalSource + ?Sized>(
    params: &SimulationParameters,
    source: &mut S,
    n_workers: Option<usize>,
) -> Result<PathEnsemble, SimulationError> {
    params.validate()?;

    // Configure thread pool
    let n_workers = n_workers.unwrap_or_else(|| rayon::current_num_threads().min(8));
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(n_workers)
        .build()
        .map_err(|e| SimulationError::ThreadPool(format!("Failed to create thread pool: {}", e)))?;

    debug!(
        path_count = params.path_count,
        step_count = params.step_count,
        n_workers,
        "simulating GBM paths in parallel"
    );

    // Randomness stays on the caller's thread
    let draws = draw_batch(params, source)?;
    let process = GBMPriceProcess::from_parameters(params);
    let mut data = initial_matrix(params);

    pool.install(|| {
        data.par_chunks_exact_mut(params.column_count())
            .zip(draws.par_chunks_exact(params.step_count))
            .for_each(|(path, shocks)| process.fill_path(path, shocks));
    });

    Ok(PathEnsemble::from_raw(
        data,
        params.path_count,
        params.column_count(),
    ))
}

/// Parallel counterpart of [`run`](crate::simulation::engine::run).
pub fn run_parallel<S: NormalSource + ?Sized>(
    params: &SimulationParameters,
    source: &mut S,
    n_workers: Option<usize>,
) -> Result<SimulationReport, SimulationError> {
    let paths = simulate_parallel(params, source, n_workers)?;
    build_report(paths, params.initial_price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::engine::{run, simulate};
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn test_parallel_matches_sequential() {
        let params = SimulationParameters::new(647.24, 0.10, 0.1125, 1.0, 252, 500);
        let sequential = simulate(&params, &mut Pcg64::seed_from_u64(9)).unwrap();
        let parallel = simulate_parallel(&params, &mut Pcg64::seed_from_u64(9), Some(4)).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_run_parallel_matches_run() {
        let params = SimulationParameters::new(100.0, 0.05, 0.3, 0.5, 30, 300);
        let a = run(&params, &mut Pcg64::seed_from_u64(5)).unwrap();
        let b = run_parallel(&params, &mut Pcg64::seed_from_u64(5), None).unwrap();
        assert_eq!(a.summary, b.summary);
        assert_eq!(a.terminal_prices, b.terminal_prices);
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let params = SimulationParameters::new(100.0, 0.05, 0.3, 0.5, 30, 0);
        let err = simulate_parallel(&params, &mut Pcg64::seed_from_u64(5), Some(2)).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidParameters(_)));
    }
}
