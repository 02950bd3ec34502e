//! Python bindings for the plotting front end.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg64;

use crate::market::quote::{resolve_initial_price as resolve_price, FixedQuote, DEFAULT_TICKER};
use crate::risk::histogram;
use crate::simulation::runner::run_parallel;
use crate::simulation::SimulationError;
use crate::types::config::{
    SimulationParameters, DEFAULT_DRIFT, DEFAULT_HISTOGRAM_BINS, DEFAULT_HORIZON_YEARS,
    DEFAULT_PATH_COUNT, DEFAULT_SAMPLE_PATHS, DEFAULT_STEP_COUNT, DEFAULT_VOLATILITY,
};
use crate::types::result::SimulationReport;

fn to_py_err(e: SimulationError) -> PyErr {
    match e {
        SimulationError::InvalidParameters(_) | SimulationError::Risk(_) => {
            PyErr::new::<PyValueError, _>(e.to_string())
        }
        _ => PyErr::new::<PyRuntimeError, _>(e.to_string()),
    }
}

/// Simulated paths and their risk statistics.
#[pyclass(name = "SimulationReport")]
pub struct PySimulationReport {
    inner: SimulationReport,
}

#[pymethods]
impl PySimulationReport {
    /// All paths as a list of lists, shape (path_count, step_count + 1).
    #[getter]
    fn paths(&self) -> Vec<Vec<f64>> {
        self.inner.paths.paths().map(|p| p.to_vec()).collect()
    }

    #[getter]
    fn terminal_prices(&self) -> Vec<f64> {
        self.inner.terminal_prices.clone()
    }

    #[getter]
    fn initial_price(&self) -> f64 {
        self.inner.summary.initial_price
    }

    #[getter]
    fn mean_price(&self) -> f64 {
        self.inner.summary.mean_price
    }

    #[getter]
    fn var_5(&self) -> f64 {
        self.inner.summary.var_5
    }

    #[getter]
    fn loss_probability(&self) -> f64 {
        self.inner.summary.loss_probability
    }

    #[getter]
    fn var_loss(&self) -> f64 {
        self.inner.summary.var_loss()
    }

    /// The first `count` paths, for the line plot.
    #[pyo3(signature = (count = DEFAULT_SAMPLE_PATHS))]
    fn sample_paths(&self, count: usize) -> Vec<Vec<f64>> {
        self.inner
            .paths
            .sample_paths(count)
            .into_iter()
            .map(|p| p.to_vec())
            .collect()
    }

    /// Terminal-price histogram: (edges, counts).
    #[pyo3(signature = (bins = DEFAULT_HISTOGRAM_BINS))]
    fn histogram(&self, bins: usize) -> PyResult<(Vec<f64>, Vec<usize>)> {
        let hist = histogram(&self.inner.terminal_prices, bins)
            .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))?;
        Ok((hist.edges, hist.counts))
    }

    /// Text for the risk annotation box.
    fn risk_text(&self) -> String {
        self.inner.summary.to_string()
    }

    fn __repr__(&self) -> String {
        let (paths, columns) = self.inner.paths.shape();
        format!(
            "SimulationReport(paths={}, steps={}, mean_price={:.2}, var_5={:.2})",
            paths,
            columns - 1,
            self.inner.summary.mean_price,
            self.inner.summary.var_5
        )
    }
}

/// Run a GBM Monte Carlo simulation and summarize terminal prices.
///
/// # Arguments
/// * `initial_price` - Price at t = 0
/// * `seed` - Random seed for reproducibility (None = random)
/// * `n_workers` - Number of parallel workers (0 = auto-detect)
#[pyfunction]
#[pyo3(signature = (
    initial_price,
    drift = DEFAULT_DRIFT,
    volatility = DEFAULT_VOLATILITY,
    horizon_years = DEFAULT_HORIZON_YEARS,
    step_count = DEFAULT_STEP_COUNT,
    path_count = DEFAULT_PATH_COUNT,
    seed = None,
    n_workers = 0
))]
#[allow(clippy::too_many_arguments)]
fn run_simulation(
    py: Python<'_>,
    initial_price: f64,
    drift: f64,
    volatility: f64,
    horizon_years: f64,
    step_count: usize,
    path_count: usize,
    seed: Option<u64>,
    n_workers: usize,
) -> PyResult<PySimulationReport> {
    let params = SimulationParameters::new(
        initial_price,
        drift,
        volatility,
        horizon_years,
        step_count,
        path_count,
    );
    let mut rng = match seed {
        Some(s) => Pcg64::seed_from_u64(s),
        None => Pcg64::from_entropy(),
    };
    let n_workers = if n_workers == 0 { None } else { Some(n_workers) };

    let report = py
        .allow_threads(|| run_parallel(&params, &mut rng, n_workers))
        .map_err(to_py_err)?;
    Ok(PySimulationReport { inner: report })
}

/// Apply the fallback rule to a quote fetched in Python.
#[pyfunction]
#[pyo3(signature = (observed = None))]
fn resolve_initial_price(observed: Option<f64>) -> f64 {
    resolve_price(&mut FixedQuote(observed), DEFAULT_TICKER)
}

/// Python module definition
#[pymodule]
fn gbm_risk_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(run_simulation, m)?)?;
    m.add_function(wrap_pyfunction!(resolve_initial_price, m)?)?;
    m.add_class::<PySimulationReport>()?;
    m.add("FALLBACK_PRICE", crate::market::quote::FALLBACK_PRICE)?;
    Ok(())
}
