//! Simulation result types.

use std::slice::ChunksExact;

use crate::risk::RiskSummary;

/// Simulated price paths stored as a dense row-major
/// `[path_count, step_count + 1]` matrix.
///
/// Column 0 holds the initial price of every path. There are no mutable
/// accessors: once the simulator hands an ensemble out it stays as produced.
#[derive(Debug, Clone, PartialEq)]
pub struct PathEnsemble {
    data: Vec<f64>,
    path_count: usize,
    column_count: usize,
}

impl PathEnsemble {
    /// Wrap simulator output. `data.len()` must equal `path_count * column_count`.
    pub(crate) fn from_raw(data: Vec<f64>, path_count: usize, column_count: usize) -> Self {
        debug_assert_eq!(data.len(), path_count * column_count);
        Self {
            data,
            path_count,
            column_count,
        }
    }

    /// `(path_count, step_count + 1)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.path_count, self.column_count)
    }

    #[inline]
    pub fn path_count(&self) -> usize {
        self.path_count
    }

    #[inline]
    pub fn step_count(&self) -> usize {
        self.column_count - 1
    }

    /// One path, from the initial price to the terminal price.
    #[inline]
    pub fn path(&self, index: usize) -> Option<&[f64]> {
        if index >= self.path_count {
            return None;
        }
        let start = index * self.column_count;
        Some(&self.data[start..start + self.column_count])
    }

    /// Iterate over all paths in order.
    pub fn paths(&self) -> ChunksExact<'_, f64> {
        self.data.chunks_exact(self.column_count)
    }

    /// Prices of every path at time step `t`.
    pub fn column(&self, t: usize) -> Option<Vec<f64>> {
        if t >= self.column_count {
            return None;
        }
        Some(self.paths().map(|path| path[t]).collect())
    }

    /// Last column of the ensemble.
    pub fn terminal_prices(&self) -> Vec<f64> {
        self.paths().map(|path| path[self.column_count - 1]).collect()
    }

    /// The first `count` paths (fewer if the ensemble is smaller), as drawn
    /// by a line plot.
    pub fn sample_paths(&self, count: usize) -> Vec<&[f64]> {
        self.paths().take(count).collect()
    }

    /// Row-major view of the whole matrix.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }
}

/// Everything a presentation layer needs from one run.
#[derive(Debug, Clone)]
pub struct SimulationReport {
    /// Full simulated paths
    pub paths: PathEnsemble,

    /// Last column of `paths`
    pub terminal_prices: Vec<f64>,

    /// Risk statistics of `terminal_prices`
    pub summary: RiskSummary,
}
