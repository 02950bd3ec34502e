//! Terminal-price risk statistics.

use std::fmt;

use thiserror::Error;
use tracing::debug;

/// Quantile reported as Value-at-Risk.
pub const VAR_QUANTILE: f64 = 0.05;

/// Error type for risk statistics.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RiskError {
    #[error("no terminal prices to summarize")]
    EmptyInput,
    #[error("quantile must lie in [0, 1], got {0}")]
    InvalidQuantile(f64),
    #[error("histogram needs at least one bin")]
    InvalidBinCount,
}

/// Risk statistics of a set of terminal prices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskSummary {
    /// Price the simulation started from
    pub initial_price: f64,
    /// Arithmetic mean of terminal prices
    pub mean_price: f64,
    /// 5th percentile of terminal prices
    pub var_5: f64,
    /// Fraction of terminal prices strictly below the initial price
    pub loss_probability: f64,
}

impl RiskSummary {
    /// Drop from the initial price to the VaR level.
    #[inline]
    pub fn var_loss(&self) -> f64 {
        self.initial_price - self.var_5
    }
}

impl fmt::Display for RiskSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mean Final Price: ${:.2}", self.mean_price)?;
        writeln!(f, "5% VaR: ${:.2} (loss: {:.2})", self.var_5, self.var_loss())?;
        write!(f, "Probability of Loss: {:.2}%", self.loss_probability * 100.0)
    }
}

/// Summarize terminal prices against the price they started from.
pub fn summarize(terminal_prices: &[f64], initial_price: f64) -> Result<RiskSummary, RiskError> {
    if terminal_prices.is_empty() {
        return Err(RiskError::EmptyInput);
    }
    debug!(count = terminal_prices.len(), initial_price, "summarizing terminal prices");

    let n = terminal_prices.len() as f64;
    let mean_price = terminal_prices.iter().sum::<f64>() / n;

    let mut sorted = terminal_prices.to_vec();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));
    let var_5 = percentile_sorted(&sorted, VAR_QUANTILE);

    let losses = terminal_prices.iter().filter(|&&p| p < initial_price).count();

    Ok(RiskSummary {
        initial_price,
        mean_price,
        var_5,
        loss_probability: losses as f64 / n,
    })
}

/// Quantile `q` of `values` by linear interpolation between order statistics
/// at rank `q * (n - 1)`.
pub fn percentile(values: &[f64], q: f64) -> Result<f64, RiskError> {
    if values.is_empty() {
        return Err(RiskError::EmptyInput);
    }
    if !(0.0..=1.0).contains(&q) {
        return Err(RiskError::InvalidQuantile(q));
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));
    Ok(percentile_sorted(&sorted, q))
}

/// `sorted` must be non-empty and ascending.
fn percentile_sorted(sorted: &[f64], q: f64) -> f64 {
    let rank = q * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let w = rank - lo as f64;
        sorted[lo] + (sorted[hi] - sorted[lo]) * w
    }
}
