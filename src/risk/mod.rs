//! Risk statistics and presentation data derived from terminal prices.

pub mod histogram;
pub mod summary;

pub use histogram::{histogram, Histogram};
pub use summary::{percentile, summarize, RiskError, RiskSummary, VAR_QUANTILE};
