//! Equal-width histogram of terminal prices.

use crate::risk::summary::RiskError;

/// Bin edges and counts, laid out the way plotting libraries expect.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// `bins + 1` ascending edges
    pub edges: Vec<f64>,
    /// Count per bin
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn bin_count(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Bin `values` into `bins` equal-width bins spanning `[min, max]`.
///
/// Every bin is half-open except the last, which also includes `max`. When
/// all values coincide the range is widened to `[v - 0.5, v + 0.5]`.
pub fn histogram(values: &[f64], bins: usize) -> Result<Histogram, RiskError> {
    if bins == 0 {
        return Err(RiskError::InvalidBinCount);
    }
    if values.is_empty() {
        return Err(RiskError::EmptyInput);
    }

    let (mut lo, mut hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();

    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    Ok(Histogram { edges, counts })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_counts() {
        let hist = histogram(&[0.0, 1.0, 2.0, 3.0, 4.0], 4).unwrap();
        assert_eq!(hist.edges, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        // Max lands in the last bin
        assert_eq!(hist.counts, vec![1, 1, 1, 2]);
        assert_eq!(hist.total(), 5);
    }

    #[test]
    fn test_histogram_constant_values() {
        let hist = histogram(&[7.0, 7.0, 7.0], 2).unwrap();
        assert_eq!(hist.edges, vec![6.5, 7.0, 7.5]);
        assert_eq!(hist.counts, vec![0, 3]);
    }

    #[test]
    fn test_histogram_errors() {
        assert_eq!(histogram(&[1.0], 0), Err(RiskError::InvalidBinCount));
        assert_eq!(histogram(&[], 10), Err(RiskError::EmptyInput));
    }
}
