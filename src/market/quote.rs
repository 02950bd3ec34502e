//! Initial price input boundary.
//!
//! Fetching a live quote happens outside this crate. Whatever feed the host
//! plugs in, the simulation always receives a single positive price: a failed
//! or empty lookup is replaced by [`FALLBACK_PRICE`].

use thiserror::Error;
use tracing::warn;

/// Ticker the default parameters are tuned for.
pub const DEFAULT_TICKER: &str = "SPY";

/// SPY close used when no quote is available.
///
/// This is a fixed historical value with no staleness check.
pub const FALLBACK_PRICE: f64 = 647.24;

/// Error reported by a price feed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    #[error("price feed unavailable: {0}")]
    Unavailable(String),
    #[error("price feed returned no data")]
    Empty,
}

/// Source of the latest closing price for a ticker.
pub trait PriceFeed {
    /// `Ok(None)` means the feed answered but had no rows.
    fn latest_close(&mut self, ticker: &str) -> Result<Option<f64>, FeedError>;
}

/// A quote obtained by the caller, e.g. downloaded on the Python side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedQuote(pub Option<f64>);

impl PriceFeed for FixedQuote {
    fn latest_close(&mut self, _ticker: &str) -> Result<Option<f64>, FeedError> {
        Ok(self.0)
    }
}

/// Latest close for `ticker`, or [`FALLBACK_PRICE`] if the feed fails,
/// returns nothing, or returns a non-positive price.
pub fn resolve_initial_price<F: PriceFeed + ?Sized>(feed: &mut F, ticker: &str) -> f64 {
    match feed.latest_close(ticker) {
        Ok(Some(price)) if price.is_finite() && price > 0.0 => price,
        Ok(Some(price)) => {
            warn!(ticker, price, fallback = FALLBACK_PRICE, "unusable quote, using fallback price");
            FALLBACK_PRICE
        }
        Ok(None) | Err(FeedError::Empty) => {
            warn!(ticker, fallback = FALLBACK_PRICE, "empty quote, using fallback price");
            FALLBACK_PRICE
        }
        Err(e) => {
            warn!(ticker, error = %e, fallback = FALLBACK_PRICE, "price feed failed, using fallback price");
            FALLBACK_PRICE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingFeed;

    impl PriceFeed for FailingFeed {
        fn latest_close(&mut self, _ticker: &str) -> Result<Option<f64>, FeedError> {
            Err(FeedError::Unavailable("too many requests".to_string()))
        }
    }

    #[test]
    fn test_valid_quote_passes_through() {
        let mut feed = FixedQuote(Some(512.5));
        assert_eq!(resolve_initial_price(&mut feed, DEFAULT_TICKER), 512.5);
    }

    #[test]
    fn test_empty_quote_falls_back() {
        let mut feed = FixedQuote(None);
        assert_eq!(resolve_initial_price(&mut feed, DEFAULT_TICKER), FALLBACK_PRICE);
    }

    #[test]
    fn test_feed_error_falls_back() {
        assert_eq!(resolve_initial_price(&mut FailingFeed, DEFAULT_TICKER), FALLBACK_PRICE);
    }

    #[test]
    fn test_bad_quote_falls_back() {
        for price in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let mut feed = FixedQuote(Some(price));
            assert_eq!(resolve_initial_price(&mut feed, DEFAULT_TICKER), FALLBACK_PRICE);
        }
    }
}
