//! Price process, randomness and the initial price boundary.

pub mod price_process;
pub mod quote;
pub mod random;

pub use price_process::GBMPriceProcess;
pub use quote::{resolve_initial_price, FeedError, FixedQuote, PriceFeed, FALLBACK_PRICE};
pub use random::{DrawError, NormalSource, ReplaySource};
