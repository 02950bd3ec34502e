//! Geometric Brownian Motion price process.

use crate::types::config::SimulationParameters;

/// Exact one-step GBM update.
///
/// The GBM model: dS = mu * S * dt + sigma * S * dW
/// has the closed-form step
/// S(t + dt) = S(t) * exp((mu - 0.5 * sigma^2) * dt + sigma * sqrt(dt) * Z)
/// where:
/// - mu is the annualized drift
/// - sigma is the annualized volatility
/// - Z is a standard normal draw
///
/// Each marginal is exactly lognormal, so the only error is sampling noise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GBMPriceProcess {
    /// Pre-computed drift term: (mu - 0.5 * sigma^2) * dt
    drift_term: f64,
    /// Pre-computed volatility term: sigma * sqrt(dt)
    vol_term: f64,
}

impl GBMPriceProcess {
    /// Create a GBM step for the given annualized drift, volatility and time step.
    pub fn new(mu: f64, sigma: f64, dt: f64) -> Self {
        Self {
            drift_term: (mu - 0.5 * sigma * sigma) * dt,
            vol_term: sigma * dt.sqrt(),
        }
    }

    pub fn from_parameters(params: &SimulationParameters) -> Self {
        Self::new(params.drift, params.volatility, params.dt())
    }

    /// Advance `price` by one step using shock `z`.
    #[inline]
    pub fn step(&self, price: f64, z: f64) -> f64 {
        let exponent = self.drift_term + self.vol_term * z;
        price * exponent.exp()
    }

    /// Fill one path in place.
    ///
    /// `path[0]` must already hold the starting price and
    /// `draws.len() == path.len() - 1`.
    #[inline]
    pub fn fill_path(&self, path: &mut [f64], draws: &[f64]) {
        debug_assert_eq!(path.len(), draws.len() + 1);
        let mut price = path[0];
        for (slot, &z) in path[1..].iter_mut().zip(draws) {
            price = self.step(price, z);
            *slot = price;
        }
    }
}
