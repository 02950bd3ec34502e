//! Sources of standard normal draws.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use thiserror::Error;

/// A source ran out before filling the requested batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("random source exhausted: needed {needed} draws, {available} available")]
pub struct DrawError {
    pub needed: usize,
    pub available: usize,
}

/// Supplies independent N(0, 1) draws in batches.
///
/// The simulator borrows the source for a single batch and never reseeds or
/// keeps it.
pub trait NormalSource {
    /// Fill `out` with standard normal draws, in order.
    fn fill_standard_normal(&mut self, out: &mut [f64]) -> Result<(), DrawError>;
}

impl<R: Rng + ?Sized> NormalSource for R {
    #[inline]
    fn fill_standard_normal(&mut self, out: &mut [f64]) -> Result<(), DrawError> {
        for z in out.iter_mut() {
            *z = StandardNormal.sample(self);
        }
        Ok(())
    }
}

/// Replays a fixed sequence of draws.
///
/// Useful for driving the simulator with draws produced elsewhere, or for
/// building ensembles from hand-picked shocks.
#[derive(Debug, Clone)]
pub struct ReplaySource {
    draws: Vec<f64>,
    cursor: usize,
}

impl ReplaySource {
    pub fn new(draws: Vec<f64>) -> Self {
        Self { draws, cursor: 0 }
    }

    /// Draws not yet handed out.
    pub fn remaining(&self) -> usize {
        self.draws.len() - self.cursor
    }
}

impl NormalSource for ReplaySource {
    fn fill_standard_normal(&mut self, out: &mut [f64]) -> Result<(), DrawError> {
        let available = self.remaining();
        if out.len() > available {
            return Err(DrawError {
                needed: out.len(),
                available,
            });
        }
        let end = self.cursor + out.len();
        out.copy_from_slice(&self.draws[self.cursor..end]);
        self.cursor = end;
        Ok(())
    }
}
