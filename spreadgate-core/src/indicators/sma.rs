//! Simple Moving Average (SMA).
//!
//! Arithmetic mean of close prices over a trailing window.

use crate::domain::Bar;

#[derive(Debug, Clone, Copy)]
pub struct Sma {
    period: usize,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "SMA period must be >= 1");
        Self { period }
    }

    /// Mean of the last `period` closes, or `None` when the history is
    /// shorter than the window. The caller decides how to surface the
    /// short-history case; this never fabricates a degraded value.
    pub fn latest(&self, bars: &[Bar]) -> Option<f64> {
        if bars.len() < self.period {
            return None;
        }
        let window = &bars[bars.len() - self.period..];
        let sum: f64 = window.iter().map(|bar| bar.close).sum();
        Some(sum / self.period as f64)
    }
}
