use crate::window::WindowedAggregator;
use crate::Indicator;
use tacore_core::{check_length, Result};

/// Linearly Weighted Moving Average (WMA).
///
/// The newest sample is weighted `period`, the oldest in the window 1.
/// While fewer than `period` samples exist the available prefix is weighted
/// `1..=n` instead.
///
/// The weighted numerator is updated in O(1): once the window is full every
/// retained sample loses one unit of weight, which is exactly the window
/// sum, and the new sample enters with weight `period`. The numerator is
/// recomputed exactly every `period * REBUILD_INTERVAL` steps to bound
/// accumulated rounding, and as soon as a non-finite sample has left the
/// window.
#[derive(Debug, Clone)]
pub struct Wma {
    len: usize,
    window: WindowedAggregator,
    weighted_sum: f64,
    since_rebuild: usize,
}

const REBUILD_INTERVAL: usize = 64;

impl Wma {
    pub fn new(period: usize) -> Result<Self> {
        Ok(Self {
            len: check_length(period)?,
            window: WindowedAggregator::new(),
            weighted_sum: 0.0,
            since_rebuild: 0,
        })
    }

    fn rebuild(&mut self) {
        let history = self.window.history();
        let start = history.len() - self.window.available(self.len);
        self.weighted_sum = history[start..]
            .iter()
            .enumerate()
            .map(|(i, v)| (i + 1) as f64 * v)
            .sum();
        self.since_rebuild = 0;
    }

    fn current(&self) -> f64 {
        let n = self.window.available(self.len) as f64;
        if n == 0.0 {
            return 0.0;
        }
        self.weighted_sum / (n * (n + 1.0) / 2.0)
    }
}

impl Indicator for Wma {
    fn next(&mut self, value: f64) -> f64 {
        let seen = self.window.len();
        if seen < self.len {
            self.weighted_sum += (seen + 1) as f64 * value;
        } else {
            self.weighted_sum += self.len as f64 * value - self.window.sum(self.len);
        }
        self.window.add(value);
        self.since_rebuild += 1;

        let stale = !self.weighted_sum.is_finite() && self.window.is_finite(self.len);
        if stale || self.since_rebuild >= self.len.saturating_mul(REBUILD_INTERVAL) {
            self.rebuild();
        }
        self.current()
    }

    fn value(&self) -> Option<f64> {
        if self.window.is_empty() {
            None
        } else {
            Some(self.current())
        }
    }

    fn reset(&mut self) {
        self.window.clear();
        self.weighted_sum = 0.0;
        self.since_rebuild = 0;
    }

    fn period(&self) -> usize {
        self.len
    }

    fn is_ready(&self) -> bool {
        self.window.len() >= self.len
    }
}
