use crate::Indicator;
use tacore_core::{check_length, Result};

/// Exponential Moving Average (EMA) and Wilder's smoothing.
///
/// `out[0] = in[0]`, then `out[i] = α·in[i] + (1 - α)·out[i-1]`.
/// Standard EMA uses `α = 2 / (period + 1)`; Wilder's smoothing (RSI, ATR)
/// uses `α = 1 / period`.
#[derive(Debug, Clone)]
pub struct Ema {
    len: usize,
    alpha: f64,
    current: Option<f64>,
    count: usize,
}

impl Ema {
    pub fn new(period: usize) -> Result<Self> {
        let len = check_length(period)?;
        Ok(Self::with_alpha(len, 2.0 / (len as f64 + 1.0)))
    }

    /// Wilder's smoothing, `α = 1 / period`.
    pub fn wilders(period: usize) -> Result<Self> {
        let len = check_length(period)?;
        Ok(Self::with_alpha(len, 1.0 / len as f64))
    }

    fn with_alpha(len: usize, alpha: f64) -> Self {
        Self {
            len,
            alpha,
            current: None,
            count: 0,
        }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Indicator for Ema {
    fn next(&mut self, value: f64) -> f64 {
        self.count += 1;
        let out = match self.current {
            None => value,
            Some(prev) => self.alpha * value + (1.0 - self.alpha) * prev,
        };
        self.current = Some(out);
        out
    }

    fn value(&self) -> Option<f64> {
        self.current
    }

    fn reset(&mut self) {
        self.current = None;
        self.count = 0;
    }

    fn period(&self) -> usize {
        self.len
    }

    fn is_ready(&self) -> bool {
        self.count >= self.len
    }
}
