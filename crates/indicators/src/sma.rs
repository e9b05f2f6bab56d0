use crate::window::WindowedAggregator;
use crate::Indicator;
use tacore_core::{check_length, Result};

/// Simple Moving Average (SMA).
#[derive(Debug, Clone)]
pub struct Sma {
    len: usize,
    window: WindowedAggregator,
}

impl Sma {
    pub fn new(period: usize) -> Result<Self> {
        Ok(Self {
            len: check_length(period)?,
            window: WindowedAggregator::new(),
        })
    }
}

impl Indicator for Sma {
    fn next(&mut self, value: f64) -> f64 {
        self.window.add(value);
        self.window.average(self.len)
    }

    fn value(&self) -> Option<f64> {
        if self.window.is_empty() {
            None
        } else {
            Some(self.window.average(self.len))
        }
    }

    fn reset(&mut self) {
        self.window.clear();
    }

    fn period(&self) -> usize {
        self.len
    }

    fn is_ready(&self) -> bool {
        self.window.len() >= self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn test_sma_basic() {
        let mut sma = Sma::new(3).unwrap();
        assert_eq!(sma.next(1.0), 1.0);
        assert_eq!(sma.next(2.0), 1.5);
        assert_eq!(sma.next(3.0), 2.0);
        assert_eq!(sma.next(4.0), 3.0);
        assert_eq!(sma.next(5.0), 4.0);
    }

    #[test]
    fn test_sma_scenario() {
        let mut sma = Sma::new(3).unwrap();
        let out: Vec<f64> = [10.0, 11.0, 9.0, 12.0, 12.0, 8.0]
            .iter()
            .map(|v| sma.next(*v))
            .collect();
        let expected = [10.0, 10.5, 10.0, 32.0 / 3.0, 11.0, 32.0 / 3.0];
        for (a, b) in out.iter().zip(expected.iter()) {
            assert_close(*a, *b);
        }
    }

    #[test]
    fn test_sma_reset() {
        let mut sma = Sma::new(2).unwrap();
        sma.next(10.0);
        sma.next(20.0);
        assert!(sma.is_ready());
        sma.reset();
        assert!(!sma.is_ready());
        assert_eq!(sma.value(), None);
        assert_eq!(sma.next(5.0), 5.0);
        assert_eq!(sma.next(15.0), 10.0);
    }

    #[test]
    fn test_sma_zero_period() {
        assert!(Sma::new(0).is_err());
    }
}
