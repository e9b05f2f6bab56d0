use crate::compare::crossover_series;
use serde::{Deserialize, Serialize};
use tacore_core::{Error, MovingAverageSpec, Result, Series, Trend};
use tacore_indicators::MovingAverageEngine;
use tracing::debug;

/// TRIX: one-step percentage rate of change of a triple-smoothed series.
#[derive(Debug, Clone)]
pub struct Trix {
    config: TrixConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrixConfig {
    pub average: MovingAverageSpec,
    /// How many times the average is applied.
    pub depth: usize,
}

impl Default for TrixConfig {
    fn default() -> Self {
        Self {
            average: MovingAverageSpec::exponential(15),
            depth: 3,
        }
    }
}

impl TrixConfig {
    pub fn validate(&self) -> Result<()> {
        self.average.validate()?;
        if self.depth == 0 {
            return Err(Error::Config("TRIX depth must be > 0".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct TrixOutput {
    pub smoothed: Series,
    pub trix: Series,
    pub trend: Vec<Trend>,
}

impl Trix {
    pub fn new(config: TrixConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn compute(&self, close: &Series) -> Result<TrixOutput> {
        let smoothed = MovingAverageEngine::apply_repeated(
            self.config.average.kind,
            self.config.average.length,
            close,
            self.config.depth,
        )?;
        let trix = rate_of_change(&smoothed);
        let trend = crossover_series(&trix, false);
        debug!(samples = trix.len(), depth = self.config.depth, "Computed TRIX");
        Ok(TrixOutput {
            smoothed,
            trix,
            trend,
        })
    }
}

/// Percentage change from the previous sample; 0 at index 0 and wherever
/// the previous sample is 0.
fn rate_of_change(values: &Series) -> Series {
    let slice = values.as_slice();
    (0..slice.len())
        .map(|i| {
            if i == 0 || slice[i - 1] == 0.0 {
                0.0
            } else {
                (slice[i] - slice[i - 1]) / slice[i - 1] * 100.0
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_of_change() {
        let roc = rate_of_change(&Series::from(vec![0.0, 10.0, 11.0, 9.9]));
        assert_eq!(roc.get(0), Some(0.0));
        assert_eq!(roc.get(1), Some(0.0));
        assert!((roc.as_slice()[2] - 10.0).abs() < 1e-9);
        assert!((roc.as_slice()[3] + 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_trix_uptrend_positive() {
        let close: Series = (1..=50).map(|i| 100.0 + i as f64).collect();
        let out = Trix::new(TrixConfig::default()).unwrap().compute(&close).unwrap();
        assert_eq!(out.trix.len(), 50);
        assert!(out.trix.iter().skip(1).all(|v| v > 0.0));
        // Turns positive at step 1 only.
        assert_eq!(out.trend[1], Trend::Bullish);
        assert!(out.trend[2..].iter().all(|t| *t == Trend::Neutral));
    }

    #[test]
    fn test_trix_rejects_zero_depth() {
        let config = TrixConfig {
            depth: 0,
            ..Default::default()
        };
        assert!(Trix::new(config).is_err());
    }
}
