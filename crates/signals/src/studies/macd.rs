use crate::compare::line_crossover_series;
use serde::{Deserialize, Serialize};
use tacore_core::{Error, MovingAverageSpec, Result, Series, Trend};
use tacore_indicators::MovingAverageEngine;
use tracing::debug;

/// MACD (Moving Average Convergence Divergence).
///
/// Composed of three averages:
/// - Fast (default EMA 12)
/// - Slow (default EMA 26)
/// - Signal, applied to the MACD line itself (default EMA 9)
///
/// The trend is Bullish when the MACD line crosses above its signal line
/// and Bearish on the opposite crossing.
#[derive(Debug, Clone)]
pub struct Macd {
    config: MacdConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MacdConfig {
    pub fast: MovingAverageSpec,
    pub slow: MovingAverageSpec,
    pub signal: MovingAverageSpec,
}

impl Default for MacdConfig {
    fn default() -> Self {
        Self {
            fast: MovingAverageSpec::exponential(12),
            slow: MovingAverageSpec::exponential(26),
            signal: MovingAverageSpec::exponential(9),
        }
    }
}

impl MacdConfig {
    pub fn validate(&self) -> Result<()> {
        self.fast.validate()?;
        self.slow.validate()?;
        self.signal.validate()?;
        if self.fast.length >= self.slow.length {
            return Err(Error::Config(format!(
                "MACD fast length {} must be less than slow length {}",
                self.fast.length, self.slow.length
            )));
        }
        Ok(())
    }
}

/// MACD output with all three components.
#[derive(Debug, Clone)]
pub struct MacdOutput {
    pub macd: Series,
    pub signal: Series,
    pub histogram: Series,
    pub trend: Vec<Trend>,
}

impl Macd {
    pub fn new(config: MacdConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Standard MACD (12, 26, 9).
    pub fn default_periods() -> Self {
        Self {
            config: MacdConfig::default(),
        }
    }

    pub fn compute(&self, close: &Series) -> Result<MacdOutput> {
        let fast = MovingAverageEngine::apply_spec(self.config.fast, close)?;
        let slow = MovingAverageEngine::apply_spec(self.config.slow, close)?;
        let macd = fast.zip_with(&slow, |f, s| f - s);
        let signal = MovingAverageEngine::apply_spec(self.config.signal, &macd)?;
        let histogram = macd.zip_with(&signal, |m, s| m - s);
        let trend = line_crossover_series(&macd, &signal);

        debug!(samples = macd.len(), "Computed MACD");
        Ok(MacdOutput {
            macd,
            signal,
            histogram,
            trend,
        })
    }
}
