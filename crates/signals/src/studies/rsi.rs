use crate::threshold::ThresholdClassifier;
use serde::{Deserialize, Serialize};
use tacore_core::{MovingAverageSpec, Regime, Result, Series, ThresholdSpec};
use tacore_indicators::MovingAverageEngine;
use tracing::debug;

/// Relative Strength Index.
///
/// Gains and losses are smoothed separately (Wilder's smoothing by default),
/// then `RSI = 100 - 100 / (1 + avg_gain / avg_loss)`. The regime flips to
/// Sell when RSI falls back under the upper band and to Buy when it climbs
/// back over the lower band.
#[derive(Debug, Clone)]
pub struct Rsi {
    config: RsiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RsiConfig {
    pub average: MovingAverageSpec,
    pub thresholds: ThresholdSpec,
}

impl Default for RsiConfig {
    fn default() -> Self {
        Self {
            average: MovingAverageSpec::wilders(14),
            thresholds: ThresholdSpec::new(70.0, 30.0),
        }
    }
}

impl RsiConfig {
    pub fn validate(&self) -> Result<()> {
        self.average.validate()?;
        self.thresholds.validate()
    }
}

#[derive(Debug, Clone)]
pub struct RsiOutput {
    pub rsi: Series,
    pub signals: Vec<Regime>,
}

impl Rsi {
    pub fn new(config: RsiConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn compute(&self, close: &Series) -> Result<RsiOutput> {
        let values = close.as_slice();
        let mut gains = Series::with_capacity(values.len());
        let mut losses = Series::with_capacity(values.len());
        for i in 0..values.len() {
            let change = if i == 0 { 0.0 } else { values[i] - values[i - 1] };
            gains.push(change.max(0.0));
            losses.push((-change).max(0.0));
        }

        let avg_gain = MovingAverageEngine::apply_spec(self.config.average, &gains)?;
        let avg_loss = MovingAverageEngine::apply_spec(self.config.average, &losses)?;
        let rsi = avg_gain.zip_with(&avg_loss, rsi_value);

        let mut classifier = ThresholdClassifier::from_spec(self.config.thresholds)?;
        let signals = classifier.classify_series(&rsi);

        debug!(samples = rsi.len(), length = self.config.average.length, "Computed RSI");
        Ok(RsiOutput { rsi, signals })
    }
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        if avg_gain == 0.0 {
            50.0
        } else {
            100.0
        }
    } else {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    }
}
