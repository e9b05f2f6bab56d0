use crate::dual::classify_dual_series;
use serde::{Deserialize, Serialize};
use tacore_core::{DualSignal, MovingAverageSpec, Result, Series};
use tacore_indicators::MovingAverageEngine;
use tracing::debug;

/// Elder-Ray index.
///
/// Bull power = high - MA(close), bear power = low - MA(close). Signals come
/// from the one-step momentum of each power: bullish when bull power starts
/// rising, bearish when bear power starts falling.
#[derive(Debug, Clone)]
pub struct ElderRay {
    config: ElderRayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ElderRayConfig {
    pub average: MovingAverageSpec,
}

impl Default for ElderRayConfig {
    fn default() -> Self {
        Self {
            average: MovingAverageSpec::exponential(13),
        }
    }
}

impl ElderRayConfig {
    pub fn validate(&self) -> Result<()> {
        self.average.validate()
    }
}

#[derive(Debug, Clone)]
pub struct ElderRayOutput {
    pub bull_power: Series,
    pub bear_power: Series,
    pub signals: Vec<DualSignal>,
}

impl ElderRay {
    pub fn new(config: ElderRayConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Outputs are as long as the shortest of the three inputs.
    pub fn compute(&self, high: &Series, low: &Series, close: &Series) -> Result<ElderRayOutput> {
        let baseline = MovingAverageEngine::apply_spec(self.config.average, close)?;
        let bull_power = high.zip_with(&baseline, |h, m| h - m);
        let bear_power = low.zip_with(&baseline, |l, m| l - m);

        let signals = classify_dual_series(&momentum(&bull_power), &momentum(&bear_power));
        debug!(samples = signals.len(), "Computed Elder-Ray");
        Ok(ElderRayOutput {
            bull_power,
            bear_power,
            signals,
        })
    }
}

fn momentum(values: &Series) -> Series {
    let slice = values.as_slice();
    (0..slice.len())
        .map(|i| if i == 0 { 0.0 } else { slice[i] - slice[i - 1] })
        .collect()
}
