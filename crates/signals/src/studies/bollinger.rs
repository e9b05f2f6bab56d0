use crate::volatility::volatility_series;
use serde::{Deserialize, Serialize};
use tacore_core::{check_length, Error, Result, Series, ThresholdSpec, Volatility};
use tacore_indicators::WindowedAggregator;
use tracing::debug;

/// Bollinger Bands with a bandwidth-based volatility regime.
///
/// Middle band is the simple mean of the window, the bands sit `num_std`
/// population standard deviations away. The mean comes from a windowed
/// aggregator, the deviation is taken around it over the same window.
#[derive(Debug, Clone)]
pub struct BollingerBands {
    config: BollingerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BollingerConfig {
    pub length: usize,
    pub num_std: f64,
    /// Relative bandwidth below which volatility is Low.
    pub squeeze: f64,
    /// Relative bandwidth above which volatility is High.
    pub expansion: f64,
}

impl Default for BollingerConfig {
    fn default() -> Self {
        Self {
            length: 20,
            num_std: 2.0,
            squeeze: 0.05,
            expansion: 0.20,
        }
    }
}

impl BollingerConfig {
    pub fn validate(&self) -> Result<()> {
        check_length(self.length)?;
        if !self.num_std.is_finite() || self.num_std <= 0.0 {
            return Err(Error::Config(format!(
                "Bollinger num_std must be positive, got {}",
                self.num_std
            )));
        }
        ThresholdSpec::new(self.expansion, self.squeeze).validate()
    }
}

/// Bollinger Bands output.
#[derive(Debug, Clone)]
pub struct BollingerOutput {
    pub upper: Series,
    pub middle: Series,
    pub lower: Series,
    /// `(upper - lower) / middle`, 0 where the middle band is 0.
    pub bandwidth: Series,
    pub volatility: Vec<Volatility>,
}

impl BollingerBands {
    pub fn new(config: BollingerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Standard Bollinger Bands (20, 2).
    pub fn default_periods() -> Self {
        Self {
            config: BollingerConfig::default(),
        }
    }

    pub fn compute(&self, close: &Series) -> Result<BollingerOutput> {
        let len = self.config.length;
        let mut values = WindowedAggregator::with_capacity(close.len());

        let n = close.len();
        let mut upper = Series::with_capacity(n);
        let mut middle = Series::with_capacity(n);
        let mut lower = Series::with_capacity(n);
        let mut bandwidth = Series::with_capacity(n);

        for v in close.iter() {
            values.add(v);
            let mean = values.average(len);
            let history = values.history();
            let window = &history[history.len() - values.available(len)..];
            let variance =
                window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / window.len() as f64;
            let sd = variance.sqrt();
            let (u, l) = (mean + self.config.num_std * sd, mean - self.config.num_std * sd);
            upper.push(u);
            middle.push(mean);
            lower.push(l);
            bandwidth.push(if mean == 0.0 { 0.0 } else { (u - l) / mean });
        }

        let volatility = volatility_series(&bandwidth, self.config.squeeze, self.config.expansion);
        debug!(samples = n, length = len, "Computed Bollinger Bands");
        Ok(BollingerOutput {
            upper,
            middle,
            lower,
            bandwidth,
            volatility,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bollinger_basic() {
        let bb = BollingerBands::new(BollingerConfig {
            length: 3,
            ..Default::default()
        })
        .unwrap();
        let out = bb.compute(&Series::from(vec![10.0, 11.0, 12.0])).unwrap();
        assert!((out.middle.as_slice()[2] - 11.0).abs() < 1e-9);
        assert!(out.upper.as_slice()[2] > out.middle.as_slice()[2]);
        assert!(out.lower.as_slice()[2] < out.middle.as_slice()[2]);
        // Population sd of 10, 11, 12 is sqrt(2/3).
        let sd = (2.0_f64 / 3.0).sqrt();
        assert!((out.upper.as_slice()[2] - (11.0 + 2.0 * sd)).abs() < 1e-9);
    }

    #[test]
    fn test_bollinger_flat_is_low_volatility() {
        let out = BollingerBands::default_periods()
            .compute(&Series::from(vec![50.0; 30]))
            .unwrap();
        assert!(out.volatility.iter().all(|v| *v == Volatility::Low));
        assert!(out.bandwidth.iter().all(|w| w == 0.0));
    }

    #[test]
    fn test_bollinger_wild_swings_are_high_volatility() {
        let close: Series = (0..30).map(|i| if i % 2 == 0 { 50.0 } else { 100.0 }).collect();
        let out = BollingerBands::default_periods().compute(&close).unwrap();
        assert_eq!(out.volatility.last(), Some(&Volatility::High));
    }

    #[test]
    fn test_bollinger_small_spread_at_high_price_level() {
        let close: Series = (0..500_000)
            .map(|i| if i % 2 == 0 { 10_000.01 } else { 9_999.99 })
            .collect();
        let out = BollingerBands::default_periods().compute(&close).unwrap();
        for i in [100, 250_000, 499_999] {
            let sd = (out.upper.as_slice()[i] - out.middle.as_slice()[i]) / 2.0;
            assert!((sd - 0.01).abs() < 1e-6, "i={i} sd={sd}");
            assert!(out.lower.as_slice()[i] < out.middle.as_slice()[i]);
        }
    }

    #[test]
    fn test_bollinger_recovers_after_nan() {
        let mut close = vec![f64::NAN];
        close.extend((0..10).map(|i| 10.0 + i as f64));
        let bb = BollingerBands::new(BollingerConfig {
            length: 3,
            ..Default::default()
        })
        .unwrap();
        let out = bb.compute(&Series::from(close)).unwrap();
        assert!(out.middle.as_slice()[2].is_nan());
        let last = out.upper.len() - 1;
        assert!((out.middle.as_slice()[last] - 18.0).abs() < 1e-9);
        let sd = (2.0_f64 / 3.0).sqrt();
        assert!((out.upper.as_slice()[last] - (18.0 + 2.0 * sd)).abs() < 1e-9);
    }

    #[test]
    fn test_bollinger_rejects_bad_config() {
        let config = BollingerConfig {
            squeeze: 0.3,
            expansion: 0.1,
            ..Default::default()
        };
        assert!(BollingerBands::new(config).is_err());
        let config = BollingerConfig {
            length: 0,
            ..Default::default()
        };
        assert!(BollingerBands::new(config).is_err());
    }
}
