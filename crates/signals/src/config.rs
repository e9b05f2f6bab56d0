use crate::studies::{BollingerConfig, ElderRayConfig, MacdConfig, RsiConfig, TrixConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tacore_core::{Error, Result};
use tracing::info;

/// Settings for every reference study. Missing sections fall back to the
/// conventional defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StudiesConfig {
    pub rsi: RsiConfig,
    pub macd: MacdConfig,
    pub trix: TrixConfig,
    pub elder_ray: ElderRayConfig,
    pub bollinger: BollingerConfig,
}

impl StudiesConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: StudiesConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        let config = Self::from_toml_str(&raw)?;
        info!(path = %path.display(), "Loaded studies config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.rsi.validate()?;
        self.macd.validate()?;
        self.trix.validate()?;
        self.elder_ray.validate()?;
        self.bollinger.validate()
    }
}
