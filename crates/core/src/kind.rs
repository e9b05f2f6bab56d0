use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Recurrence family of a moving average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum MovingAverageKind {
    /// Arithmetic mean of the trailing window.
    #[serde(alias = "sma")]
    Simple,
    /// `α = 2 / (length + 1)`, seeded with the first input.
    #[serde(alias = "ema")]
    Exponential,
    /// Linearly weighted mean, newest sample weighted `length`.
    #[serde(alias = "wma")]
    Weighted,
    /// `α = 1 / length`, seeded with the first input.
    #[serde(alias = "wilders")]
    WildersSmoothing,
}

impl MovingAverageKind {
    pub const ALL: [MovingAverageKind; 4] = [
        MovingAverageKind::Simple,
        MovingAverageKind::Exponential,
        MovingAverageKind::Weighted,
        MovingAverageKind::WildersSmoothing,
    ];

    /// Short name used in configs and logs.
    pub fn short_name(&self) -> &'static str {
        match self {
            MovingAverageKind::Simple => "sma",
            MovingAverageKind::Exponential => "ema",
            MovingAverageKind::Weighted => "wma",
            MovingAverageKind::WildersSmoothing => "wilders",
        }
    }
}

impl fmt::Display for MovingAverageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for MovingAverageKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sma" | "simple" => Ok(MovingAverageKind::Simple),
            "ema" | "exponential" => Ok(MovingAverageKind::Exponential),
            "wma" | "weighted" => Ok(MovingAverageKind::Weighted),
            "wilders" | "wilder" | "smma" | "rma" | "wilders_smoothing" => {
                Ok(MovingAverageKind::WildersSmoothing)
            }
            _ => Err(Error::UnsupportedKind(s.to_string())),
        }
    }
}
