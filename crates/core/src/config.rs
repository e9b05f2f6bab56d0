use crate::error::{Error, Result};
use crate::kind::MovingAverageKind;
use serde::{Deserialize, Serialize};

/// A moving average selection: which recurrence and over how many samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovingAverageSpec {
    pub kind: MovingAverageKind,
    pub length: usize,
}

impl MovingAverageSpec {
    pub fn new(kind: MovingAverageKind, length: usize) -> Self {
        Self { kind, length }
    }

    pub fn simple(length: usize) -> Self {
        Self::new(MovingAverageKind::Simple, length)
    }

    pub fn exponential(length: usize) -> Self {
        Self::new(MovingAverageKind::Exponential, length)
    }

    pub fn weighted(length: usize) -> Self {
        Self::new(MovingAverageKind::Weighted, length)
    }

    pub fn wilders(length: usize) -> Self {
        Self::new(MovingAverageKind::WildersSmoothing, length)
    }

    pub fn validate(&self) -> Result<()> {
        if self.length == 0 {
            tracing::warn!(kind = %self.kind, "Rejected moving average with zero length");
            return Err(Error::InvalidLength { length: 0 });
        }
        Ok(())
    }
}

/// Upper/lower band pair for overbought/oversold style classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSpec {
    pub upper: f64,
    pub lower: f64,
}

impl ThresholdSpec {
    pub fn new(upper: f64, lower: f64) -> Self {
        Self { upper, lower }
    }

    /// Both bounds finite and `upper > lower`.
    pub fn validate(&self) -> Result<()> {
        if !self.upper.is_finite() || !self.lower.is_finite() || self.upper <= self.lower {
            tracing::warn!(upper = self.upper, lower = self.lower, "Rejected thresholds");
            return Err(Error::InvalidThresholds {
                upper: self.upper,
                lower: self.lower,
            });
        }
        Ok(())
    }
}
