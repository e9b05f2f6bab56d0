//! Overbought/oversold classification.
//!
//! The regime is a two-state machine {Buy, Sell} entered on threshold
//! crossings, with `Neutral` before the first crossing:
//!
//! ```text
//!   Neutral --(cross above lower)--> Buy
//!   Neutral --(cross below upper)--> Sell
//!   Buy     --(cross below upper)--> Sell
//!   Sell    --(cross above lower)--> Buy
//! ```
//!
//! A crossing below the upper band requires `previous >= upper` and
//! `current < upper`; a crossing above the lower band requires
//! `previous <= lower` and `current > lower`. Any other step keeps the
//! prior regime.

use tacore_core::{Regime, Result, Series, ThresholdSpec, Zone};
use tracing::trace;

/// Pure single-step form of the threshold rule.
pub fn classify_threshold(
    current: f64,
    previous: f64,
    upper: f64,
    lower: f64,
    prior: Regime,
) -> Regime {
    if previous >= upper && current < upper {
        Regime::Sell
    } else if previous <= lower && current > lower {
        Regime::Buy
    } else {
        prior
    }
}

/// Level-only zone of a value, no crossing or memory involved.
pub fn zone(value: f64, upper: f64, lower: f64) -> Zone {
    if value > upper {
        Zone::Overbought
    } else if value < lower {
        Zone::Oversold
    } else {
        Zone::Neutral
    }
}

/// Stateful threshold classifier carrying the current regime across steps.
#[derive(Debug, Clone)]
pub struct ThresholdClassifier {
    upper: f64,
    lower: f64,
    regime: Regime,
}

impl ThresholdClassifier {
    pub fn new(upper: f64, lower: f64) -> Result<Self> {
        Self::from_spec(ThresholdSpec::new(upper, lower))
    }

    pub fn from_spec(spec: ThresholdSpec) -> Result<Self> {
        spec.validate()?;
        Ok(Self {
            upper: spec.upper,
            lower: spec.lower,
            regime: Regime::Neutral,
        })
    }

    /// Advance the state machine by one step.
    pub fn classify(&mut self, current: f64, previous: f64) -> Regime {
        let next = classify_threshold(current, previous, self.upper, self.lower, self.regime);
        if next != self.regime {
            trace!(from = ?self.regime, to = ?next, current, previous, "Regime transition");
        }
        self.regime = next;
        next
    }

    /// Classify a whole series from a fresh state. Index 0 is Neutral.
    pub fn classify_series(&mut self, values: &Series) -> Vec<Regime> {
        self.reset();
        let slice = values.as_slice();
        let mut out = Vec::with_capacity(slice.len());
        if !slice.is_empty() {
            out.push(self.regime);
        }
        for w in slice.windows(2) {
            out.push(self.classify(w[1], w[0]));
        }
        out
    }

    pub fn zone(&self, value: f64) -> Zone {
        zone(value, self.upper, self.lower)
    }

    pub fn regime(&self) -> Regime {
        self.regime
    }

    pub fn reset(&mut self) {
        self.regime = Regime::Neutral;
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }
}
