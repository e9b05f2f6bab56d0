use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Crossover / direction
// ---------------------------------------------------------------------------

/// Bipolar trend classification produced by the compare family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Bullish,
    Bearish,
    #[default]
    Neutral,
}

impl Trend {
    /// Swap bullish and bearish; neutral stays neutral.
    pub fn opposite(&self) -> Self {
        match self {
            Trend::Bullish => Trend::Bearish,
            Trend::Bearish => Trend::Bullish,
            Trend::Neutral => Trend::Neutral,
        }
    }

    pub fn is_bullish(&self) -> bool {
        matches!(self, Trend::Bullish)
    }

    pub fn is_bearish(&self) -> bool {
        matches!(self, Trend::Bearish)
    }
}

// ---------------------------------------------------------------------------
// Overbought / oversold
// ---------------------------------------------------------------------------

/// Regime of the threshold state machine.
///
/// `Neutral` is only observed before the first threshold crossing; after
/// that the regime alternates between `Buy` and `Sell`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    Buy,
    Sell,
    #[default]
    Neutral,
}

impl Regime {
    pub fn is_buy(&self) -> bool {
        matches!(self, Regime::Buy)
    }

    pub fn is_sell(&self) -> bool {
        matches!(self, Regime::Sell)
    }
}

/// Position of a value relative to an upper/lower band, without history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Overbought,
    Oversold,
    #[default]
    Neutral,
}

// ---------------------------------------------------------------------------
// Dual track
// ---------------------------------------------------------------------------

/// Combined result of two independently classified tracks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DualSignal {
    /// Only the bullish track fired.
    Bullish,
    /// Only the bearish track fired.
    Bearish,
    /// Both tracks fired on the same step.
    Neutral,
    /// Neither track fired.
    #[default]
    Absent,
}

impl DualSignal {
    pub fn from_tracks(bull_fired: bool, bear_fired: bool) -> Self {
        match (bull_fired, bear_fired) {
            (true, false) => DualSignal::Bullish,
            (false, true) => DualSignal::Bearish,
            (true, true) => DualSignal::Neutral,
            (false, false) => DualSignal::Absent,
        }
    }
}

// ---------------------------------------------------------------------------
// Volatility
// ---------------------------------------------------------------------------

/// Volatility regime of a dispersion measure (band width, ATR, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Volatility {
    High,
    Low,
    #[default]
    Normal,
}
