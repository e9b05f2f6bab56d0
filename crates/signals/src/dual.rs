use tacore_core::{DualSignal, Series};

/// Current/previous pair of one signed quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub current: f64,
    pub previous: f64,
}

impl Track {
    pub fn new(current: f64, previous: f64) -> Self {
        Self { current, previous }
    }

    /// Crossed from non-positive to positive.
    pub fn crossed_up(&self) -> bool {
        self.current > 0.0 && self.previous <= 0.0
    }

    /// Crossed from non-negative to negative.
    pub fn crossed_down(&self) -> bool {
        self.current < 0.0 && self.previous >= 0.0
    }
}

/// Classify two independent tracks (e.g. bull-power and bear-power
/// momentum).
///
/// The bull track fires when it crosses above zero, the bear track when it
/// crosses below zero. One firing track gives its direction, both firing
/// give `Neutral`, neither gives `Absent`.
pub fn classify_dual(bull: Track, bear: Track) -> DualSignal {
    DualSignal::from_tracks(bull.crossed_up(), bear.crossed_down())
}

/// [`classify_dual`] at every step. Index 0 is `Absent`; the result is as
/// long as the shorter input.
pub fn classify_dual_series(bull: &Series, bear: &Series) -> Vec<DualSignal> {
    let len = bull.len().min(bear.len());
    let (bull, bear) = (bull.as_slice(), bear.as_slice());
    (0..len)
        .map(|i| {
            if i == 0 {
                DualSignal::Absent
            } else {
                classify_dual(
                    Track::new(bull[i], bull[i - 1]),
                    Track::new(bear[i], bear[i - 1]),
                )
            }
        })
        .collect()
}
