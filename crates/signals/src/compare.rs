//! Compare family: zero-crossing and direction rules over current/previous
//! deltas.

use tacore_core::{Series, Trend};

/// Zero-crossing of a delta between two consecutive steps.
///
/// Bullish when `current > 0` and `previous <= 0`, Bearish when
/// `current < 0` and `previous >= 0`, Neutral otherwise. `reverse` swaps
/// the polarity for indicators where a rising raw value is bearish.
pub fn crossover(current: f64, previous: f64, reverse: bool) -> Trend {
    let trend = if current > 0.0 && previous <= 0.0 {
        Trend::Bullish
    } else if current < 0.0 && previous >= 0.0 {
        Trend::Bearish
    } else {
        Trend::Neutral
    };
    if reverse {
        trend.opposite()
    } else {
        trend
    }
}

/// Line A crossing line B (fast over slow, MACD over its signal line).
///
/// Equivalent to [`crossover`] applied to the spread `a - b`.
pub fn line_crossover(current_a: f64, previous_a: f64, current_b: f64, previous_b: f64) -> Trend {
    crossover(current_a - current_b, previous_a - previous_b, false)
}

/// Direction of travel: Bullish when strictly rising, Bearish when strictly
/// falling, Neutral when flat.
pub fn direction(current: f64, previous: f64) -> Trend {
    if current > previous {
        Trend::Bullish
    } else if current < previous {
        Trend::Bearish
    } else {
        Trend::Neutral
    }
}

/// [`crossover`] at every step of `deltas`. Index 0 has no previous value
/// and is Neutral.
pub fn crossover_series(deltas: &Series, reverse: bool) -> Vec<Trend> {
    pairwise(deltas, |current, previous| crossover(current, previous, reverse))
}

/// [`line_crossover`] at every step; length is that of the shorter line.
pub fn line_crossover_series(a: &Series, b: &Series) -> Vec<Trend> {
    crossover_series(&a.zip_with(b, |x, y| x - y), false)
}

/// [`direction`] at every step. Index 0 is Neutral.
pub fn direction_series(values: &Series) -> Vec<Trend> {
    pairwise(values, direction)
}

fn pairwise(values: &Series, rule: impl Fn(f64, f64) -> Trend) -> Vec<Trend> {
    let slice = values.as_slice();
    let mut out = Vec::with_capacity(slice.len());
    if !slice.is_empty() {
        out.push(Trend::Neutral);
    }
    out.extend(slice.windows(2).map(|w| rule(w[1], w[0])));
    out
}
