pub mod ema;
pub mod engine;
pub mod sma;
pub mod window;
pub mod wma;

pub use engine::MovingAverageEngine;
pub use window::{rolling_average, rolling_sum, WindowedAggregator};

/// Trait for streaming (incremental) moving averages.
/// Feed one value at a time; the average maintains its own recurrence state.
pub trait Indicator: Send + Sync {
    /// Process the next value and return the updated output.
    ///
    /// Output is defined from the first sample on; short histories are
    /// averaged over the available prefix.
    fn next(&mut self, value: f64) -> f64;

    /// The latest output, or `None` before any input.
    fn value(&self) -> Option<f64>;

    /// Reset the average to its initial state.
    fn reset(&mut self);

    /// The configured window length.
    fn period(&self) -> usize;

    /// Whether at least `period()` samples have been seen.
    fn is_ready(&self) -> bool;
}
