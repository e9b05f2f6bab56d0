//! Signal classification over indicator trajectories.
//!
//! Families:
//! - [`compare`]: zero-crossing, line-crossing and direction rules ([`Trend`])
//! - [`threshold`]: overbought/oversold state machine ([`Regime`], [`Zone`])
//! - [`dual`]: two independent crossing tracks ([`DualSignal`])
//! - [`volatility`]: dispersion regime ([`Volatility`])
//!
//! [`studies`] holds thin indicators that drive these together with the
//! windowed aggregator and moving-average engine.

pub mod compare;
pub mod config;
pub mod dual;
pub mod studies;
pub mod threshold;
pub mod volatility;

pub use compare::{crossover, direction, line_crossover};
pub use config::StudiesConfig;
pub use dual::{classify_dual, Track};
pub use tacore_core::{DualSignal, Regime, Trend, Volatility, Zone};
pub use threshold::{classify_threshold, zone, ThresholdClassifier};
pub use volatility::volatility;
