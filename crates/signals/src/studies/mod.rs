//! Reference studies built purely from the core primitives.

pub mod bollinger;
pub mod elder_ray;
pub mod macd;
pub mod rsi;
pub mod trix;

pub use bollinger::{BollingerBands, BollingerConfig, BollingerOutput};
pub use elder_ray::{ElderRay, ElderRayConfig, ElderRayOutput};
pub use macd::{Macd, MacdConfig, MacdOutput};
pub use rsi::{Rsi, RsiConfig, RsiOutput};
pub use trix::{Trix, TrixConfig, TrixOutput};
