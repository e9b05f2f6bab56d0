pub mod config;
pub mod error;
pub mod kind;
pub mod series;
pub mod signal;

pub use config::*;
pub use error::{check_length, Error, Result};
pub use kind::*;
pub use series::*;
pub use signal::*;
