/// Errors raised for caller misuse of the core primitives.
///
/// Short history and zero denominators are not errors: those paths return a
/// defined value (usually `0.0`) and leave interpretation to the caller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid window length: {length} (must be > 0)")]
    InvalidLength { length: usize },
    #[error("Unsupported moving average kind: {0}")]
    UnsupportedKind(String),
    #[error("Invalid thresholds: upper {upper} must be finite and above lower {lower}")]
    InvalidThresholds { upper: f64, lower: f64 },
    #[error("Config error: {0}")]
    Config(String),
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Reject a zero window length.
pub fn check_length(length: usize) -> Result<usize> {
    if length == 0 {
        Err(Error::InvalidLength { length })
    } else {
        Ok(length)
    }
}
