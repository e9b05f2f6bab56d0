use tacore_core::{Series, Volatility};

/// Volatility regime of a dispersion value against a low/high band.
///
/// Values equal to a bound count as `Normal`.
pub fn volatility(value: f64, low: f64, high: f64) -> Volatility {
    if value > high {
        Volatility::High
    } else if value < low {
        Volatility::Low
    } else {
        Volatility::Normal
    }
}

pub fn volatility_series(values: &Series, low: f64, high: f64) -> Vec<Volatility> {
    values.iter().map(|v| volatility(v, low, high)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volatility_bands() {
        assert_eq!(volatility(0.3, 0.05, 0.2), Volatility::High);
        assert_eq!(volatility(0.01, 0.05, 0.2), Volatility::Low);
        assert_eq!(volatility(0.1, 0.05, 0.2), Volatility::Normal);
        assert_eq!(volatility(0.2, 0.05, 0.2), Volatility::Normal);
    }

    #[test]
    fn test_volatility_series_len() {
        let v = Series::from(vec![0.0, 1.0, 0.5]);
        assert_eq!(
            volatility_series(&v, 0.25, 0.75),
            vec![Volatility::Low, Volatility::High, Volatility::Normal]
        );
    }
}
