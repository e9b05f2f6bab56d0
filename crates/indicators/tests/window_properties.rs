//! Property tests for the windowed aggregator.

use proptest::prelude::*;
use tacore_indicators::WindowedAggregator;

fn arb_values(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1000.0..1000.0_f64, 0..=max_len)
}

/// Mostly finite samples with the occasional NaN or infinity.
fn arb_values_with_gaps(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    let sample = prop_oneof![
        20 => -1000.0..1000.0_f64,
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
        1 => Just(f64::NEG_INFINITY),
    ];
    prop::collection::vec(sample, 0..=max_len)
}

fn tolerance(magnitude: f64) -> f64 {
    1e-9 * magnitude.max(1.0) * 1000.0
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// After every add, sum(k) equals the literal sum of the last k values.
    #[test]
    fn prop_sum_matches_brute_force(values in arb_values(1000)) {
        let mut agg = WindowedAggregator::with_capacity(values.len());
        for n in 1..=values.len() {
            agg.add(values[n - 1]);
            let mut brute = 0.0;
            let mut magnitude = 0.0;
            for k in 1..=n {
                brute += values[n - k];
                magnitude += values[n - k].abs();
                let got = agg.sum(k);
                prop_assert!(
                    (got - brute).abs() <= tolerance(magnitude + agg.total().abs()),
                    "n={} k={} got={} brute={}", n, k, got, brute
                );
            }
        }
    }

    /// Windows longer than the history never panic and average over what exists.
    #[test]
    fn prop_short_history_is_safe(values in arb_values(50), extra in 1usize..100) {
        let mut agg = WindowedAggregator::new();
        for v in &values {
            agg.add(*v);
        }
        let n = values.len();
        let k = n + extra;
        let total: f64 = values.iter().sum();
        prop_assert!((agg.sum(k) - total).abs() <= tolerance(total.abs() + n as f64 * 1000.0));
        if n == 0 {
            prop_assert_eq!(agg.average(k), 0.0);
        } else {
            let expected = total / n as f64;
            prop_assert!((agg.average(k) - expected).abs() <= tolerance(expected.abs() + 1000.0));
        }
    }

    /// Non-finite samples only affect the windows that contain them.
    #[test]
    fn prop_non_finite_samples_are_local(values in arb_values_with_gaps(300), k in 1usize..40) {
        let mut agg = WindowedAggregator::new();
        for n in 1..=values.len() {
            agg.add(values[n - 1]);
            let window = &values[n - k.min(n)..n];
            let brute: f64 = window.iter().sum();
            let got = agg.sum(k);
            if window.iter().all(|v| v.is_finite()) {
                let magnitude: f64 = window.iter().map(|v| v.abs()).sum();
                prop_assert!(agg.is_finite(k));
                prop_assert!((got - brute).abs() <= tolerance(magnitude + 1000.0 * n as f64),
                    "n={} k={} got={} brute={}", n, k, got, brute);
            } else {
                prop_assert!(!agg.is_finite(k));
                prop_assert_eq!(got.is_nan(), brute.is_nan());
                if !brute.is_nan() {
                    prop_assert_eq!(got, brute);
                }
            }
        }
    }

    /// Rebuilding from the same samples yields bit-identical answers.
    #[test]
    fn prop_fresh_aggregators_agree(values in arb_values(200), k in 1usize..50) {
        let mut a = WindowedAggregator::new();
        let mut b = WindowedAggregator::new();
        for v in &values {
            a.add(*v);
            b.add(*v);
            prop_assert_eq!(a.sum(k).to_bits(), b.sum(k).to_bits());
            prop_assert_eq!(a.average(k).to_bits(), b.average(k).to_bits());
        }
    }
}

#[test]
fn test_full_length_sweep() {
    // Deterministic sweep over every history length up to 1000.
    let values: Vec<f64> = (0..1000).map(|i| ((i * 7919) % 1009) as f64 / 7.0 - 60.0).collect();
    let mut agg = WindowedAggregator::new();
    for n in 1..=values.len() {
        agg.add(values[n - 1]);
        for k in [1, 2, 7, 14, 28, n] {
            let k = k.min(n);
            let brute: f64 = values[n - k..n].iter().sum();
            assert!((agg.sum(k) - brute).abs() < 1e-6, "n={n} k={k}");
        }
    }
}

#[test]
fn test_long_series_at_high_price_level() {
    let values: Vec<f64> = (0..500_000_i64)
        .map(|i| 10_000.0 + ((i * 7919) % 1009) as f64 / 1009.0)
        .collect();
    let mut agg = WindowedAggregator::with_capacity(values.len());
    for (n, v) in values.iter().enumerate() {
        agg.add(*v);
        if n % 4999 == 0 {
            for k in [1, 20, 200] {
                let k = k.min(n + 1);
                let brute: f64 = values[n + 1 - k..=n].iter().sum::<f64>() / k as f64;
                assert!((agg.average(k) - brute).abs() < 1e-5, "n={n} k={k}");
            }
        }
    }
}
