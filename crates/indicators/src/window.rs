use tacore_core::{check_length, Result, Series};

/// Append-only aggregator answering trailing-window sums in O(1).
///
/// Keeps the full history plus a prefix-sum array, so any window length can
/// be queried after each `add`. Several indicators query unrelated lengths
/// (e.g. 7, 14 and 28) against the same stream at the same step, which a
/// fixed-length ring buffer cannot serve.
///
/// Windows longer than the history are answered over the available prefix,
/// and `average` divides by the number of samples actually summed.
///
/// A NaN or infinite sample restarts the prefix at zero. Windows covering it
/// are summed literally from the history (and so stay non-finite), windows
/// past it are answered from the restarted prefix.
#[derive(Debug, Clone)]
pub struct WindowedAggregator {
    history: Vec<f64>,
    /// `prefix[i + 1] - prefix[j]` is the sum of samples `j..=i` as long as
    /// no non-finite sample lies in `j..=i`; `prefix[0] == 0`.
    prefix: Vec<f64>,
    /// Index of the most recent non-finite sample.
    last_non_finite: Option<usize>,
}

impl Default for WindowedAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowedAggregator {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut prefix = Vec::with_capacity(capacity + 1);
        prefix.push(0.0);
        Self {
            history: Vec::with_capacity(capacity),
            prefix,
            last_non_finite: None,
        }
    }

    /// Append the next sample.
    pub fn add(&mut self, value: f64) {
        let running = if value.is_finite() {
            self.prefix.last().copied().unwrap_or(0.0) + value
        } else {
            self.last_non_finite = Some(self.history.len());
            0.0
        };
        self.history.push(value);
        self.prefix.push(running);
    }

    /// Whether the last `k` samples are all finite.
    pub fn is_finite(&self, k: usize) -> bool {
        let n = self.history.len();
        !self.last_non_finite.is_some_and(|i| i >= n - k.min(n))
    }

    /// Sum of the last `k` samples, or of every sample if fewer than `k`
    /// were added. `k == 0` and an empty aggregator both yield `0.0`.
    pub fn sum(&self, k: usize) -> f64 {
        let n = self.history.len();
        let k = k.min(n);
        if k == 0 {
            return 0.0;
        }
        if !self.is_finite(k) {
            return self.history[n - k..].iter().sum();
        }
        self.prefix[n] - self.prefix[n - k]
    }

    /// Mean of the last `k` samples, divided by the count actually available.
    pub fn average(&self, k: usize) -> f64 {
        let count = k.min(self.history.len());
        if count == 0 {
            return 0.0;
        }
        self.sum(count) / count as f64
    }

    /// Number of samples that a `k`-window currently covers.
    pub fn available(&self, k: usize) -> usize {
        k.min(self.history.len())
    }

    /// Sum of all samples added so far.
    pub fn total(&self) -> f64 {
        self.sum(self.history.len())
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn last(&self) -> Option<f64> {
        self.history.last().copied()
    }

    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Drop all samples so the aggregator can serve a new invocation.
    pub fn clear(&mut self) {
        self.history.clear();
        self.prefix.truncate(1);
        self.last_non_finite = None;
    }
}

/// Trailing `k`-sum at every index of `input`.
pub fn rolling_sum(input: &Series, k: usize) -> Result<Series> {
    let k = check_length(k)?;
    let mut agg = WindowedAggregator::with_capacity(input.len());
    Ok(input
        .iter()
        .map(|v| {
            agg.add(v);
            agg.sum(k)
        })
        .collect())
}

/// Trailing `k`-mean at every index of `input`, short prefixes averaged over
/// what is available.
pub fn rolling_average(input: &Series, k: usize) -> Result<Series> {
    let k = check_length(k)?;
    let mut agg = WindowedAggregator::with_capacity(input.len());
    Ok(input
        .iter()
        .map(|v| {
            agg.add(v);
            agg.average(k)
        })
        .collect())
}
