//! Moving-average dispatch and composition.
//!
//! [`MovingAverageEngine::apply`] turns an input [`Series`] into an
//! index-aligned output for any [`MovingAverageKind`]. Outputs are ordinary
//! series, so feeding one call's output into another is how smoothed-of-
//! smoothed indicators (TRIX, DEMA-style lines, signal lines) are built.
//! Every call builds a fresh average; nothing carries over between calls.

use crate::ema::Ema;
use crate::sma::Sma;
use crate::wma::Wma;
use crate::Indicator;
use tacore_core::{check_length, Error, MovingAverageKind, MovingAverageSpec, Result, Series};
use tracing::debug;

/// Stateless entry point for building and applying moving averages.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovingAverageEngine;

impl MovingAverageEngine {
    /// Build a streaming average of the given kind.
    pub fn build(kind: MovingAverageKind, length: usize) -> Result<Box<dyn Indicator>> {
        let average: Box<dyn Indicator> = match kind {
            MovingAverageKind::Simple => Box::new(Sma::new(length)?),
            MovingAverageKind::Exponential => Box::new(Ema::new(length)?),
            MovingAverageKind::Weighted => Box::new(Wma::new(length)?),
            MovingAverageKind::WildersSmoothing => Box::new(Ema::wilders(length)?),
            other => return Err(Error::UnsupportedKind(other.to_string())),
        };
        debug!(%kind, length, "Built moving average");
        Ok(average)
    }

    /// Apply one average over `input`; `output[i]` depends only on
    /// `input[0..=i]`.
    pub fn apply(kind: MovingAverageKind, length: usize, input: &Series) -> Result<Series> {
        let mut average = Self::build(kind, length)?;
        let output: Series = input.iter().map(|v| average.next(v)).collect();
        debug!(%kind, length, samples = output.len(), "Applied moving average");
        Ok(output)
    }

    pub fn apply_spec(spec: MovingAverageSpec, input: &Series) -> Result<Series> {
        Self::apply(spec.kind, spec.length, input)
    }

    /// Apply the same average `depth` times, each pass smoothing the
    /// previous pass's output. `depth == 0` returns the input unchanged.
    pub fn apply_repeated(
        kind: MovingAverageKind,
        length: usize,
        input: &Series,
        depth: usize,
    ) -> Result<Series> {
        check_length(length)?;
        let mut current = input.clone();
        for _ in 0..depth {
            current = Self::apply(kind, length, &current)?;
        }
        Ok(current)
    }

    /// Apply heterogeneous stages in order.
    pub fn apply_chain(stages: &[MovingAverageSpec], input: &Series) -> Result<Series> {
        for stage in stages {
            stage.validate()?;
        }
        let mut current = input.clone();
        for stage in stages {
            current = Self::apply_spec(*stage, &current)?;
        }
        debug!(stages = stages.len(), samples = current.len(), "Applied moving average chain");
        Ok(current)
    }
}
