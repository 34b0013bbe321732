//! Series data model: index-aligned time and value channels
//!
//! A [`Series`] owns two parallel channels, `time[]` and `value[]`, with the
//! alignment invariant `time.len() == value.len()` enforced at construction
//! and held for the life of the engine. The caller sorts by timestamp before
//! construction; the series never re-sorts. Duplicate timestamps are legal
//! (velocity reports `NaN` at those positions), and missing measurements are
//! carried as `NaN` in the value channel until interpolation repairs them.

use crate::errors::{SeriesError, SeriesResult};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// One timestamped measurement.
///
/// `value` may be `NaN` to mark a missing measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sample {
    /// Sample time, in whatever unit the caller uses consistently
    pub timestamp: f64,
    /// Measured value, `NaN` when missing
    pub value: f64,
}

/// An ordered sequence of samples, stored as parallel channels.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    time: Vec<f64>,
    value: Vec<f64>,
}

impl Series {
    /// Build a series from two equal-length channels.
    ///
    /// The caller guarantees `time` is non-decreasing; only the length
    /// invariant is checked here.
    pub fn new(time: Vec<f64>, value: Vec<f64>) -> SeriesResult<Self> {
        if time.len() != value.len() {
            return Err(SeriesError::LengthMismatch {
                time: time.len(),
                value: value.len(),
            });
        }

        Ok(Self { time, value })
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Whether the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Timestamp channel.
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Value channel.
    pub fn value(&self) -> &[f64] {
        &self.value
    }

    /// Both channels at once, value mutably: in-place repair reads the time
    /// channel while rewriting values.
    pub(crate) fn channels_mut(&mut self) -> (&[f64], &mut [f64]) {
        (&self.time, &mut self.value)
    }

    /// Copy out the samples as points, in channel order.
    pub fn samples(&self) -> Vec<Sample> {
        self.time
            .iter()
            .zip(self.value.iter())
            .map(|(&timestamp, &value)| Sample { timestamp, value })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_channels() {
        let err = Series::new(vec![0.0, 1.0], vec![5.0]).unwrap_err();
        assert_eq!(err, SeriesError::LengthMismatch { time: 2, value: 1 });
    }

    #[test]
    fn samples_pair_channels() {
        let series = Series::new(vec![0.0, 1.0], vec![5.0, 6.0]).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(
            series.samples(),
            vec![
                Sample { timestamp: 0.0, value: 5.0 },
                Sample { timestamp: 1.0, value: 6.0 },
            ]
        );
    }

    #[test]
    fn empty_series_is_legal() {
        let series = Series::new(Vec::new(), Vec::new()).unwrap();
        assert!(series.is_empty());
        assert!(series.samples().is_empty());
    }
}
