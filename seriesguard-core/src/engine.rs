//! Quality engine: orchestration, counters and scoring
//!
//! A [`QualityEngine`] wraps exactly one [`Series`]. Construction snapshots
//! the raw value channel and runs NaN repair in place; after that the engine
//! is read-only from the caller's point of view, exposing two independent
//! detection passes and the four score getters.
//!
//! ## Lifecycle
//!
//! The engine is single-use. The detection passes accumulate into their
//! counters rather than resetting them, so re-running a pass double-counts:
//! callers create a fresh engine per assessment. The two passes write
//! disjoint counters and may run in either order, or not at all (scores over
//! untouched counters are simply 1.0).
//!
//! ## Degraded output, never faults
//!
//! No error originates here. An empty series short-circuits every score to
//! `1.0` instead of dividing by zero; a series that could not be fully
//! interpolated leaves `NaN` values that the outlier comparisons skip.

use crate::{anomaly, interp, series::Sample, series::Series, temporal};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

/// Defect counters accumulated by the detection passes.
///
/// The temporal pass writes `missing`, `late` and `redundant`; the value pass
/// writes the four outlier counters. `flagged` is a reserved category for a
/// future sentinel/flagged-value classification; nothing populates it today,
/// but it participates in the completeness formula so the report shape is
/// stable when it arrives.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DetectionCounts {
    /// Samples implied by a gap that never arrived
    pub missing: usize,
    /// Samples that arrived compressed right after a gap
    pub late: usize,
    /// Samples that arrived much sooner than the baseline interval
    pub redundant: usize,
    /// Reserved sentinel/flagged-value category, currently always 0
    pub flagged: usize,
    /// Outliers in the raw value channel
    pub value_outliers: usize,
    /// Outliers in the first difference of the values
    pub variation_outliers: usize,
    /// Outliers in the velocity sequence
    pub speed_outliers: usize,
    /// Outliers in the first difference of the velocity sequence
    pub speed_change_outliers: usize,
}

/// The four normalized quality scores for one series.
///
/// Each score is `1 − defect_rate`: higher is better, `1.0` is defect-free.
/// For well-formed input all four lie in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct QualityReport {
    /// Fraction of expected samples actually present
    pub completeness: f64,
    /// Fraction of samples free of redundant arrivals
    pub consistency: f64,
    /// Fraction of samples that arrived on time
    pub timeliness: f64,
    /// Fraction of samples free of value-level statistical anomalies
    pub validity: f64,
}

/// Quality-assessment engine for a single series.
///
/// See the [module docs](self) for lifecycle and degradation rules.
pub struct QualityEngine {
    series: Series,
    /// Value channel as received, before NaN repair
    raw: Vec<f64>,
    /// Sample count, fixed at construction
    total: usize,
    counts: DetectionCounts,
    /// Reserved maintenance-window suppression flag; not consulted by any
    /// pass today
    pub downtime: bool,
}

impl QualityEngine {
    /// Take ownership of a time-sorted series and repair its value channel.
    ///
    /// Interpolation runs exactly once, here. A channel with fewer than two
    /// known values is left untouched (defined degraded behaviour, see
    /// [`crate::interp`]).
    pub fn new(mut series: Series) -> Self {
        let raw = series.value().to_vec();
        let total = series.len();

        {
            // Split borrows: interpolation reads time while rewriting values.
            let (time, value) = series.channels_mut();
            interp::fill_missing(time, value);
        }

        Self {
            series,
            raw,
            total,
            counts: DetectionCounts::default(),
            downtime: true,
        }
    }

    /// Classify sampling intervals, accumulating the temporal counters.
    pub fn time_detect(&mut self) {
        temporal::detect(self.series.time(), &mut self.counts);
        log_debug!(
            "time_detect: missing={} late={} redundant={} over {} samples",
            self.counts.missing,
            self.counts.late,
            self.counts.redundant,
            self.total
        );
    }

    /// Count value-level outliers, accumulating the anomaly counters.
    pub fn value_detect(&mut self) {
        anomaly::detect(&self.series, &mut self.counts);
        log_debug!(
            "value_detect: value={} variation={} speed={} speed_change={} over {} samples",
            self.counts.value_outliers,
            self.counts.variation_outliers,
            self.counts.speed_outliers,
            self.counts.speed_change_outliers,
            self.total
        );
    }

    /// `1 − (missing + flagged) / (total + missing)`.
    pub fn completeness(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        let defects = (self.counts.missing + self.counts.flagged) as f64;
        1.0 - defects / (self.total + self.counts.missing) as f64
    }

    /// `1 − redundant / total`.
    pub fn consistency(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        1.0 - self.counts.redundant as f64 / self.total as f64
    }

    /// `1 − late / total`.
    pub fn timeliness(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        1.0 - self.counts.late as f64 / self.total as f64
    }

    /// `1 −` equal-weighted average anomaly rate across the four counts.
    pub fn validity(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        let anomalies = (self.counts.value_outliers
            + self.counts.variation_outliers
            + self.counts.speed_outliers
            + self.counts.speed_change_outliers) as f64;
        1.0 - 0.25 * anomalies / self.total as f64
    }

    /// Snapshot of all four scores.
    pub fn report(&self) -> QualityReport {
        QualityReport {
            completeness: self.completeness(),
            consistency: self.consistency(),
            timeliness: self.timeliness(),
            validity: self.validity(),
        }
    }

    /// Accumulated defect counters.
    pub fn counts(&self) -> &DetectionCounts {
        &self.counts
    }

    /// Number of samples, fixed at construction.
    pub fn len(&self) -> usize {
        self.total
    }

    /// Whether the wrapped series is empty.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Cleaned point sequence: same length and order as the input, values
    /// interpolated.
    pub fn cleaned(&self) -> Vec<Sample> {
        self.series.samples()
    }

    /// Original point sequence as received, before NaN repair.
    pub fn raw(&self) -> Vec<Sample> {
        self.series
            .time()
            .iter()
            .zip(self.raw.iter())
            .map(|(&timestamp, &value)| Sample { timestamp, value })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(time: Vec<f64>, value: Vec<f64>) -> QualityEngine {
        QualityEngine::new(Series::new(time, value).unwrap())
    }

    #[test]
    fn construction_interpolates_in_place() {
        let e = engine(vec![0.0, 1.0, 2.0], vec![0.0, f64::NAN, 2.0]);
        let cleaned: Vec<f64> = e.cleaned().iter().map(|s| s.value).collect();
        assert_eq!(cleaned, vec![0.0, 1.0, 2.0]);

        // Raw snapshot keeps the hole.
        assert!(e.raw()[1].value.is_nan());
    }

    #[test]
    fn empty_series_scores_are_sentinels() {
        let mut e = engine(Vec::new(), Vec::new());
        e.time_detect();
        e.value_detect();

        let report = e.report();
        assert_eq!(report.completeness, 1.0);
        assert_eq!(report.consistency, 1.0);
        assert_eq!(report.timeliness, 1.0);
        assert_eq!(report.validity, 1.0);
    }

    #[test]
    fn untouched_counters_score_perfect() {
        let e = engine(vec![0.0, 1.0, 2.0], vec![1.0, 2.0, 3.0]);
        assert_eq!(e.report(), QualityReport {
            completeness: 1.0,
            consistency: 1.0,
            timeliness: 1.0,
            validity: 1.0,
        });
    }

    #[test]
    fn completeness_reflects_gap() {
        let mut e = engine(
            vec![0.0, 1.0, 2.0, 3.0, 10.0, 11.0, 12.0, 13.0],
            vec![0.0; 8],
        );
        e.time_detect();

        // 6 missing against 8 present: 1 - 6/14
        assert!((e.completeness() - (1.0 - 6.0 / 14.0)).abs() < 1e-12);
        assert_eq!(e.timeliness(), 1.0);
        assert_eq!(e.consistency(), 1.0);
    }

    #[test]
    fn consistency_reflects_redundancy() {
        let mut e = engine(vec![0.0, 1.0, 1.05, 2.0, 3.0], vec![0.0; 5]);
        e.time_detect();
        assert!((e.consistency() - (1.0 - 1.0 / 5.0)).abs() < 1e-12);
    }

    #[test]
    fn validity_reflects_anomalies() {
        let mut e = engine(
            (0..9).map(|i| i as f64).collect(),
            vec![2.0, 2.0, 50.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0],
        );
        e.value_detect();

        // 1 + 2 + 2 + 3 anomalies across the four sequences, over 9 samples
        assert!((e.validity() - (1.0 - 0.25 * 8.0 / 9.0)).abs() < 1e-12);
    }

    #[test]
    fn scores_stay_in_unit_interval() {
        let mut e = engine(
            vec![0.0, 1.0, 1.05, 2.0, 3.0, 10.0, 11.0, 12.0, 13.0],
            vec![0.0, 1.0, f64::NAN, 3.0, 100.0, 10.0, 11.0, 12.0, 13.0],
        );
        e.time_detect();
        e.value_detect();

        let report = e.report();
        for score in [
            report.completeness,
            report.consistency,
            report.timeliness,
            report.validity,
        ] {
            assert!((0.0..=1.0).contains(&score), "score {score} out of range");
        }
    }
}
