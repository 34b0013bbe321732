//! Temporal classification: redundant, late and missing samples
//!
//! A single forward pass over the timestamp channel with a bounded sliding
//! window. Each sampling interval is judged against a robust baseline - the
//! rank median of all intervals - so one large gap cannot skew the reference
//! spacing for the rest of the series.
//!
//! ## Classification rules
//!
//! With `ratio = interval / baseline`:
//! - `ratio ≤ 0.5`: the later sample arrived too soon - **redundant**.
//! - `ratio ≥ 2.0`: a gap. The window is scanned forward to the end of the
//!   gap region; compressed samples right after the gap (`ratio ≤ 0.5`
//!   again) are **late** arrivals catching up, up to `round(ratio − 1)` of
//!   them, and the unaccounted remainder of the gap is **missing**.
//! - Anything in between is normal spacing.
//!
//! ## Window mechanics
//!
//! The window is a fixed-capacity [`heapless::Vec`] of up to
//! [`WINDOW_SIZE`] timestamps, refilled from the series front after each
//! slide. Late samples are removed in place mid-window; the fixed capacity
//! caps that removal cost at the window size, keeping the whole pass O(n)
//! amortized. The window is transient state, never persisted.

use heapless::Vec as WindowVec;

use crate::{
    constants::{GAP_RATIO, REDUNDANT_RATIO, WINDOW_SIZE},
    deltas,
    engine::DetectionCounts,
    stats,
};

/// Classify every sampling interval of `time`, accumulating into `counts`.
///
/// Touches only the temporal counters (`missing`, `late`, `redundant`). A
/// degenerate baseline - an empty or single-sample series, or one dominated
/// by duplicate timestamps - makes classification meaningless, so the pass
/// returns without counting anything rather than dividing by zero.
pub fn detect(time: &[f64], counts: &mut DetectionCounts) {
    let base = baseline_interval(time);
    if !base.is_finite() || base <= 0.0 {
        return;
    }

    let mut window: WindowVec<f64, WINDOW_SIZE> = WindowVec::new();
    let mut next = 0;
    while !window.is_full() && next < time.len() {
        // Capacity checked by the loop condition
        let _ = window.push(time[next]);
        next += 1;
    }

    while window.len() > 1 {
        let ratio = (window[1] - window[0]) / base;

        if ratio <= REDUNDANT_RATIO {
            // Second sample arrived too soon after the first.
            window.remove(1);
            counts.redundant += 1;
        } else if ratio >= GAP_RATIO {
            // Gap: round(ratio - 1) samples should have arrived in between.
            let expected = libm::round(ratio - 1.0) as usize;
            let mut late = 0;

            let mut j = 2;
            while j < window.len() {
                let ratio2 = (window[j] - window[j - 1]) / base;
                if ratio2 >= GAP_RATIO {
                    // Next gap starts here; this one is fully scanned.
                    break;
                }
                if ratio2 <= REDUNDANT_RATIO {
                    // Compressed arrival catching up on the gap. Removing it
                    // shifts the window, so the index stays put.
                    late += 1;
                    window.remove(j);
                    if late == expected {
                        break;
                    }
                } else {
                    j += 1;
                }
            }

            counts.late += late;
            counts.missing += expected - late;
        }

        window.remove(0);
        while !window.is_full() && next < time.len() {
            let _ = window.push(time[next]);
            next += 1;
        }
    }
}

/// Robust nominal sampling interval: rank median of the adjacent intervals.
///
/// Unlike the value-channel statistics, the baseline is a rank statistic: the
/// interval sequence is sorted before the median so a single large gap lands
/// at the tail instead of the middle. Returns `0.0` when there are no
/// intervals.
fn baseline_interval(time: &[f64]) -> f64 {
    let mut intervals = deltas::first_difference(time);
    intervals.sort_unstable_by(f64::total_cmp);
    stats::median(&intervals)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(time: &[f64]) -> DetectionCounts {
        let mut counts = DetectionCounts::default();
        detect(time, &mut counts);
        counts
    }

    #[test]
    fn regular_series_is_clean() {
        let time: Vec<f64> = (0..50).map(|i| i as f64).collect();
        let counts = run(&time);
        assert_eq!(counts.redundant, 0);
        assert_eq!(counts.missing, 0);
        assert_eq!(counts.late, 0);
    }

    #[test]
    fn gap_counts_missing_samples() {
        // Base interval 1; the jump 3 -> 10 implies 6 absent samples.
        let counts = run(&[0.0, 1.0, 2.0, 3.0, 10.0, 11.0, 12.0, 13.0]);
        assert_eq!(counts.missing, 6);
        assert_eq!(counts.late, 0);
        assert_eq!(counts.redundant, 0);
    }

    #[test]
    fn premature_sample_is_redundant() {
        // 1.05 lands 0.05 after its predecessor against a base near 1.
        let counts = run(&[0.0, 1.0, 1.05, 2.0, 3.0]);
        assert_eq!(counts.redundant, 1);
        assert_eq!(counts.missing, 0);
        assert_eq!(counts.late, 0);
    }

    #[test]
    fn compressed_arrivals_after_gap_are_late() {
        // Gap 3 -> 10 (6 implied samples); 10.2 and 10.4 catch up on it.
        let time = [0.0, 1.0, 2.0, 3.0, 10.0, 10.2, 10.4, 11.0, 12.0, 13.0];
        let counts = run(&time);
        assert_eq!(counts.late, 2);
        assert_eq!(counts.missing, 4);
        assert_eq!(counts.redundant, 0);
    }

    #[test]
    fn degenerate_baseline_is_a_no_op() {
        assert_eq!(run(&[]), DetectionCounts::default());
        assert_eq!(run(&[5.0]), DetectionCounts::default());
        // Duplicate-dominated series: baseline 0, nothing classified.
        assert_eq!(run(&[1.0, 1.0, 1.0, 2.0]), DetectionCounts::default());
    }

    #[test]
    fn repeated_runs_accumulate() {
        let time = [0.0, 1.0, 2.0, 3.0, 10.0, 11.0, 12.0, 13.0];
        let mut counts = DetectionCounts::default();
        detect(&time, &mut counts);
        detect(&time, &mut counts);
        assert_eq!(counts.missing, 12);
    }

    #[test]
    fn long_series_slides_past_window_capacity() {
        // 30 regular samples with one gap well past the first window fill.
        let mut time: Vec<f64> = (0..20).map(|i| i as f64).collect();
        time.extend((23..33).map(|i| i as f64));
        let counts = run(&time);
        assert_eq!(counts.missing, 3);
        assert_eq!(counts.late, 0);
        assert_eq!(counts.redundant, 0);
    }
}
