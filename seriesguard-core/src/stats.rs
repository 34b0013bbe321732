//! Robust order statistics: positional median and MAD
//!
//! ## Positional, not rank
//!
//! `median` returns the middle element of the sequence *as given* - it never
//! sorts. Callers are responsible for supplying values in the order the
//! statistic should see them: the series is time-sorted upstream, and
//! derivative sequences are deliberately kept in series order so the median
//! stays a local-window statistic rather than a global rank statistic.
//! Callers that want a rank median sort their own copy first (the temporal
//! classifier does exactly this for its baseline interval).
//!
//! ## NaN handling
//!
//! Neither function filters NaN. A NaN flowing into an absolute-deviation
//! comparison yields NaN, and NaN fails every `>` comparison, so NaN samples
//! silently drop out of outlier counts downstream. That propagation is the
//! de-facto NaN exclusion rule for the whole engine.

use crate::constants::MAD_SCALE;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Positional median of a sequence.
///
/// Odd length: the middle element as given. Even length: the average of the
/// two central positional elements. Empty input returns `0.0`.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let n = values.len();
    if n % 2 == 0 {
        (values[n / 2 - 1] + values[n / 2]) / 2.0
    } else {
        values[n / 2]
    }
}

/// Median absolute deviation, scaled to a normal-equivalent sigma.
///
/// `1.4826 × median(|v − median(values)|)`. Returns `0.0` for empty input.
/// A zero result is legitimate (more than half the values equal the median)
/// and makes every differing value an outlier downstream.
pub fn mad(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mid = median(values);

    let deviations: Vec<f64> = values.iter().map(|v| libm::fabs(v - mid)).collect();

    MAD_SCALE * median(&deviations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_empty_is_zero() {
        assert_eq!(median(&[]), 0.0);
    }

    #[test]
    fn median_single_element() {
        assert_eq!(median(&[42.0]), 42.0);
    }

    #[test]
    fn median_odd_is_middle_positional() {
        // Not sorted - the middle element is taken as given
        assert_eq!(median(&[5.0, 1.0, 3.0]), 1.0);
    }

    #[test]
    fn median_even_averages_central_pair() {
        assert_eq!(median(&[1.0, 2.0, 4.0, 8.0]), 3.0);
    }

    #[test]
    fn mad_constant_sequence_is_zero() {
        assert_eq!(mad(&[7.0, 7.0, 7.0, 7.0, 7.0]), 0.0);
    }

    #[test]
    fn mad_is_nonnegative() {
        assert!(mad(&[1.0, 2.0, 3.0, 4.0, 5.0]) >= 0.0);
        assert!(mad(&[-10.0, 0.0, 10.0]) >= 0.0);
    }

    #[test]
    fn mad_scales_deviation() {
        // median 2.0, deviations [1, 0, 1], positional middle is 0
        assert_eq!(mad(&[1.0, 2.0, 3.0]), 0.0);
        // median 3.0, deviations [5, 1, 1, 5], central pair averages to 1
        assert_eq!(mad(&[-2.0, 2.0, 4.0, 8.0]), MAD_SCALE);
    }
}
