//! Value-level anomaly detection via median/MAD outlier counting
//!
//! Four independent counts over the value channel and its derivatives, each
//! using the same robust rule: a sample is an outlier when it sits more than
//! `k` MAD-sigmas from the median of its sequence. The derivative sequences
//! are taken in series order and never re-sorted - the median stays a
//! positional statistic, see [`crate::stats`].

use crate::{
    constants::OUTLIER_K,
    deltas,
    engine::DetectionCounts,
    series::Series,
    stats,
};

/// Count values further than `k * mad` from the positional median.
///
/// With a zero MAD (more than half the values equal the median) every
/// differing value is counted - accepted behaviour, not special-cased. `NaN`
/// values produce `NaN` deviations, which fail the `>` comparison and are
/// therefore never counted.
pub fn count_outliers(values: &[f64], k: f64) -> usize {
    let mid = stats::median(values);
    let sigma = stats::mad(values);

    values
        .iter()
        .filter(|&&v| libm::fabs(v - mid) > k * sigma)
        .count()
}

/// Run the four outlier counts over `series`, accumulating into `counts`.
///
/// Touches only the value counters: raw values, first difference
/// (variation), velocity, and first difference of velocity (speed change).
/// Assumes the value channel has already been through NaN repair; residual
/// `NaN` values degrade to "never counted" per the propagation rule.
pub fn detect(series: &Series, counts: &mut DetectionCounts) {
    counts.value_outliers += count_outliers(series.value(), OUTLIER_K);

    let variation = deltas::first_difference(series.value());
    counts.variation_outliers += count_outliers(&variation, OUTLIER_K);

    let speed = deltas::velocity(series.value(), series.time());
    counts.speed_outliers += count_outliers(&speed, OUTLIER_K);

    let speed_change = deltas::first_difference(&speed);
    counts.speed_change_outliers += count_outliers(&speed_change, OUTLIER_K);
}
