//! In-place NaN repair via piecewise-linear interpolation
//!
//! Runs once, when the engine takes ownership of a series, over the aligned
//! `(time, value)` channels. Interior gaps are filled along the line through
//! the nearest known neighbours; positions before the first known pair and
//! after the last one are extrapolated along that pair's line.
//!
//! ## Degraded behaviour
//!
//! A channel with fewer than two known values cannot define a line, so it is
//! left entirely untouched. That is a deliberate policy, not a bug: residual
//! `NaN` values fail every outlier comparison downstream and are simply never
//! counted as anomalies.

/// Fill every `NaN` in `value` by linear interpolation over `time`.
///
/// The channels must be index-aligned and of equal length (the [`Series`]
/// invariant); `time` is assumed non-decreasing. Idempotent: a second run
/// finds nothing left to fill.
///
/// [`Series`]: crate::series::Series
pub fn fill_missing(time: &[f64], value: &mut [f64]) {
    let n = value.len();

    // First two known positions anchor the leading fill.
    let mut index1 = 0;
    while index1 < n && value[index1].is_nan() {
        index1 += 1;
    }

    let mut index2 = index1 + 1;
    while index2 < n && value[index2].is_nan() {
        index2 += 1;
    }

    if index2 >= n {
        // Fewer than two known values: leave the channel as-is.
        return;
    }

    // Everything before the second anchor lies on the anchor line; positions
    // before index1 extrapolate backwards along it.
    for j in 0..index2 {
        value[j] = lerp(time, value, index1, index2, j);
    }

    // Walk forward, advancing the anchor pair at each known value and filling
    // the missing run strictly between the anchors.
    for k in index2 + 1..n {
        if !value[k].is_nan() {
            index1 = index2;
            index2 = k;
            for j in index1 + 1..index2 {
                value[j] = lerp(time, value, index1, index2, j);
            }
        }
    }

    // Trailing run past the last known value extrapolates along the final
    // anchor pair.
    for j in index2 + 1..n {
        value[j] = lerp(time, value, index1, index2, j);
    }
}

/// Value at `time[j]` on the line through anchors `i1` and `i2`.
fn lerp(time: &[f64], value: &[f64], i1: usize, i2: usize, j: usize) -> f64 {
    value[i1] + (value[i2] - value[i1]) * (time[j] - time[i1]) / (time[i2] - time[i1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_interior_gap() {
        let time = [0.0, 1.0, 2.0, 3.0];
        let mut value = [0.0, f64::NAN, f64::NAN, 3.0];
        fill_missing(&time, &mut value);
        assert_eq!(value, [0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn extrapolates_leading_and_trailing() {
        let time = [0.0, 1.0, 2.0, 3.0, 4.0];
        let mut value = [f64::NAN, 1.0, 2.0, f64::NAN, f64::NAN];
        fill_missing(&time, &mut value);
        assert_eq!(value, [0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn single_known_value_is_untouched() {
        let time = [0.0, 1.0, 2.0];
        let mut value = [f64::NAN, 5.0, f64::NAN];
        fill_missing(&time, &mut value);
        assert!(value[0].is_nan());
        assert_eq!(value[1], 5.0);
        assert!(value[2].is_nan());
    }

    #[test]
    fn all_missing_is_untouched() {
        let time = [0.0, 1.0];
        let mut value = [f64::NAN, f64::NAN];
        fill_missing(&time, &mut value);
        assert!(value.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn idempotent_on_complete_channel() {
        let time = [0.0, 1.0, 2.0, 3.0];
        let mut value = [0.0, f64::NAN, 4.0, f64::NAN];
        fill_missing(&time, &mut value);
        let once = value;
        fill_missing(&time, &mut value);
        assert_eq!(value, once);
    }

    #[test]
    fn uneven_time_spacing_follows_timestamps() {
        // Gap between t=0 and t=10 with the hole at t=4
        let time = [0.0, 4.0, 10.0];
        let mut value = [0.0, f64::NAN, 20.0];
        fill_missing(&time, &mut value);
        assert_eq!(value[1], 8.0);
    }
}
