//! Derivative sequences over a series
//!
//! Pure helpers that turn a channel into its adjacent-difference and
//! per-time-unit rate sequences. Both return an empty vector rather than an
//! error when the input is too short or misaligned: downstream statistics
//! treat an empty sequence as "not computable", never as "all zero".

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Adjacent differences `xs[i+1] - xs[i]`.
///
/// Produces `len − 1` values; empty or single-element input yields an empty
/// result.
pub fn first_difference(xs: &[f64]) -> Vec<f64> {
    if xs.len() < 2 {
        return Vec::new();
    }

    xs.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Rate of change `Δvalue / Δtime` for each adjacent pair.
///
/// Requires index-aligned channels of equal length; on a length mismatch or
/// empty input the result is left empty (silent no-op). A `Δtime` of exactly
/// `0.0` - a duplicate timestamp - yields `NaN` at that position instead of a
/// divide-by-zero fault.
pub fn velocity(values: &[f64], times: &[f64]) -> Vec<f64> {
    if values.len() != times.len() || values.is_empty() {
        return Vec::new();
    }

    values
        .windows(2)
        .zip(times.windows(2))
        .map(|(v, t)| {
            let dt = t[1] - t[0];
            if dt == 0.0 {
                f64::NAN
            } else {
                (v[1] - v[0]) / dt
            }
        })
        .collect()
}
