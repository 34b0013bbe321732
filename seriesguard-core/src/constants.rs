//! Tuning constants for the detection passes
//!
//! Collected in one place so the classification thresholds are auditable
//! without reading the detector internals. The ratio thresholds and window
//! size are fixed by design: the engine does not auto-tune them against the
//! observed sampling rate.

/// Number of timestamps held by the temporal classifier's sliding window.
pub const WINDOW_SIZE: usize = 10;

/// Scale factor that makes the median absolute deviation a consistent
/// estimator of the standard deviation under Gaussian noise.
pub const MAD_SCALE: f64 = 1.4826;

/// Robust-outlier multiplier: samples further than `k` sigma from the
/// median are counted as anomalies.
pub const OUTLIER_K: f64 = 3.0;

/// An interval at or below this fraction of the baseline marks the later
/// sample as redundant (arrived too soon).
pub const REDUNDANT_RATIO: f64 = 0.5;

/// An interval at or above this multiple of the baseline opens a gap
/// (missing or late samples).
pub const GAP_RATIO: f64 = 2.0;
