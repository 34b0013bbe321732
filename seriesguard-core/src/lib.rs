//! Core quality-assessment engine for SeriesGuard
//!
//! Scores irregularly-sampled time series along four axes — completeness,
//! consistency, timeliness, validity — and repairs missing values before
//! downstream use.
//!
//! Key constraints:
//! - One complete, time-sorted series per engine instance
//! - Never faults after construction: degraded output instead of errors
//! - Single forward pass per detector, O(n) amortized
//!
//! ```
//! use seriesguard_core::{QualityEngine, Series};
//!
//! let series = Series::new(
//!     vec![0.0, 1.0, 2.0, 3.0],
//!     vec![10.0, f64::NAN, 12.0, 13.0],
//! ).unwrap();
//!
//! let mut engine = QualityEngine::new(series);
//! engine.time_detect();
//! engine.value_detect();
//!
//! let report = engine.report();
//! assert_eq!(report.completeness, 1.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod anomaly;
pub mod constants;
pub mod deltas;
pub mod engine;
pub mod errors;
pub mod interp;
pub mod series;
pub mod stats;
pub mod temporal;

// Public API
pub use engine::{DetectionCounts, QualityEngine, QualityReport};
pub use errors::{SeriesError, SeriesResult};
pub use series::{Sample, Series};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
