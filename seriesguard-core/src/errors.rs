//! Error types for series construction
//!
//! The engine itself never fails after construction: every detection pass and
//! score getter produces a defined (possibly degraded) result. The only hard
//! failure the core can report is handing it two channels of different
//! lengths, which would break the index alignment every pass relies on.
//!
//! Errors are kept small and `Copy`, with inline data only, so they can be
//! returned from hot paths and matched without allocation.

use thiserror_no_std::Error;

/// Result type for series construction
pub type SeriesResult<T> = Result<T, SeriesError>;

/// Construction errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesError {
    /// Time and value channels have different lengths
    #[error("Channel length mismatch: {time} timestamps, {value} values")]
    LengthMismatch {
        /// Length of the timestamp channel
        time: usize,
        /// Length of the value channel
        value: usize,
    },
}
