//! Tabular Ingest and Batch Orchestration for SeriesGuard
//!
//! ## Overview
//!
//! The core engine assesses one complete, time-sorted series per instance.
//! This crate is the boundary in front of it: it tokenizes tabular text into
//! a timestamp column plus any number of value columns, sorts rows by time,
//! and runs one independent engine per value column.
//!
//! ## Input shape
//!
//! ```csv
//! timestamp,temperature,humidity
//! 0,20.1,55.0
//! 1,20.3,
//! 2,20.2,54.1
//! ```
//!
//! - First column: shared timestamp channel (numeric).
//! - Remaining columns: independent value channels. An empty cell, or a row
//!   shorter than the widest row, is missing data (`NaN`), not an error.
//! - Any non-numeric token makes the whole parse fail: the failure surface is
//!   all-or-nothing, the engine never sees partially consumed input.
//!
//! ## Example
//!
//! ```
//! use seriesguard_ingest::{csv, batch};
//!
//! let table = csv::parse("t,v\n0,1.0\n1,\n2,3.0\n", &csv::ParseOptions::default())?;
//! let assessments = batch::assess(&table);
//!
//! assert_eq!(assessments.len(), 1);
//! assert_eq!(assessments[0].name.as_deref(), Some("v"));
//! assert_eq!(assessments[0].report.completeness, 1.0);
//! # Ok::<(), seriesguard_ingest::ParseError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod batch;
pub mod csv;

pub use batch::{assess, ColumnAssessment};
pub use csv::{parse, ParseError, ParseOptions, Table};
