//! Batch orchestration: one engine per value column
//!
//! Sorts the parsed rows by timestamp once, then builds an independent
//! [`Series`] per value column and runs a fresh [`QualityEngine`] over each.
//! Engines share nothing mutable, so columns could equally be assessed on
//! separate worker threads; this orchestrator keeps it sequential.

use seriesguard_core::{QualityEngine, QualityReport, Sample, Series};

use crate::csv::Table;

/// Assessment output for one value column.
#[derive(Debug, Clone)]
pub struct ColumnAssessment {
    /// Column name from the header row, when one was present
    pub name: Option<String>,
    /// The four normalized quality scores
    pub report: QualityReport,
    /// Gap-filled point sequence, in timestamp order, same length as input
    pub cleaned: Vec<Sample>,
    /// Point sequence as received (pre-interpolation), in timestamp order
    pub original: Vec<Sample>,
}

/// Assess every value column of `table` independently.
///
/// Rows are ordered by timestamp (`total_cmp`, so NaN timestamps sort last)
/// before series construction; each column gets its own engine with both
/// detection passes run.
pub fn assess(table: &Table) -> Vec<ColumnAssessment> {
    let mut order: Vec<usize> = (0..table.len()).collect();
    order.sort_by(|&a, &b| table.timestamps[a].total_cmp(&table.timestamps[b]));

    let time: Vec<f64> = order.iter().map(|&i| table.timestamps[i]).collect();

    table
        .columns
        .iter()
        .enumerate()
        .filter_map(|(col, values)| {
            let value: Vec<f64> = order.iter().map(|&i| values[i]).collect();

            // Channels are equal-length by construction of Table.
            let series = Series::new(time.clone(), value).ok()?;

            let mut engine = QualityEngine::new(series);
            engine.time_detect();
            engine.value_detect();

            Some(ColumnAssessment {
                name: table
                    .names
                    .as_ref()
                    .and_then(|names| names.get(col).cloned()),
                report: engine.report(),
                cleaned: engine.cleaned(),
                original: engine.raw(),
            })
        })
        .collect()
}
