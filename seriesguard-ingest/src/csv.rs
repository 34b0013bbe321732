//! Tabular-text tokenization
//!
//! Splits raw text into a timestamp column and N value columns of `f64`,
//! column-major, ready for per-column series construction. Parsing is strict
//! about tokens and lenient about shape: every non-empty token must be
//! numeric, but a short row or an empty cell is missing data, not a fault.
//!
//! The parse is all-or-nothing: on the first malformed token the whole input
//! is rejected, so the engine never sees partially consumed data.

use thiserror::Error;

/// Parsing options for [`parse`].
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    /// Column separator character
    pub separator: char,
    /// Whether the first line is a header naming the columns
    pub has_header: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            separator: ',',
            has_header: true,
        }
    }
}

/// Errors produced while tokenizing tabular input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A non-empty token did not parse as a number
    #[error("line {line}: invalid numeric token '{token}'")]
    InvalidNumber {
        /// 1-based line number in the input
        line: usize,
        /// The offending token
        token: String,
    },

    /// A data row had no separator at all
    #[error("line {line}: expected a timestamp column and at least one value column")]
    MissingSeparator {
        /// 1-based line number in the input
        line: usize,
    },
}

/// A parsed table: one shared timestamp channel plus N value columns.
///
/// All value columns have the same length as the timestamp channel; cells
/// absent from the input are `NaN`. Rows are in input order - sorting by
/// timestamp is the orchestrator's job.
#[derive(Debug, Clone, Default)]
pub struct Table {
    /// Value column names from the header row, when one was present
    pub names: Option<Vec<String>>,
    /// Shared timestamp channel
    pub timestamps: Vec<f64>,
    /// Value channels, column-major, index-aligned with `timestamps`
    pub columns: Vec<Vec<f64>>,
}

impl Table {
    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Whether the table holds no data rows.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

/// Tokenize tabular text into a [`Table`].
///
/// Blank lines and `\r` line endings are tolerated. See the
/// [crate docs](crate) for the input shape and failure surface.
pub fn parse(text: &str, options: &ParseOptions) -> Result<Table, ParseError> {
    let mut table = Table::default();
    let mut lines = text.lines().enumerate();

    if options.has_header {
        for (_, line) in lines.by_ref() {
            if line.trim().is_empty() {
                continue;
            }
            let mut names: Vec<String> = line
                .split(options.separator)
                .map(|name| name.trim().to_string())
                .collect();
            // First column is the timestamp channel, not a value column.
            names.remove(0);
            table.names = Some(names);
            break;
        }
    }

    for (index, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = index + 1;

        let mut tokens = line.split(options.separator);
        let first = tokens.next().unwrap_or("");
        let timestamp = parse_token(first, line_no)?;

        let mut seen_value = false;
        for (col, token) in tokens.enumerate() {
            seen_value = true;
            if col == table.columns.len() {
                // New widest row: backfill the fresh column as missing.
                table.columns.push(vec![f64::NAN; table.timestamps.len()]);
            }
            let value = if token.trim().is_empty() {
                f64::NAN
            } else {
                parse_token(token, line_no)?
            };
            table.columns[col].push(value);
        }

        if !seen_value {
            return Err(ParseError::MissingSeparator { line: line_no });
        }

        table.timestamps.push(timestamp);

        // Short row: the trailing columns are missing for this row.
        for column in table.columns.iter_mut() {
            if column.len() < table.timestamps.len() {
                column.push(f64::NAN);
            }
        }
    }

    Ok(table)
}

fn parse_token(token: &str, line: usize) -> Result<f64, ParseError> {
    token
        .trim()
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidNumber {
            line,
            token: token.trim().to_string(),
        })
}
