//! Delimited text input for numeric tables
//!
//! Reads CSV/TSV files or an inline `10,20;30,40` string into a
//! [`NumericMatrix`]. Every cell is coerced to `f64`; anything that does not
//! parse is reported with its 1-based row and column. Rows may have
//! different lengths so a t-test file can hold samples of different sizes.

use crate::hypothesis::{HypothesisError, NumericMatrix, Result};
use std::io::Read;

/// How to read a delimited table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Whether the first row holds column names
    pub has_header: bool,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_header: false,
        }
    }
}

impl InputOptions {
    /// Tab-separated values
    pub fn tsv() -> Self {
        Self {
            delimiter: b'\t',
            ..Self::default()
        }
    }

    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }
}

/// Parse a delimited table held in memory
///
/// # Example
/// ```
/// use hypotest::input::{parse_matrix, InputOptions};
///
/// let matrix = parse_matrix("a,b\n10,20\n30,40\n", &InputOptions::default().with_header(true)).unwrap();
/// assert_eq!(matrix.rows(), &[vec![10.0, 20.0], vec![30.0, 40.0]]);
/// ```
pub fn parse_matrix(text: &str, options: &InputOptions) -> Result<NumericMatrix> {
    parse_reader(text.as_bytes(), options)
}

/// Parse a delimited table from any reader (file, stdin)
pub fn parse_reader<R: Read>(reader: R, options: &InputOptions) -> Result<NumericMatrix> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(options.has_header)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let row = record
            .iter()
            .enumerate()
            .map(|(j, field)| parse_cell(field, i + 1, j + 1))
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }

    tracing::trace!(rows = rows.len(), "parsed delimited table");
    Ok(NumericMatrix::new(rows))
}

/// Parse an inline table: rows separated by `;`, values by `,`
///
/// ```
/// use hypotest::input::parse_inline;
///
/// let matrix = parse_inline("1, 2, 3; 4, 5").unwrap();
/// assert_eq!(matrix.rows(), &[vec![1.0, 2.0, 3.0], vec![4.0, 5.0]]);
/// ```
pub fn parse_inline(data: &str) -> Result<NumericMatrix> {
    let mut rows = Vec::new();
    for (i, line) in data.split(';').enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row = line
            .split(',')
            .enumerate()
            .map(|(j, field)| parse_cell(field.trim(), i + 1, j + 1))
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }
    Ok(NumericMatrix::new(rows))
}

/// Coerce one cell to f64
fn parse_cell(field: &str, row: usize, column: usize) -> Result<f64> {
    if field.is_empty() {
        return Err(HypothesisError::InvalidValue {
            row,
            column,
            reason: "empty cell".to_string(),
        });
    }

    field
        .parse::<f64>()
        .map_err(|_| HypothesisError::InvalidValue {
            row,
            column,
            reason: format!("'{}' is not a number", field),
        })
}
