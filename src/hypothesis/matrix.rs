//! Numeric matrix passed into the engine
//!
//! The matrix is a plain list of rows. Rows are allowed to differ in length
//! at construction time because the t-test treats each row as an independent
//! sample; the chi-squared test checks rectangularity itself.

use super::error::{HypothesisError, Result};
use serde::{Deserialize, Serialize};

/// Ordered rows of `f64` values supplied by the caller
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NumericMatrix {
    rows: Vec<Vec<f64>>,
}

impl NumericMatrix {
    /// Wrap caller-supplied rows without validation
    pub fn new(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    /// Build a two-row matrix from two independent samples
    pub fn from_samples(first: &[f64], second: &[f64]) -> Self {
        Self {
            rows: vec![first.to_vec(), second.to_vec()],
        }
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Column count if every row has the same length, `None` for ragged or empty matrices
    pub fn n_cols(&self) -> Option<usize> {
        let first = self.rows.first()?.len();
        self.rows
            .iter()
            .all(|row| row.len() == first)
            .then_some(first)
    }

    pub fn is_rectangular(&self) -> bool {
        self.n_cols().is_some()
    }

    /// Total number of cells across all rows
    pub fn total_elements(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_elements() == 0
    }

    /// Reject NaN and infinite cells
    ///
    /// Row and column numbers in the error are 1-based, matching what a
    /// user sees in a spreadsheet.
    pub fn ensure_finite(&self) -> Result<()> {
        for (i, row) in self.rows.iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                if !value.is_finite() {
                    return Err(HypothesisError::InvalidValue {
                        row: i + 1,
                        column: j + 1,
                        reason: format!("value {} is not finite", value),
                    });
                }
            }
        }
        Ok(())
    }

    /// Reject negative cells (contingency tables hold counts)
    pub fn ensure_non_negative(&self) -> Result<()> {
        for (i, row) in self.rows.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                if value < 0.0 {
                    return Err(HypothesisError::InvalidValue {
                        row: i + 1,
                        column: j + 1,
                        reason: format!("negative count {}", value),
                    });
                }
            }
        }
        Ok(())
    }
}
