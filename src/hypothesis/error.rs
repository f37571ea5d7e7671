//! Error types for hypothesis test computation

use thiserror::Error;

/// Errors raised by the hypothesis testing engine
///
/// Every failure is local to the computation; the engine never touches
/// files or the network. Callers decide how to present a failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HypothesisError {
    /// Wrong number of rows or columns, empty rows, or a ragged table
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    /// A cell is negative (where counts are required), non-finite, or not a number
    #[error("Invalid value at row {row}, column {column}: {reason}")]
    InvalidValue {
        row: usize,
        column: usize,
        reason: String,
    },

    /// Marginal sums or variances make the statistic undefined
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// Alpha outside the open interval (0, 1)
    #[error("Significance level must be in (0, 1), got {0}")]
    InvalidSignificanceLevel(f64),

    /// Engine configuration is out of range (rounding precision, etc.)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The distribution library rejected a parameter
    #[error("Distribution error: {0}")]
    Distribution(String),

    /// Delimited input could not be read
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<csv::Error> for HypothesisError {
    fn from(err: csv::Error) -> Self {
        HypothesisError::Parse(err.to_string())
    }
}

/// Result type for hypothesis testing operations
pub type Result<T> = std::result::Result<T, HypothesisError>;
