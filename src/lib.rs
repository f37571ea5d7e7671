//! Hypotest - chi-squared and two-sample t-tests on small numeric tables
//!
//! This library provides a stateless hypothesis testing engine plus the
//! glue a command line needs around it: delimited-text input, a fixed
//! label/value summary table, and text/JSON/CSV renderings of that table.
//!
//! ```
//! use hypotest::hypothesis::{compute_chi_squared_test, NumericMatrix};
//!
//! let table = NumericMatrix::new(vec![vec![10.0, 20.0, 30.0], vec![20.0, 20.0, 10.0]]);
//! let result = compute_chi_squared_test(&table, 0.05).unwrap();
//! assert!(result.decision.is_reject());
//! ```

pub mod cli;
pub mod config;
pub mod csv_output;
pub mod hypothesis;
pub mod input;
pub mod json_output;
pub mod summary;
