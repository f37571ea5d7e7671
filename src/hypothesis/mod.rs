// Hypothesis testing engine for small numeric tables
//
// Two classical tests over an in-memory matrix:
// - Chi-squared test of independence (rows x columns contingency table)
// - Independent two-sample t-test (Student's pooled variance, two rows)
//
// Each call is pure: the matrix and significance level come in as arguments,
// a fresh `TestResult` (or a typed `HypothesisError`) comes out. Nothing is
// cached between calls, so the functions can be called from any thread.
//
// Implementation:
// - Uses statrs (crates.io) for the chi-squared and Student's t distributions
// - Contingency-table expected frequencies are computed directly from marginals
// - Reported numbers are rounded for display; the decision uses the rounded p-value

mod chi_squared;
mod error;
mod matrix;
mod result;

pub use chi_squared::{compute_chi_squared_test, compute_chi_squared_test_with, ContingencyTable};
pub use error::{HypothesisError, Result};
pub use matrix::NumericMatrix;
pub use result::{round_to, Decision, SignificanceLevel, TestKind, TestResult};
pub use t_test::{compute_t_test_independent, compute_t_test_independent_with, SampleSummary};

use crate::config::TestConfig;

/// Run the test selected by `kind` using alpha, rounding and correction from `config`
///
/// This is the single entry point the CLI uses. The matrix is passed by
/// reference and never stored.
///
/// # Example
/// ```
/// use hypotest::config::TestConfig;
/// use hypotest::hypothesis::{run_test, Decision, NumericMatrix, TestKind};
///
/// let matrix = NumericMatrix::new(vec![vec![10.0, 20.0], vec![30.0, 40.0]]);
/// let result = run_test(TestKind::ChiSquared, &matrix, &TestConfig::default()).unwrap();
/// assert_eq!(result.degrees_of_freedom, 1.0);
/// assert_eq!(result.decision, Decision::AcceptNull);
/// ```
pub fn run_test(kind: TestKind, matrix: &NumericMatrix, config: &TestConfig) -> Result<TestResult> {
    config.validate()?;

    let result = match kind {
        TestKind::ChiSquared => compute_chi_squared_test_with(matrix, config)?,
        TestKind::TTestIndependent => compute_t_test_independent_with(matrix, config)?,
    };

    tracing::debug!(
        test = %kind,
        rows = matrix.n_rows(),
        dof = result.degrees_of_freedom,
        statistic = result.statistic,
        p_value = result.p_value,
        "hypothesis test computed"
    );

    Ok(result)
}
