// Chi-squared test of independence
//
// Expected frequencies come straight from the table marginals:
//   E(i,j) = rowSum(i) * colSum(j) / total
// and the statistic is the Pearson sum of (O - E)^2 / E over every cell.
// The reference distribution is chi-squared with (rows - 1)(cols - 1)
// degrees of freedom, evaluated with statrs.

use super::error::{HypothesisError, Result};
use super::matrix::NumericMatrix;
use super::result::{RawOutcome, SignificanceLevel, TestKind, TestResult};
use crate::config::TestConfig;
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Validated contingency table with precomputed marginals
#[derive(Debug, Clone)]
pub struct ContingencyTable {
    observed: Vec<Vec<f64>>,
    row_sums: Vec<f64>,
    col_sums: Vec<f64>,
    total: f64,
}

impl ContingencyTable {
    /// Validate shape and values, then compute marginals
    ///
    /// Fails with `InvalidShape` for fewer than 2 rows or columns or a ragged
    /// table, `InvalidValue` for negative or non-finite counts, and
    /// `DegenerateInput` when any row or column sums to zero.
    pub fn from_matrix(matrix: &NumericMatrix) -> Result<Self> {
        let n_rows = matrix.n_rows();
        if n_rows < 2 {
            return Err(HypothesisError::InvalidShape(format!(
                "chi-squared test needs at least 2 rows, got {}",
                n_rows
            )));
        }

        let n_cols = matrix.n_cols().ok_or_else(|| {
            HypothesisError::InvalidShape(
                "chi-squared test needs a rectangular table (rows differ in length)".to_string(),
            )
        })?;
        if n_cols < 2 {
            return Err(HypothesisError::InvalidShape(format!(
                "chi-squared test needs at least 2 columns, got {}",
                n_cols
            )));
        }

        matrix.ensure_finite()?;
        matrix.ensure_non_negative()?;

        let observed = matrix.rows().to_vec();
        let row_sums: Vec<f64> = observed.iter().map(|row| row.iter().sum()).collect();
        let col_sums: Vec<f64> = (0..n_cols)
            .map(|j| observed.iter().map(|row| row[j]).sum())
            .collect();
        let total: f64 = row_sums.iter().sum();
        if !total.is_finite() {
            return Err(HypothesisError::DegenerateInput(
                "table total overflows f64".to_string(),
            ));
        }

        if let Some(i) = row_sums.iter().position(|&s| s == 0.0) {
            return Err(HypothesisError::DegenerateInput(format!(
                "row {} sums to zero, expected frequencies are undefined",
                i + 1
            )));
        }
        if let Some(j) = col_sums.iter().position(|&s| s == 0.0) {
            return Err(HypothesisError::DegenerateInput(format!(
                "column {} sums to zero, expected frequencies are undefined",
                j + 1
            )));
        }

        Ok(Self {
            observed,
            row_sums,
            col_sums,
            total,
        })
    }

    pub fn n_rows(&self) -> usize {
        self.row_sums.len()
    }

    pub fn n_cols(&self) -> usize {
        self.col_sums.len()
    }

    pub fn row_sums(&self) -> &[f64] {
        &self.row_sums
    }

    pub fn col_sums(&self) -> &[f64] {
        &self.col_sums
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    /// Expected frequency of cell (i, j) under independence
    pub fn expected(&self, i: usize, j: usize) -> f64 {
        self.row_sums[i] * self.col_sums[j] / self.total
    }

    /// Full table of expected frequencies
    pub fn expected_table(&self) -> Vec<Vec<f64>> {
        (0..self.n_rows())
            .map(|i| (0..self.n_cols()).map(|j| self.expected(i, j)).collect())
            .collect()
    }

    /// (rows - 1) * (cols - 1)
    pub fn degrees_of_freedom(&self) -> usize {
        (self.n_rows() - 1) * (self.n_cols() - 1)
    }

    /// Pearson chi-squared statistic
    ///
    /// With `yates_correction` set and a single degree of freedom, each
    /// observed count is first pulled toward its expected value by at most
    /// 0.5 (never past it).
    pub fn statistic(&self, yates_correction: bool) -> f64 {
        let correct = yates_correction && self.degrees_of_freedom() == 1;

        let mut statistic = 0.0;
        for (i, row) in self.observed.iter().enumerate() {
            for (j, &observed) in row.iter().enumerate() {
                let expected = self.expected(i, j);
                let mut diff = observed - expected;
                if correct {
                    let shrink = diff.abs().min(0.5);
                    diff -= shrink * diff.signum();
                }
                statistic += diff * diff / expected;
            }
        }
        statistic
    }
}

/// Chi-squared test of independence at significance level `alpha`
///
/// Uses three-decimal rounding and no continuity correction.
///
/// # Example
/// ```
/// use hypotest::hypothesis::{compute_chi_squared_test, Decision, NumericMatrix};
///
/// let table = NumericMatrix::new(vec![vec![10.0, 20.0], vec![30.0, 40.0]]);
/// let result = compute_chi_squared_test(&table, 0.05).unwrap();
/// assert_eq!(result.statistic, 0.794);
/// assert_eq!(result.decision, Decision::AcceptNull);
/// ```
pub fn compute_chi_squared_test(matrix: &NumericMatrix, alpha: f64) -> Result<TestResult> {
    compute_chi_squared_test_with(matrix, &TestConfig::with_alpha(alpha))
}

/// Chi-squared test using alpha, rounding and correction from `config`
pub fn compute_chi_squared_test_with(
    matrix: &NumericMatrix,
    config: &TestConfig,
) -> Result<TestResult> {
    let alpha = SignificanceLevel::new(config.significance_level)?;
    let table = ContingencyTable::from_matrix(matrix)?;

    let dof = table.degrees_of_freedom() as f64;
    let statistic = table.statistic(config.yates_correction);
    if !statistic.is_finite() {
        return Err(HypothesisError::DegenerateInput(format!(
            "chi-squared statistic is not finite ({})",
            statistic
        )));
    }

    let distribution =
        ChiSquared::new(dof).map_err(|e| HypothesisError::Distribution(e.to_string()))?;
    let p_value = distribution.sf(statistic);
    let critical_value = distribution.inverse_cdf(alpha.confidence());

    Ok(TestResult::from_raw(
        TestKind::ChiSquared,
        alpha,
        RawOutcome {
            statistic,
            critical_value,
            p_value,
            degrees_of_freedom: dof,
        },
        config.decimals,
    ))
}
