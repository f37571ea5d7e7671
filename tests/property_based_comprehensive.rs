//! Property-based tests for the hypothesis testing engine
//!
//! Invariants checked over random tables and samples:
//! 1. Chi-squared statistic is non-negative and p-value lies in [0, 1]
//! 2. Decision is RejectNull exactly when p-value <= alpha
//! 3. Identical inputs give bit-identical results
//! 4. Zero rows or columns always produce DegenerateInput

use hypotest::hypothesis::{
    compute_chi_squared_test, compute_t_test_independent, Decision, HypothesisError,
    NumericMatrix,
};
use proptest::prelude::*;

/// Rectangular tables of positive counts, 2..5 rows by 2..5 columns
fn count_table() -> impl Strategy<Value = Vec<Vec<f64>>> {
    (2usize..5, 2usize..5).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(prop::collection::vec(1u32..500, cols), rows)
            .prop_map(|t: Vec<Vec<u32>>| -> Vec<Vec<f64>> {
                t.into_iter()
                    .map(|r| r.into_iter().map(f64::from).collect())
                    .collect()
            })
    })
}

fn alpha() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.01), Just(0.025), Just(0.05), 0.001f64..0.5]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_chi_squared_ranges(rows in count_table(), alpha in alpha()) {
        let result = compute_chi_squared_test(&NumericMatrix::new(rows), alpha).unwrap();

        prop_assert!(result.statistic >= 0.0);
        prop_assert!((0.0..=1.0).contains(&result.p_value));
        prop_assert!(result.critical_value > 0.0);
    }

    #[test]
    fn prop_chi_squared_decision_consistent(rows in count_table(), alpha in alpha()) {
        let result = compute_chi_squared_test(&NumericMatrix::new(rows), alpha).unwrap();

        let reject = result.p_value <= alpha;
        prop_assert_eq!(result.decision == Decision::RejectNull, reject);
    }

    #[test]
    fn prop_chi_squared_deterministic(rows in count_table()) {
        let m = NumericMatrix::new(rows);
        let a = compute_chi_squared_test(&m, 0.05).unwrap();
        let b = compute_chi_squared_test(&m, 0.05).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_zero_row_is_degenerate(mut rows in count_table(), which in 0usize..5) {
        let i = which % rows.len();
        for cell in rows[i].iter_mut() {
            *cell = 0.0;
        }
        let err = compute_chi_squared_test(&NumericMatrix::new(rows), 0.05).unwrap_err();
        prop_assert!(matches!(err, HypothesisError::DegenerateInput(_)));
    }

    #[test]
    fn prop_zero_column_is_degenerate(mut rows in count_table(), which in 0usize..5) {
        let j = which % rows[0].len();
        for row in rows.iter_mut() {
            row[j] = 0.0;
        }
        let err = compute_chi_squared_test(&NumericMatrix::new(rows), 0.05).unwrap_err();
        prop_assert!(matches!(err, HypothesisError::DegenerateInput(_)));
    }

    #[test]
    fn prop_t_test_decision_consistent(
        a in prop::collection::vec(-100.0f64..100.0, 2..20),
        b in prop::collection::vec(-100.0f64..100.0, 2..20),
        alpha in alpha(),
    ) {
        let m = NumericMatrix::from_samples(&a, &b);
        let result = compute_t_test_independent(&m, alpha).unwrap();

        prop_assert!((0.0..=1.0).contains(&result.p_value));
        prop_assert_eq!(result.degrees_of_freedom, (a.len() + b.len() - 2) as f64);
        prop_assert_eq!(result.decision == Decision::RejectNull, result.p_value <= alpha);
    }
}
