//! Result record and small value types shared by both tests

use super::error::{HypothesisError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which hypothesis test to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum TestKind {
    /// Chi-squared test of independence on a contingency table
    #[value(name = "chi2test")]
    #[serde(rename = "chi2test")]
    ChiSquared,
    /// Independent two-sample t-test (one sample per row)
    #[value(name = "ttest")]
    #[serde(rename = "ttest")]
    TTestIndependent,
}

impl TestKind {
    /// Label shown in the summary table
    ///
    /// "independant" is misspelled on purpose: downstream consumers match
    /// on this exact string.
    pub fn label(&self) -> &'static str {
        match self {
            TestKind::ChiSquared => "Chi2 Test",
            TestKind::TTestIndependent => "T Test (independant)",
        }
    }
}

impl fmt::Display for TestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accept or reject the null hypothesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    RejectNull,
    AcceptNull,
}

impl Decision {
    /// Reject when `p_value <= alpha`
    pub fn from_p_value(p_value: f64, alpha: f64) -> Self {
        if p_value <= alpha {
            Decision::RejectNull
        } else {
            Decision::AcceptNull
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Decision::RejectNull => "Reject H0",
            Decision::AcceptNull => "Accept H0",
        }
    }

    pub fn is_reject(&self) -> bool {
        matches!(self, Decision::RejectNull)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Significance level (alpha), guaranteed to lie in the open interval (0, 1)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SignificanceLevel(f64);

impl SignificanceLevel {
    pub fn new(alpha: f64) -> Result<Self> {
        if alpha.is_finite() && alpha > 0.0 && alpha < 1.0 {
            Ok(Self(alpha))
        } else {
            Err(HypothesisError::InvalidSignificanceLevel(alpha))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Cumulative probability used for the critical value (1 - alpha)
    pub fn confidence(&self) -> f64 {
        1.0 - self.0
    }
}

/// Summary of one hypothesis test
///
/// All reported reals are rounded to the configured number of decimals.
/// `decision` is derived from the rounded `p_value`, so the two can never
/// disagree in a rendered table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub test_kind: TestKind,
    /// Significance level the decision was made at
    pub alpha: f64,
    /// 1 - alpha
    pub confidence_probability: f64,
    /// Chi-squared or t statistic
    pub statistic: f64,
    /// Quantile of the reference distribution at 1 - alpha
    pub critical_value: f64,
    /// Upper-tail (chi-squared) or two-tailed (t) p-value
    pub p_value: f64,
    /// Degrees of freedom of the reference distribution
    pub degrees_of_freedom: f64,
    pub decision: Decision,
}

/// Raw (unrounded) numbers produced by a test before packaging
#[derive(Debug, Clone, Copy)]
pub(crate) struct RawOutcome {
    pub statistic: f64,
    pub critical_value: f64,
    pub p_value: f64,
    pub degrees_of_freedom: f64,
}

impl TestResult {
    pub(crate) fn from_raw(
        test_kind: TestKind,
        alpha: SignificanceLevel,
        raw: RawOutcome,
        decimals: u32,
    ) -> Self {
        let p_value = round_to(raw.p_value.clamp(0.0, 1.0), decimals);
        Self {
            test_kind,
            alpha: alpha.value(),
            confidence_probability: round_to(alpha.confidence(), decimals),
            statistic: round_to(raw.statistic, decimals),
            critical_value: round_to(raw.critical_value, decimals),
            p_value,
            degrees_of_freedom: raw.degrees_of_freedom,
            decision: Decision::from_p_value(p_value, alpha.value()),
        }
    }
}

/// Round half away from zero to `decimals` places
///
/// Values too large to scale without overflow are returned unchanged.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_three_places() {
        assert_eq!(round_to(0.793650, 3), 0.794);
        assert_eq!(round_to(-1.897366, 3), -1.897);
        assert_eq!(round_to(3.841458, 3), 3.841);
        assert_eq!(round_to(2.0, 3), 2.0);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_to(0.5, 0), 1.0);
        assert_eq!(round_to(-0.5, 0), -1.0);
        assert_eq!(round_to(2.5, 0), 3.0);
    }

    #[test]
    fn test_round_keeps_huge_values() {
        assert_eq!(round_to(f64::MAX, 3), f64::MAX);
        assert!(round_to(f64::INFINITY, 3).is_infinite());
    }

    #[test]
    fn test_decision_boundary_is_inclusive() {
        assert_eq!(Decision::from_p_value(0.05, 0.05), Decision::RejectNull);
        assert_eq!(Decision::from_p_value(0.051, 0.05), Decision::AcceptNull);
        assert_eq!(Decision::from_p_value(0.02, 0.01), Decision::AcceptNull);
    }

    #[test]
    fn test_significance_level_bounds() {
        assert!(SignificanceLevel::new(0.05).is_ok());
        assert!(SignificanceLevel::new(0.999).is_ok());
        assert!(SignificanceLevel::new(0.0).is_err());
        assert!(SignificanceLevel::new(1.0).is_err());
        assert!(SignificanceLevel::new(-0.1).is_err());
        assert!(SignificanceLevel::new(f64::NAN).is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(TestKind::ChiSquared.to_string(), "Chi2 Test");
        assert_eq!(TestKind::TTestIndependent.to_string(), "T Test (independant)");
        assert_eq!(Decision::RejectNull.to_string(), "Reject H0");
        assert_eq!(Decision::AcceptNull.to_string(), "Accept H0");
    }

    #[test]
    fn test_from_raw_rounds_and_decides() {
        let alpha = SignificanceLevel::new(0.05).unwrap();
        let raw = RawOutcome {
            statistic: 4.123456,
            critical_value: 3.841458,
            p_value: 0.0423,
            degrees_of_freedom: 1.0,
        };
        let result = TestResult::from_raw(TestKind::ChiSquared, alpha, raw, 3);
        assert_eq!(result.statistic, 4.123);
        assert_eq!(result.critical_value, 3.841);
        assert_eq!(result.p_value, 0.042);
        assert_eq!(result.confidence_probability, 0.95);
        assert_eq!(result.decision, Decision::RejectNull);
    }

    #[test]
    fn test_from_raw_clamps_p_value() {
        let alpha = SignificanceLevel::new(0.05).unwrap();
        let raw = RawOutcome {
            statistic: 0.0,
            critical_value: 1.0,
            p_value: 1.0000000002,
            degrees_of_freedom: 4.0,
        };
        let result = TestResult::from_raw(TestKind::TTestIndependent, alpha, raw, 3);
        assert_eq!(result.p_value, 1.0);
    }
}
