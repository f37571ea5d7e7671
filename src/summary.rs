//! Label/value summary of a test result
//!
//! The row order and labels below are what downstream renderers key on:
//! header, Type Test, Level of Significance, Probability, Calculated Value,
//! Critical Value, p Value, Decision.

use crate::hypothesis::TestResult;
use serde::{Deserialize, Serialize};

pub const HEADER: (&str, &str) = (" ", "Summary");
pub const LABEL_TEST_TYPE: &str = "Type Test";
pub const LABEL_SIGNIFICANCE: &str = "Level of Significance";
pub const LABEL_PROBABILITY: &str = "Probability";
pub const LABEL_STATISTIC: &str = "Calculated Value";
pub const LABEL_CRITICAL: &str = "Critical Value";
pub const LABEL_P_VALUE: &str = "p Value";
pub const LABEL_DECISION: &str = "Decision";

/// One label/value line of the summary table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub label: String,
    pub value: String,
}

impl SummaryRow {
    fn new(label: &str, value: String) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

/// Ordered summary rows for one result, header first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub rows: Vec<SummaryRow>,
}

impl Summary {
    pub fn from_result(result: &TestResult) -> Self {
        let rows = vec![
            SummaryRow::new(HEADER.0, HEADER.1.to_string()),
            SummaryRow::new(LABEL_TEST_TYPE, result.test_kind.label().to_string()),
            SummaryRow::new(LABEL_SIGNIFICANCE, format_number(result.alpha)),
            SummaryRow::new(
                LABEL_PROBABILITY,
                format_number(result.confidence_probability),
            ),
            SummaryRow::new(LABEL_STATISTIC, format_number(result.statistic)),
            SummaryRow::new(LABEL_CRITICAL, format_number(result.critical_value)),
            SummaryRow::new(LABEL_P_VALUE, format_number(result.p_value)),
            SummaryRow::new(LABEL_DECISION, result.decision.label().to_string()),
        ];
        Self { rows }
    }

    /// Labels in display order, header included
    pub fn labels(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.label.as_str()).collect()
    }

    /// Render as an aligned two-column text table
    pub fn to_text(&self) -> String {
        let width = self
            .rows
            .iter()
            .map(|r| r.label.chars().count())
            .max()
            .unwrap_or(0);

        let mut report = String::new();
        for (i, row) in self.rows.iter().enumerate() {
            report.push_str(&format!("{:<width$}  {}\n", row.label, row.value, width = width));
            if i == 0 {
                report.push_str(&format!("{}\n", "─".repeat(width + 2 + row.value.len())));
            }
        }
        report
    }
}

/// Shortest round-trip form, but always with a fractional part (`1.0`, not `1`)
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
