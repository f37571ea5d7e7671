//! JSON output format for test results

use crate::hypothesis::TestResult;
use crate::summary::{Summary, SummaryRow};
use serde::{Deserialize, Serialize};

/// Complete JSON document for one test run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput {
    /// Format version identifier
    pub version: String,
    /// Output format name
    pub format: String,
    /// Structured result
    pub result: TestResult,
    /// Summary table rows in display order
    pub summary: Vec<SummaryRow>,
}

impl JsonOutput {
    pub fn new(result: &TestResult) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "hypotest-json-v1".to_string(),
            result: result.clone(),
            summary: Summary::from_result(result).rows,
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
