// Configuration for hypothesis test runs
//
// Alpha, display precision and the optional continuity correction travel
// together so the CLI, a config file and library callers all describe a run
// the same way. Values from a TOML file act as defaults; CLI flags win.

use crate::hypothesis::{HypothesisError, SignificanceLevel};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest rounding precision accepted; f64 carries ~15-17 significant digits
pub const MAX_DECIMALS: u32 = 15;

/// Configuration for a single hypothesis test
///
/// # Example
/// ```
/// use hypotest::config::TestConfig;
///
/// let config = TestConfig::default();
/// assert_eq!(config.significance_level, 0.05); // 95% confidence
/// assert_eq!(config.decimals, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestConfig {
    /// Significance level (alpha) for the accept/reject decision
    ///
    /// - 0.05 (default): 95% confidence
    /// - 0.025: 97.5% confidence
    /// - 0.01: 99% confidence
    ///
    /// Any value in the open interval (0, 1) is accepted.
    pub significance_level: f64,

    /// Decimal places reported for statistic, critical value, p-value and probability
    ///
    /// Default: 3
    pub decimals: u32,

    /// Apply Yates' continuity correction to 2x2 tables (chi-squared only)
    ///
    /// Ignored for tables with more than one degree of freedom.
    ///
    /// Default: false
    pub yates_correction: bool,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            significance_level: 0.05,
            decimals: 3,
            yates_correction: false,
        }
    }
}

impl TestConfig {
    /// Default configuration at a different significance level
    pub fn with_alpha(alpha: f64) -> Self {
        Self {
            significance_level: alpha,
            ..Self::default()
        }
    }

    /// 99% confidence (alpha = 0.01)
    pub fn strict() -> Self {
        Self::with_alpha(0.01)
    }

    /// 90% confidence (alpha = 0.10)
    pub fn permissive() -> Self {
        Self::with_alpha(0.10)
    }

    /// Validate configuration
    pub fn validate(&self) -> crate::hypothesis::Result<()> {
        SignificanceLevel::new(self.significance_level)?;

        if self.decimals > MAX_DECIMALS {
            return Err(HypothesisError::InvalidConfig(format!(
                "decimals must be <= {}, got {}",
                MAX_DECIMALS, self.decimals
            )));
        }

        Ok(())
    }

    /// Parse a TOML document; missing keys fall back to defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: TestConfig = toml::from_str(text).context("Failed to parse config TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }
}
