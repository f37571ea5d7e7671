//! CLI argument parsing for hypotest

use crate::config::TestConfig;
use crate::hypothesis::TestKind;
use crate::input::InputOptions;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the result summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable two-column table (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "hypotest")]
#[command(version)]
#[command(about = "Chi-squared and two-sample t-tests on small numeric tables", long_about = None)]
pub struct Cli {
    /// CSV/TSV file holding the table ("-" reads stdin)
    #[arg(value_name = "FILE", conflicts_with = "data")]
    pub input: Option<PathBuf>,

    /// Inline table: rows separated by ';', values by ',' (e.g. "10,20;30,40")
    #[arg(short = 'd', long = "data", value_name = "ROWS", allow_hyphen_values = true)]
    pub data: Option<String>,

    /// Hypothesis test to run
    #[arg(short = 't', long = "test", value_enum, default_value = "chi2test")]
    pub test: TestKind,

    /// Significance level in (0, 1) (default: 0.05, or the config file value)
    #[arg(short = 'a', long = "alpha", value_name = "ALPHA")]
    pub alpha: Option<f64>,

    /// Field delimiter for FILE input
    #[arg(long = "delimiter", value_name = "CHAR", default_value = ",")]
    pub delimiter: char,

    /// Treat the first row of FILE as column names
    #[arg(long = "header")]
    pub header: bool,

    /// Output format (text, json or csv)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Apply Yates' continuity correction to 2x2 chi-squared tables
    #[arg(long = "yates")]
    pub yates: bool,

    /// Decimal places in the reported numbers (default: 3)
    #[arg(long = "decimals", value_name = "N")]
    pub decimals: Option<u32>,

    /// TOML file with default settings (significance_level, decimals, yates_correction)
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug tracing output on stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

impl Cli {
    /// Build the run configuration: config file (if any), then CLI overrides
    pub fn resolve_config(&self) -> Result<TestConfig> {
        let mut config = match &self.config {
            Some(path) => TestConfig::load(path)?,
            None => TestConfig::default(),
        };

        if let Some(alpha) = self.alpha {
            config.significance_level = alpha;
        }
        if let Some(decimals) = self.decimals {
            config.decimals = decimals;
        }
        if self.yates {
            config.yates_correction = true;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reader settings for FILE input
    pub fn input_options(&self) -> Result<InputOptions> {
        if !self.delimiter.is_ascii() {
            anyhow::bail!(
                "Invalid delimiter '{}': must be a single ASCII character",
                self.delimiter
            );
        }
        Ok(InputOptions {
            delimiter: self.delimiter as u8,
            has_header: self.header,
        })
    }
}
