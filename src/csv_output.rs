//! CSV output format for the summary table
//!
//! Two columns (`label,value`), one line per summary row, header row first.

use crate::summary::Summary;

/// CSV output formatter
#[derive(Debug)]
pub struct CsvOutput<'a> {
    summary: &'a Summary,
}

impl<'a> CsvOutput<'a> {
    pub fn new(summary: &'a Summary) -> Self {
        Self { summary }
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();
        for row in &self.summary.rows {
            output.push_str(&Self::escape_field(&row.label));
            output.push(',');
            output.push_str(&Self::escape_field(&row.value));
            output.push('\n');
        }
        output
    }
}
