//! @ai:module:intent Rendering of aggregated result tables and maps
//! @ai:module:layer infrastructure
//! @ai:module:public_api ReportGenerator, TableFormat, TableReport, LatexReporter, MarkdownReporter, JsonReporter, MapChart

pub mod charts;
pub mod json_report;
pub mod latex_report;
pub mod markdown_report;

pub use charts::{MapChart, MapChartTrait, MapView};
pub use json_report::JsonReporter;
pub use latex_report::LatexReporter;
pub use markdown_report::MarkdownReporter;

use crate::error::Result;
use crate::metrics::AggregateTable;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// @ai:intent Output format for the result table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    #[default]
    Latex,
    Markdown,
    Json,
}

/// @ai:intent Aggregated table with the provenance shown in reports
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableReport {
    pub generated_at: String,
    pub source: PathBuf,
    pub file_count: usize,
    pub record_count: usize,
    pub table: AggregateTable,
}

/// @ai:intent Trait for rendering a table report to text
pub trait TableRendererTrait: Send + Sync {
    /// @ai:intent Render the report as a complete document fragment
    fn render(&self, report: &TableReport) -> Result<String>;
}

/// @ai:intent Format an integer with ',' between groups of three digits
/// @ai:effects pure
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

/// @ai:intent Text for one table cell; missing combinations stay empty
/// @ai:effects pure
pub fn format_cell(cell: Option<i64>) -> String {
    cell.map(format_thousands).unwrap_or_default()
}

/// @ai:intent Combined report generator dispatching on the table format
pub struct ReportGenerator {
    latex: LatexReporter,
    markdown: MarkdownReporter,
    json: JsonReporter,
}

impl ReportGenerator {
    /// @ai:intent Create a new report generator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self {
            latex: LatexReporter::new(),
            markdown: MarkdownReporter::new(),
            json: JsonReporter::new(),
        }
    }

    /// @ai:intent Render the report in the requested format
    /// @ai:effects pure
    pub fn render(&self, report: &TableReport, format: TableFormat) -> Result<String> {
        match format {
            TableFormat::Latex => self.latex.render(report),
            TableFormat::Markdown => self.markdown.render(report),
            TableFormat::Json => self.json.render(report),
        }
    }

    /// @ai:intent Render the report and write it to a file
    /// @ai:effects fs:write
    pub fn write(&self, report: &TableReport, format: TableFormat, path: &Path) -> Result<()> {
        let content = self.render(report, format)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        tracing::info!("Table written to {}", path.display());
        Ok(())
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::metrics::{Scenario, TableRow};
    use tempfile::TempDir;

    pub(crate) fn sample_report() -> TableReport {
        TableReport {
            generated_at: "2026-10-18T00:00:00+00:00".to_string(),
            source: PathBuf::from("data/experimentData/testData_08_25"),
            file_count: 3,
            record_count: 9,
            table: AggregateTable {
                columns: vec!["0.00".to_string(), "0.50".to_string()],
                rows: vec![
                    TableRow {
                        t_lam: "0.99".to_string(),
                        scenario: Scenario::Base,
                        cells: vec![Some(12345), Some(1234567)],
                    },
                    TableRow {
                        t_lam: "0.99".to_string(),
                        scenario: Scenario::LowDemand,
                        cells: vec![None, Some(987)],
                    },
                    TableRow {
                        t_lam: "1.00".to_string(),
                        scenario: Scenario::HighRejectionCosts,
                        cells: vec![Some(-4500), None],
                    },
                ],
            },
        }
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(12345), "12,345");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(-4500), "-4,500");
        assert_eq!(format_thousands(-999), "-999");
    }

    #[test]
    fn test_format_cell_missing_is_empty() {
        assert_eq!(format_cell(None), "");
        assert_eq!(format_cell(Some(200)), "200");
    }

    #[test]
    fn test_render_dispatches_on_format() {
        let generator = ReportGenerator::new();
        let report = sample_report();

        let latex = generator.render(&report, TableFormat::Latex).unwrap();
        let markdown = generator.render(&report, TableFormat::Markdown).unwrap();
        let json = generator.render(&report, TableFormat::Json).unwrap();

        assert!(latex.starts_with("\\begin{tabular}"));
        assert!(markdown.starts_with("| tLam"));
        assert!(json.trim_start().starts_with('{'));
    }

    #[test]
    fn test_write_creates_parent_directory() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tables").join("results.tex");

        ReportGenerator::new()
            .write(&sample_report(), TableFormat::Latex, &path)
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("12,345"));
    }
}
