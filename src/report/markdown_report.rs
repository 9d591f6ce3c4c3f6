//! @ai:module:intent Markdown rendering of the result table
//! @ai:module:layer infrastructure
//! @ai:module:public_api MarkdownReporter
//! @ai:module:stateless true

use crate::error::Result;
use crate::report::{format_cell, TableRendererTrait, TableReport};
use std::fmt::Write as FmtWrite;

/// @ai:intent Generates Markdown tables from aggregated results
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// @ai:intent Create a new Markdown reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    fn row(cells: &[String]) -> String {
        format!("| {} |", cells.join(" | "))
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRendererTrait for MarkdownReporter {
    /// @ai:intent Render a pipe table with numbers right-aligned
    /// @ai:effects pure
    fn render(&self, report: &TableReport) -> Result<String> {
        let table = &report.table;
        let mut output = String::new();

        let mut header = vec!["tLam".to_string(), "scenario".to_string()];
        header.extend(table.columns.iter().cloned());
        writeln!(output, "{}", Self::row(&header)).unwrap();

        let mut rule = vec!["----".to_string(), "--------".to_string()];
        rule.extend(table.columns.iter().map(|_| "---:".to_string()));
        writeln!(output, "{}", Self::row(&rule)).unwrap();

        for row in &table.rows {
            let mut cells = vec![row.t_lam.clone(), row.scenario.label().to_string()];
            cells.extend(row.cells.iter().map(|c| format_cell(*c)));
            writeln!(output, "{}", Self::row(&cells)).unwrap();
        }

        Ok(output)
    }
}
