//! @ai:module:intent LaTeX tabular rendering of the result table
//! @ai:module:layer infrastructure
//! @ai:module:public_api LatexReporter
//! @ai:module:stateless true

use crate::error::Result;
use crate::report::{format_cell, TableRendererTrait, TableReport};
use std::fmt::Write as FmtWrite;

/// @ai:intent Renders the table as a booktabs tabular
pub struct LatexReporter;

impl LatexReporter {
    /// @ai:intent Create a new LaTeX reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Escape characters that LaTeX treats specially
    /// @ai:effects pure
    fn escape(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());

        for ch in text.chars() {
            match ch {
                '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                    escaped.push('\\');
                    escaped.push(ch);
                }
                '~' => escaped.push_str("\\textasciitilde{}"),
                '^' => escaped.push_str("\\textasciicircum{}"),
                '\\' => escaped.push_str("\\textbackslash{}"),
                _ => escaped.push(ch),
            }
        }

        escaped
    }

    fn row(cells: &[String]) -> String {
        format!("{} \\\\", cells.join(" & "))
    }
}

impl Default for LatexReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRendererTrait for LatexReporter {
    /// @ai:intent Render a tabular with the tLam label shown once per run of equal values
    /// @ai:effects pure
    fn render(&self, report: &TableReport) -> Result<String> {
        let table = &report.table;
        let width = table.columns.len();
        let mut output = String::new();

        writeln!(output, "\\begin{{tabular}}{{ll{}}}", "l".repeat(width)).unwrap();
        writeln!(output, "\\toprule").unwrap();

        if width > 0 {
            let mut super_header = vec![String::new(), String::new()];
            super_header.push(format!("\\multicolumn{{{}}}{{l}}{{ObjValue}}", width));
            writeln!(output, "{}", Self::row(&super_header)).unwrap();

            let mut column_header = vec![String::new(), "sLam".to_string()];
            column_header.extend(table.columns.iter().map(|c| Self::escape(c)));
            writeln!(output, "{}", Self::row(&column_header)).unwrap();
        }

        let mut index_header = vec!["tLam".to_string(), "scenario".to_string()];
        index_header.extend(std::iter::repeat(String::new()).take(width));
        writeln!(output, "{}", Self::row(&index_header)).unwrap();
        writeln!(output, "\\midrule").unwrap();

        let mut previous_t_lam: Option<&str> = None;

        for row in &table.rows {
            let t_lam = if previous_t_lam == Some(row.t_lam.as_str()) {
                String::new()
            } else {
                Self::escape(&row.t_lam)
            };
            previous_t_lam = Some(row.t_lam.as_str());

            let mut cells = vec![t_lam, Self::escape(row.scenario.label())];
            cells.extend(row.cells.iter().map(|c| format_cell(*c)));
            writeln!(output, "{}", Self::row(&cells)).unwrap();
        }

        writeln!(output, "\\bottomrule").unwrap();
        writeln!(output, "\\end{{tabular}}").unwrap();

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::AggregateTable;
    use crate::report::tests::sample_report;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape() {
        assert_eq!(LatexReporter::escape("High rej. costs"), "High rej. costs");
        assert_eq!(LatexReporter::escape("a_b & 50%"), "a\\_b \\& 50\\%");
    }

    #[test]
    fn test_render_full_table() {
        let output = LatexReporter::new().render(&sample_report()).unwrap();

        let expected = "\
\\begin{tabular}{llll}
\\toprule
 &  & \\multicolumn{2}{l}{ObjValue} \\\\
 & sLam & 0.00 & 0.50 \\\\
tLam & scenario &  &  \\\\
\\midrule
0.99 & base & 12,345 & 1,234,567 \\\\
 & Low demand &  & 987 \\\\
1.00 & High rej. costs & -4,500 &  \\\\
\\bottomrule
\\end{tabular}
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_render_empty_table() {
        let mut report = sample_report();
        report.table = AggregateTable::default();

        let output = LatexReporter::new().render(&report).unwrap();
        assert_eq!(
            output,
            "\\begin{tabular}{ll}\n\\toprule\ntLam & scenario \\\\\n\\midrule\n\\bottomrule\n\\end{tabular}\n"
        );
    }
}
