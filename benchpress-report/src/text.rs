//! Terminal Output
//!
//! Fixed-width text table for terminal display:
//!
//! ```text
//! Test         Alpha       Beta
//! ───────────────────────────────────
//! benchSelect  1.00μs      2.00μs (2.0x)
//! ```
//!
//! When memory peaks are present, a "Peak Memory" section with the same
//! column layout follows.

use crate::cells::{Cell, memory_cells, time_cells};
use crate::format::{format_memory, format_time};
use crate::report::Report;

/// Minimum width of the test name column
const MIN_TEST_WIDTH: usize = 4;
/// Minimum width of each subject column
const MIN_SUBJECT_WIDTH: usize = 10;
/// Gap between columns
const GAP: &str = "  ";

/// Column widths shared by every section of the table
struct Layout<'a> {
    subjects: &'a [String],
    test_width: usize,
    subject_width: usize,
}

impl<'a> Layout<'a> {
    fn new(report: &'a Report) -> Self {
        let test_width = report
            .results
            .keys()
            .map(|t| t.chars().count())
            .max()
            .unwrap_or(0)
            .max(MIN_TEST_WIDTH);
        let subject_width = report
            .subjects
            .iter()
            .map(|s| s.chars().count())
            .max()
            .unwrap_or(0)
            .max(MIN_SUBJECT_WIDTH);

        Self {
            subjects: &report.subjects,
            test_width,
            subject_width,
        }
    }

    fn push_header(&self, output: &mut String) {
        let mut header = format!("{:<width$}", "Test", width = self.test_width);
        for subject in self.subjects {
            header.push_str(GAP);
            header.push_str(&format!("{:<width$}", subject, width = self.subject_width));
        }

        let rule_len = header.trim_end().chars().count();
        output.push_str(&header);
        output.push('\n');
        output.push_str(&"─".repeat(rule_len));
        output.push('\n');
    }

    fn push_row(
        &self,
        output: &mut String,
        test: &str,
        cells: &[Option<Cell>],
        format: fn(f64) -> String,
    ) {
        output.push_str(&format!("{:<width$}", test, width = self.test_width));
        for cell in cells {
            let text = cell
                .map(|c| c.display(format))
                .unwrap_or_else(|| "-".to_string());
            output.push_str(GAP);
            output.push_str(&format!("{:<width$}", text, width = self.subject_width));
        }
        output.push('\n');
    }
}

/// Render a report as a fixed-width text table
pub fn generate_cli_report(report: &Report) -> String {
    let layout = Layout::new(report);
    let mut output = String::new();

    layout.push_header(&mut output);
    for (test, data) in &report.results {
        let cells = time_cells(data, &report.subjects);
        layout.push_row(&mut output, test, &cells, format_time);
    }

    if let Some(memory) = report.memory_section() {
        output.push_str("\nPeak Memory\n");
        layout.push_header(&mut output);
        for test in report.results.keys() {
            let cells = memory_cells(memory, test, &report.subjects);
            layout.push_row(&mut output, test, &cells, format_memory);
        }
    }

    output
}
