//! Markdown Output
//!
//! Pipe tables suitable for READMEs, pull requests and `$GITHUB_STEP_SUMMARY`.

use crate::cells::{Cell, memory_cells, time_cells};
use crate::format::{format_memory, format_time};
use crate::report::Report;

fn push_header(output: &mut String, subjects: &[String]) {
    output.push_str("| Test |");
    for subject in subjects {
        output.push_str(&format!(" {} |", subject));
    }
    output.push_str("\n|------|");
    for subject in subjects {
        output.push_str(&"-".repeat(subject.chars().count() + 2));
        output.push('|');
    }
    output.push('\n');
}

fn push_row(output: &mut String, test: &str, cells: &[Option<Cell>], format: fn(f64) -> String) {
    output.push_str(&format!("| {} |", test));
    for cell in cells {
        match cell {
            Some(cell) => output.push_str(&format!(" {} |", cell.display(format))),
            None => output.push_str(" - |"),
        }
    }
    output.push('\n');
}

/// Render a report as Markdown tables
pub fn generate_markdown_report(report: &Report) -> String {
    let mut output = String::new();

    push_header(&mut output, &report.subjects);
    for (test, data) in &report.results {
        let cells = time_cells(data, &report.subjects);
        push_row(&mut output, test, &cells, format_time);
    }

    if let Some(memory) = report.memory_section() {
        output.push_str("\n### Peak Memory\n\n");
        push_header(&mut output, &report.subjects);
        for test in report.results.keys() {
            let cells = memory_cells(memory, test, &report.subjects);
            push_row(&mut output, test, &cells, format_memory);
        }
    }

    output
}
