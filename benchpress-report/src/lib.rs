#![warn(missing_docs)]
//! Benchpress Report - Comparative Result Rendering
//!
//! Turns per-test, per-subject statistics into side-by-side comparisons.
//! Each subject cell shows its value and, when it is more than 5% behind
//! the best subject of the row, how many times slower it is.
//!
//! Output formats:
//! - Text (fixed-width terminal table)
//! - Markdown (pipe tables)
//! - CSV (raw values, spreadsheet-compatible)
//! - JSON (full statistics, machine-readable)
//!
//! All renderers are pure functions of a [`Report`].

mod cells;
mod csv;
mod error;
mod format;
mod json;
mod markdown;
mod report;
mod text;

#[cfg(test)]
mod testing;

pub use csv::{MEM_PEAK_SUFFIX, generate_csv_report};
pub use error::ReportError;
pub use format::{format_memory, format_time};
pub use json::generate_json_report;
pub use markdown::generate_markdown_report;
pub use report::{MemoryTable, Report, ResultTable, Stat, SubjectPeaks, SubjectStats};
pub use text::generate_cli_report;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fixed-width table for terminals
    #[default]
    Cli,
    /// Markdown pipe tables
    Markdown,
    /// CSV for spreadsheets
    Csv,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// All formats, in display order
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Cli,
        OutputFormat::Markdown,
        OutputFormat::Csv,
        OutputFormat::Json,
    ];

    /// Canonical name, as accepted by [`str::parse`]
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Cli => "cli",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }

    /// File extension for reports written in this format
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Cli => "txt",
            OutputFormat::Markdown => "md",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cli" | "text" | "human" => Ok(OutputFormat::Cli),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(ReportError::UnknownFormat(other.to_string())),
        }
    }
}

/// Render a report in the given format
pub fn render(report: &Report, format: OutputFormat) -> Result<String, ReportError> {
    let output = match format {
        OutputFormat::Cli => generate_cli_report(report),
        OutputFormat::Markdown => generate_markdown_report(report),
        OutputFormat::Csv => generate_csv_report(report),
        OutputFormat::Json => generate_json_report(report)?,
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!("cli".parse::<OutputFormat>().unwrap(), OutputFormat::Cli);
        assert_eq!("Text".parse::<OutputFormat>().unwrap(), OutputFormat::Cli);
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!(matches!(
            "yaml".parse::<OutputFormat>(),
            Err(ReportError::UnknownFormat(name)) if name == "yaml"
        ));
    }

    #[test]
    fn test_name_round_trips() {
        for format in OutputFormat::ALL {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_render_dispatch_is_idempotent() {
        let report = testing::report(vec![(
            "benchSelect",
            vec![("Alpha", 1_000.0), ("Beta", 2_000.0)],
        )]);
        for format in OutputFormat::ALL {
            let first = render(&report, format).unwrap();
            assert_eq!(first, render(&report, format).unwrap());
        }
        assert_eq!(
            render(&report, OutputFormat::Markdown).unwrap(),
            generate_markdown_report(&report)
        );
    }
}
