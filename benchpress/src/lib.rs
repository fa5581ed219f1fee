#![warn(missing_docs)]
//! # Benchpress
//!
//! Run the same micro-benchmarks against several competing versions of a
//! library ("subjects") and compare them side by side.
//!
//! The benchmark runner hands over a finished [`Report`]: per-test, per-subject
//! statistics (mean, mode, min, max, stdev, rstdev in nanoseconds) and,
//! optionally, peak memory. Benchpress renders it as:
//! - **Text**: fixed-width terminal table
//! - **Markdown**: pipe tables for READMEs and CI summaries
//! - **CSV**: raw means and byte counts
//! - **JSON**: full statistics, machine-readable
//!
//! Every cell of a row is compared to the fastest subject of that row; a
//! subject more than 5% behind is annotated with its slowdown, e.g.
//! `2.00μs (2.0x)`.
//!
//! ## Quick Start
//!
//! ```
//! use benchpress::{OutputFormat, Report, ResultTable, Stat, SubjectStats, render};
//!
//! let stat = |mean: f64| Stat { mean, mode: mean, min: mean, max: mean, stdev: 0.0, rstdev: 0.0 };
//! let mut row = SubjectStats::new();
//! row.insert("stable".to_string(), stat(1_000.0));
//! row.insert("beta".to_string(), stat(2_000.0));
//! let mut results = ResultTable::new();
//! results.insert("benchSelect".to_string(), row);
//!
//! let report = Report::new(vec!["stable".to_string(), "beta".to_string()], results);
//! let table = render(&report, OutputFormat::Markdown).unwrap();
//! assert!(table.contains("| benchSelect | 1.00μs | 2.00μs (2.0x) |"));
//! ```

// Re-export rendering
pub use benchpress_report::{
    MEM_PEAK_SUFFIX, MemoryTable, OutputFormat, Report, ReportError, ResultTable, Stat,
    SubjectPeaks, SubjectStats, format_memory, format_time, generate_cli_report,
    generate_csv_report, generate_json_report, generate_markdown_report, render,
};

// Re-export CLI plumbing
pub use benchpress_cli::{BenchpressConfig, Cli, load_memory, load_report};

/// Run the Benchpress CLI.
///
/// ```ignore
/// fn main() -> anyhow::Result<()> {
///     benchpress::run()
/// }
/// ```
pub use benchpress_cli::run;
