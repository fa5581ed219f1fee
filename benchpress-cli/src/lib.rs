#![warn(missing_docs)]
//! Benchpress CLI Library
//!
//! Loads a finished result document from the benchmark runner, settles the
//! subject order, validates it and renders the comparison in the requested
//! format to stdout or a file.
//!
//! # Example
//!
//! ```text
//! benchpress results.json --format markdown --memory memory.json -o target/report.md
//! ```

mod config;
mod input;

pub use config::*;
pub use input::{load_memory, load_report, resolve_subjects, subjects_from_results};

use anyhow::Context;
use benchpress_report::{OutputFormat, Report, render};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Benchpress CLI arguments
#[derive(Parser, Debug)]
#[command(name = "benchpress")]
#[command(
    author,
    version,
    about = "Benchpress - compare benchmark results across library versions"
)]
pub struct Cli {
    /// Optional subcommand (Init, Formats); defaults to rendering INPUT
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Result document (JSON); `-` reads stdin
    pub input: Option<PathBuf>,

    /// Output format: cli, markdown, csv, json
    #[arg(long, short)]
    pub format: Option<String>,

    /// Output file (stdout if not specified); `-` forces stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write report.<ext> into this directory
    #[arg(long, conflicts_with = "output")]
    pub output_dir: Option<PathBuf>,

    /// Subject column order, comma separated (overrides the document)
    #[arg(long, value_delimiter = ',')]
    pub subjects: Option<Vec<String>>,

    /// Peak memory table (JSON) to report alongside timings
    #[arg(long)]
    pub memory: Option<PathBuf>,

    /// Configuration file (default: discover benchpress.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a default benchpress.toml
    Init,
    /// List supported output formats
    Formats,
}

/// Run the Benchpress CLI with the process arguments.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the Benchpress CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose);

    match &cli.command {
        Some(Commands::Init) => {
            print!("{}", BenchpressConfig::default_toml());
            Ok(())
        }
        Some(Commands::Formats) => {
            for format in OutputFormat::ALL {
                println!("{:<10} .{}", format.name(), format.extension());
            }
            Ok(())
        }
        None => render_document(&cli),
    }
}

/// Logs go to stderr so rendered output on stdout stays clean.
fn init_logging(verbose: bool) {
    let default = if verbose {
        "benchpress=debug"
    } else {
        "benchpress=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // A subscriber may already be installed when embedded or under test
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(cli: &Cli) -> anyhow::Result<BenchpressConfig> {
    match &cli.config {
        Some(path) => BenchpressConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(BenchpressConfig::discover().unwrap_or_default()),
    }
}

/// Build the validated report described by the CLI arguments and configuration.
pub fn prepare_report(cli: &Cli, config: &BenchpressConfig) -> anyhow::Result<Report> {
    let input = cli
        .input
        .as_deref()
        .context("no result document given; pass INPUT or `-` for stdin")?;

    let mut report = load_report(input)?;
    if let Some(path) = &cli.memory {
        report.memory = Some(load_memory(path)?);
    }
    resolve_subjects(&mut report, cli.subjects.clone(), &config.report.subjects);

    report
        .validate()
        .with_context(|| format!("cannot render {}", input.display()))?;
    Ok(report)
}

/// Resolve the output format: CLI flag, then config, then default.
pub fn resolve_format(cli: &Cli, config: &BenchpressConfig) -> anyhow::Result<OutputFormat> {
    let name = cli.format.as_deref().unwrap_or(&config.output.format);
    Ok(name.parse()?)
}

/// Resolve where to write: explicit file, then directory (CLI or config), else stdout.
///
/// `-o -` selects stdout even when the configuration names a directory.
pub fn resolve_destination(
    cli: &Cli,
    config: &BenchpressConfig,
    format: OutputFormat,
) -> Option<PathBuf> {
    if let Some(path) = &cli.output {
        if path == Path::new("-") {
            return None;
        }
        return Some(path.clone());
    }
    cli.output_dir
        .clone()
        .or_else(|| config.output.directory.as_ref().map(PathBuf::from))
        .map(|dir| dir.join(format!("report.{}", format.extension())))
}

fn write_output(output: &str, destination: Option<&Path>) -> anyhow::Result<()> {
    match destination {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(path, output)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn render_document(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli)?;
    let format = resolve_format(cli, &config)?;
    let report = prepare_report(cli, &config)?;

    tracing::debug!(
        %format,
        tests = report.results.len(),
        subjects = report.subjects.len(),
        memory = report.memory_section().is_some(),
        "rendering report"
    );

    let output = render(&report, format)?;
    let destination = resolve_destination(cli, &config, format);
    write_output(&output, destination.as_deref())
}
