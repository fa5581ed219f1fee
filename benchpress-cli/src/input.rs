//! Result Document Loading
//!
//! Reads the result snapshot produced by the benchmark runner and settles
//! the subject column order before rendering.

use anyhow::Context;
use benchpress_report::{MemoryTable, Report, ResultTable};
use indexmap::IndexSet;
use std::io::Read;
use std::path::Path;

/// Read a file, or stdin when the path is `-`
fn read_source(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("failed to read result document from stdin")?;
        return Ok(content);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Load a result document (`{"subjects": [...], "results": {...}, "memory": {...}}`)
pub fn load_report(path: &Path) -> anyhow::Result<Report> {
    let content = read_source(path)?;
    let report: Report = serde_json::from_str(&content)
        .with_context(|| format!("invalid result document {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        tests = report.results.len(),
        subjects = report.subjects.len(),
        memory = report.memory.is_some(),
        "loaded result document"
    );
    Ok(report)
}

/// Load a standalone memory table (`{"<test>": {"<subject>": bytes}}`)
pub fn load_memory(path: &Path) -> anyhow::Result<MemoryTable> {
    let content = read_source(path)?;
    serde_json::from_str(&content)
        .with_context(|| format!("invalid memory table {}", path.display()))
}

/// Subjects in order of first appearance across all tests
pub fn subjects_from_results(results: &ResultTable) -> Vec<String> {
    let subjects: IndexSet<&String> = results.values().flat_map(|data| data.keys()).collect();
    subjects.into_iter().cloned().collect()
}

/// Settle the subject list.
///
/// Precedence: explicit override, then the document's own list, then the
/// configured order, then order of appearance in the results.
pub fn resolve_subjects(
    report: &mut Report,
    overridden: Option<Vec<String>>,
    configured: &[String],
) {
    if let Some(subjects) = overridden {
        report.subjects = subjects;
    } else if report.subjects.is_empty() {
        report.subjects = if configured.is_empty() {
            subjects_from_results(&report.results)
        } else {
            configured.to_vec()
        };
        tracing::debug!(subjects = ?report.subjects, "subject list not given in document");
    }
}
