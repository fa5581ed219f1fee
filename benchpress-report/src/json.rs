//! JSON Output

use crate::report::{Report, Stat};
use indexmap::IndexMap;
use serde::Serialize;

/// Per-entry key holding the test name; no subject may use it
pub(crate) const TEST_KEY: &str = "test";

/// Top-level JSON document
#[derive(Serialize)]
struct JsonReport<'a> {
    subjects: &'a [String],
    results: Vec<JsonEntry<'a>>,
}

/// One test: `{"test": name, "<subject>": {...}, ...}`
#[derive(Serialize)]
struct JsonEntry<'a> {
    test: &'a str,
    #[serde(flatten)]
    subjects: IndexMap<&'a str, JsonStat<'a>>,
}

/// Full statistics for a subject, plus its memory peak when measured
#[derive(Serialize)]
struct JsonStat<'a> {
    #[serde(flatten)]
    stat: &'a Stat,
    #[serde(skip_serializing_if = "Option::is_none")]
    mem_peak: Option<f64>,
}

/// Generate a prettified JSON report.
///
/// Subjects without data for a test are omitted from that entry. Non-ASCII
/// text is emitted as-is and the document ends with a newline.
pub fn generate_json_report(report: &Report) -> Result<String, serde_json::Error> {
    let memory = report.memory_section();

    let results = report
        .results
        .iter()
        .map(|(test, data)| {
            let peaks = memory.and_then(|m| m.get(test));
            let subjects = report
                .subjects
                .iter()
                .filter_map(|s| {
                    data.get(s).map(|stat| {
                        let mem_peak = peaks.and_then(|p| p.get(s)).copied();
                        (s.as_str(), JsonStat { stat, mem_peak })
                    })
                })
                .collect();
            JsonEntry { test, subjects }
        })
        .collect();

    let mut json = serde_json::to_string_pretty(&JsonReport {
        subjects: &report.subjects,
        results,
    })?;
    json.push('\n');
    Ok(json)
}
