//! CSV Output
//!
//! Spreadsheet-compatible export of raw values. Time columns carry the mean
//! in nanoseconds rounded to two decimals; memory columns, when present,
//! are named `<subject>_mem_peak` and carry whole bytes.

use crate::report::Report;
use std::borrow::Cow;

/// Column suffix for memory peak columns
pub const MEM_PEAK_SUFFIX: &str = "_mem_peak";

/// Quote a field if it contains a delimiter, quote or line break
fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn push_record<'a>(output: &mut String, fields: impl IntoIterator<Item = Cow<'a, str>>) {
    let mut first = true;
    for field in fields {
        if !first {
            output.push(',');
        }
        output.push_str(&escape(&field));
        first = false;
    }
    output.push('\n');
}

/// Mean rounded to two decimals, without trailing zeros (`1000`, `1234.57`)
fn format_mean(mean: f64) -> String {
    ((mean * 100.0).round() / 100.0).to_string()
}

/// Render a report as CSV
pub fn generate_csv_report(report: &Report) -> String {
    let memory = report.memory_section();
    let mut output = String::new();

    let mut header: Vec<Cow<'_, str>> = vec![Cow::Borrowed("test")];
    header.extend(report.subjects.iter().map(|s| Cow::Borrowed(s.as_str())));
    if memory.is_some() {
        header.extend(
            report
                .subjects
                .iter()
                .map(|s| Cow::Owned(format!("{}{}", s, MEM_PEAK_SUFFIX))),
        );
    }
    push_record(&mut output, header);

    for (test, data) in &report.results {
        let mut record: Vec<Cow<'_, str>> = vec![Cow::Borrowed(test.as_str())];
        record.extend(report.subjects.iter().map(|s| {
            data.get(s)
                .map(|stat| Cow::Owned(format_mean(stat.mean)))
                .unwrap_or(Cow::Borrowed(""))
        }));
        if let Some(memory) = memory {
            let peaks = memory.get(test);
            record.extend(report.subjects.iter().map(|s| {
                peaks
                    .and_then(|p| p.get(s))
                    .map(|bytes| Cow::Owned(format!("{:.0}", bytes)))
                    .unwrap_or(Cow::Borrowed(""))
            }));
        }
        push_record(&mut output, record);
    }

    output
}
