//! Per-Row Ratio Computation
//!
//! Every output format annotates a subject with how many times slower (or
//! heavier) it is than the best subject of the same row. This module owns
//! that computation so the formats cannot drift apart.

use crate::report::{MemoryTable, Stat, SubjectStats};
use indexmap::IndexMap;

/// Ratios at or below this are treated as measurement jitter
pub(crate) const RATIO_THRESHOLD: f64 = 1.05;

/// A present value in a rendered row
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Cell {
    /// Raw metric value (nanoseconds or bytes)
    pub value: f64,
    /// Multiple of the row's best value, only when above [`RATIO_THRESHOLD`]
    pub ratio: Option<f64>,
}

impl Cell {
    /// Formatted value followed by the ratio suffix, e.g. `2.00μs (2.0x)`
    pub fn display(&self, format: fn(f64) -> String) -> String {
        match self.ratio {
            Some(ratio) => format!("{} ({:.1}x)", format(self.value), ratio),
            None => format(self.value),
        }
    }
}

/// Compute the cells of one row, in subject order.
///
/// `None` marks a subject with no data. The baseline is the smallest value
/// among listed subjects present in the row; when it is not positive, no
/// ratios are shown.
pub(crate) fn row_cells<V>(
    data: &IndexMap<String, V>,
    subjects: &[String],
    metric: impl Fn(&V) -> f64,
) -> Vec<Option<Cell>> {
    let values: Vec<Option<f64>> = subjects
        .iter()
        .map(|s| data.get(s).map(&metric))
        .collect();

    let fastest = values.iter().flatten().copied().reduce(f64::min);

    values
        .into_iter()
        .map(|value| {
            value.map(|value| {
                let ratio = fastest
                    .filter(|&f| f > 0.0)
                    .map(|f| value / f)
                    .filter(|&r| r > RATIO_THRESHOLD);
                Cell { value, ratio }
            })
        })
        .collect()
}

/// Time cells of one result row, compared by mean
pub(crate) fn time_cells(data: &SubjectStats, subjects: &[String]) -> Vec<Option<Cell>> {
    row_cells(data, subjects, |stat: &Stat| stat.mean)
}

/// Memory cells for `test`; a test without memory data yields missing cells
pub(crate) fn memory_cells(
    memory: &MemoryTable,
    test: &str,
    subjects: &[String],
) -> Vec<Option<Cell>> {
    match memory.get(test) {
        Some(peaks) => row_cells(peaks, subjects, |bytes: &f64| *bytes),
        None => vec![None; subjects.len()],
    }
}
