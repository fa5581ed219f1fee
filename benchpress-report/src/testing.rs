//! Shared test fixtures

use crate::report::{MemoryTable, Report, ResultTable, Stat, SubjectPeaks, SubjectStats};

/// A stat whose every central value equals `mean`
pub(crate) fn stat(mean: f64) -> Stat {
    Stat {
        mean,
        mode: mean,
        min: mean * 0.9,
        max: mean * 1.1,
        stdev: mean * 0.05,
        rstdev: 5.0,
    }
}

/// Report over subjects `Alpha` and `Beta` with the given rows of means
pub(crate) fn report(rows: Vec<(&str, Vec<(&str, f64)>)>) -> Report {
    let results: ResultTable = rows
        .into_iter()
        .map(|(test, cells)| {
            let data: SubjectStats = cells
                .into_iter()
                .map(|(s, m)| (s.to_string(), stat(m)))
                .collect();
            (test.to_string(), data)
        })
        .collect();
    Report::new(vec!["Alpha".to_string(), "Beta".to_string()], results)
}

/// Memory table with the given rows of peaks
pub(crate) fn memory(rows: Vec<(&str, Vec<(&str, f64)>)>) -> MemoryTable {
    rows.into_iter()
        .map(|(test, cells)| {
            let peaks: SubjectPeaks = cells
                .into_iter()
                .map(|(s, b)| (s.to_string(), b))
                .collect();
            (test.to_string(), peaks)
        })
        .collect()
}
