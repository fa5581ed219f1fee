//! Report Data Structures
//!
//! The immutable snapshot handed over by the benchmark runner: per-test,
//! per-subject statistics, the subject column order, and optional memory peaks.

use crate::error::ReportError;
use crate::json::TEST_KEY;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Statistical summary of one test for one subject (times in nanoseconds)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    /// Mean time
    pub mean: f64,
    /// Modal time
    pub mode: f64,
    /// Fastest sample
    pub min: f64,
    /// Slowest sample
    pub max: f64,
    /// Standard deviation
    pub stdev: f64,
    /// Relative standard deviation (percent)
    pub rstdev: f64,
}

/// Statistics for a single test, keyed by subject
pub type SubjectStats = IndexMap<String, Stat>;

/// Test name -> subject -> statistics, in display order
pub type ResultTable = IndexMap<String, SubjectStats>;

/// Peak memory in bytes for a single test, keyed by subject
pub type SubjectPeaks = IndexMap<String, f64>;

/// Test name -> subject -> peak memory in bytes, in display order
pub type MemoryTable = IndexMap<String, SubjectPeaks>;

/// Complete result set ready for rendering
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Report {
    /// Subject column order
    #[serde(default)]
    pub subjects: Vec<String>,
    /// Per-test statistics
    pub results: ResultTable,
    /// Per-test memory peaks, when memory profiling was performed
    #[serde(default)]
    pub memory: Option<MemoryTable>,
}

impl Report {
    /// Create a report without memory data
    pub fn new(subjects: Vec<String>, results: ResultTable) -> Self {
        Self {
            subjects,
            results,
            memory: None,
        }
    }

    /// Attach a memory table
    pub fn with_memory(mut self, memory: MemoryTable) -> Self {
        self.memory = Some(memory);
        self
    }

    /// Memory table to render, if any.
    ///
    /// An empty table is treated exactly like an absent one.
    pub fn memory_section(&self) -> Option<&MemoryTable> {
        self.memory.as_ref().filter(|m| !m.is_empty())
    }

    /// Check the preconditions rendering relies on.
    ///
    /// Rendering itself never fails; this is for callers that accept report
    /// documents from outside. Inconsistencies that only produce empty cells
    /// are logged rather than rejected.
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.subjects.is_empty() {
            return Err(ReportError::EmptySubjects);
        }

        let mut seen = HashSet::with_capacity(self.subjects.len());
        for subject in &self.subjects {
            if subject.is_empty() {
                return Err(ReportError::EmptySubjectName);
            }
            if subject == TEST_KEY {
                return Err(ReportError::ReservedSubjectName {
                    subject: subject.clone(),
                });
            }
            if !seen.insert(subject.as_str()) {
                return Err(ReportError::DuplicateSubject {
                    subject: subject.clone(),
                });
            }
        }

        for (test, data) in &self.results {
            if test.is_empty() {
                return Err(ReportError::EmptyTestName);
            }
            if !self.subjects.iter().any(|s| data.contains_key(s)) {
                return Err(ReportError::EmptyRow { test: test.clone() });
            }
            for subject in data.keys().filter(|s| !seen.contains(s.as_str())) {
                tracing::warn!(
                    test = %test,
                    subject = %subject,
                    "subject not listed; column omitted"
                );
            }
        }

        if let Some(memory) = self.memory_section() {
            for test in memory.keys().filter(|t| !self.results.contains_key(*t)) {
                tracing::warn!(
                    test = %test,
                    "memory peak recorded for a test without results"
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{self, stat};

    fn report() -> Report {
        testing::report(vec![(
            "benchSelect",
            vec![("Alpha", 1_000.0), ("Beta", 2_000.0)],
        )])
    }

    #[test]
    fn test_memory_section_ignores_empty_table() {
        let report = report();
        assert!(report.memory_section().is_none());

        let report = report.with_memory(MemoryTable::new());
        assert!(report.memory.is_some());
        assert!(report.memory_section().is_none());
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        assert!(report().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_subjects() {
        let mut report = report();
        report.subjects.clear();
        assert!(matches!(report.validate(), Err(ReportError::EmptySubjects)));
    }

    #[test]
    fn test_validate_rejects_empty_subject_name() {
        let mut report = report();
        report.subjects.push(String::new());
        assert!(matches!(
            report.validate(),
            Err(ReportError::EmptySubjectName)
        ));
    }

    #[test]
    fn test_validate_rejects_reserved_subject_name() {
        // A "test" column would overwrite the test name in every JSON entry
        let mut report = report();
        report.subjects = vec!["test".to_string()];
        let mut row = SubjectStats::new();
        row.insert("test".to_string(), stat(1_000.0));
        report.results.insert("benchSelect".to_string(), row);

        let err = report.validate().unwrap_err();
        assert!(matches!(
            &err,
            ReportError::ReservedSubjectName { subject } if subject == "test"
        ));
        assert!(err.to_string().contains("\"test\""));
    }

    #[test]
    fn test_validate_rejects_duplicate_subject() {
        let mut report = report();
        report.subjects.push("Alpha".to_string());
        match report.validate() {
            Err(ReportError::DuplicateSubject { subject }) => assert_eq!(subject, "Alpha"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_row_without_listed_subject() {
        let mut report = report();
        let mut row = SubjectStats::new();
        row.insert("Gamma".to_string(), stat(10.0));
        report.results.insert("benchOrphan".to_string(), row);

        let err = report.validate().unwrap_err();
        assert!(err.to_string().contains("benchOrphan"));
    }

    #[test]
    fn test_validate_rejects_empty_test_name() {
        let mut report = report();
        let mut row = SubjectStats::new();
        row.insert("Alpha".to_string(), stat(10.0));
        report.results.insert(String::new(), row);
        assert!(matches!(report.validate(), Err(ReportError::EmptyTestName)));
    }

    #[test]
    fn test_validate_allows_unlisted_subject() {
        // Gamma is dropped from the output, Alpha still reports
        let mut report = report();
        let mut row = SubjectStats::new();
        row.insert("Gamma".to_string(), stat(10.0));
        row.insert("Alpha".to_string(), stat(20.0));
        report.results.insert("benchMixed".to_string(), row);
        assert!(report.validate().is_ok());
    }

    #[test]
    fn test_validate_allows_memory_without_result_row() {
        let report = report().with_memory(testing::memory(vec![(
            "benchGhost",
            vec![("Alpha", 1_024.0)],
        )]));
        assert!(report.validate().is_ok());
        assert!(report.memory_section().is_some());
    }

    #[test]
    fn test_deserialize_preserves_order() {
        let json = r#"{
            "subjects": ["Zed", "Amy"],
            "results": {
                "zzz": {"Zed": {"mean": 1, "mode": 1, "min": 1, "max": 1, "stdev": 0, "rstdev": 0}},
                "aaa": {"Amy": {"mean": 2, "mode": 2, "min": 2, "max": 2, "stdev": 0, "rstdev": 0}}
            }
        }"#;
        let report: Report = serde_json::from_str(json).unwrap();
        let tests: Vec<_> = report.results.keys().cloned().collect();
        assert_eq!(tests, vec!["zzz", "aaa"]);
        assert_eq!(report.subjects, vec!["Zed", "Amy"]);
        assert!(report.memory.is_none());
    }
}
