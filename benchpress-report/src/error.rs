//! Report Errors

use thiserror::Error;

/// Errors raised while validating or serializing a report
#[derive(Debug, Error)]
pub enum ReportError {
    /// The subject list is empty
    #[error("no subjects to report on; the subject list is empty")]
    EmptySubjects,

    /// The subject list contains an empty name
    #[error("subject list contains an empty subject name")]
    EmptySubjectName,

    /// The subject list names the same subject twice
    #[error("subject \"{subject}\" is listed more than once")]
    DuplicateSubject {
        /// Repeated subject key
        subject: String,
    },

    /// A subject name collides with the per-entry `test` key of JSON output
    #[error("subject \"{subject}\" is reserved for the test name in JSON output")]
    ReservedSubjectName {
        /// Offending subject name
        subject: String,
    },

    /// A result row has an empty test name
    #[error("result table contains a test with an empty name")]
    EmptyTestName,

    /// A test row carries no data for any listed subject
    #[error("test \"{test}\" has no results for any listed subject")]
    EmptyRow {
        /// Test name of the offending row
        test: String,
    },

    /// Output format name not recognised
    #[error("unknown output format: {0} (expected cli, markdown, csv or json)")]
    UnknownFormat(String),

    /// JSON serialization failure
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
