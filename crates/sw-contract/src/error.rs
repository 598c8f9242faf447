//! Validation failures.
//!
//! The rendered message names every offending field so it can be pasted into
//! a corrective re-prompt as-is.

use std::fmt;

use thiserror::Error;

/// One field that broke the contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Dotted path, e.g. `"approval"` or `"emotions.fear"`.
    pub field:   String,
    pub problem: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, problem: impl Into<String>) -> Self {
        Self { field: field.into(), problem: problem.into() }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.problem)
    }
}

/// A payload that does not satisfy the response contract.
///
/// Never empty: `validate` only builds one when at least one issue was found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_issues(.issues))]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn single(field: impl Into<String>, problem: impl Into<String>) -> Self {
        Self { issues: vec![FieldIssue::new(field, problem)] }
    }

    /// `true` if any issue is reported against `field` (exact path match).
    pub fn mentions(&self, field: &str) -> bool {
        self.issues.iter().any(|i| i.field == field)
    }
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(FieldIssue::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Alias for `Result<T, ValidationError>`.
pub type ValidationResult<T> = Result<T, ValidationError>;
