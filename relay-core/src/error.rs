//! Validation error types for the document model.

use std::fmt;

/// A single structural problem found at one field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Wire-format path to the offending field, e.g.
    /// `lineItem[0].netPrice.value`. Empty for the document root.
    pub path: String,
    /// What went wrong at that path.
    pub kind: IssueKind,
}

/// The ways a field can fail structural validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum IssueKind {
    /// A required field is not present.
    Missing,
    /// A field is present but has the wrong JSON type.
    Mismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::Missing => write!(f, "required field is missing"),
            IssueKind::Mismatch { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}: {}", self.path, self.kind)
        }
    }
}

/// A document failed structural validation.
///
/// Carries every issue found in one pass over the document, not just
/// the first, so a caller can fix a malformed payload in one round.
#[derive(Debug, Clone, thiserror::Error)]
#[error("document does not match the purchase order schema: {}", summarize(.issues))]
#[non_exhaustive]
pub struct ValidationError {
    /// All issues found, in document order.
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    /// Wraps a non-empty list of issues.
    #[must_use]
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        Self { issues }
    }
}

fn summarize(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
