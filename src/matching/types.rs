use std::fmt;

use crate::catalog::{Language, MatchedPair};

/// Non-fatal findings raised while reconciling two language collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchIssue {
    /// Both sides exist but disagree on a language-invariant field.
    /// The pair is still emitted with the primary side's values.
    ConsistencyMismatch { key: String, detail: String },
    /// Only one side exists; the `missing` slot was synthesized.
    MissingCounterpart {
        key: String,
        missing: Language,
        name_resolved: bool,
    },
}

impl fmt::Display for MatchIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchIssue::ConsistencyMismatch { key, detail } => {
                write!(f, "{}: {}", key, detail)
            }
            MatchIssue::MissingCounterpart {
                key,
                missing,
                name_resolved,
            } => write!(
                f,
                "{}: missing {} counterpart (name {})",
                key,
                missing,
                if *name_resolved { "resolved" } else { "unresolved" }
            ),
        }
    }
}

/// Result of matching one entity kind.
#[derive(Debug, Clone)]
pub struct MatchOutcome<R> {
    pub pairs: Vec<MatchedPair<R>>,
    pub issues: Vec<MatchIssue>,
}

impl<R> MatchOutcome<R> {
    pub fn mismatch_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| matches!(issue, MatchIssue::ConsistencyMismatch { .. }))
            .count()
    }

    pub fn placeholder_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| matches!(issue, MatchIssue::MissingCounterpart { .. }))
            .count()
    }
}
