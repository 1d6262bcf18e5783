//! Authoring-time configuration checks
//!
//! Loading a configuration never fails; malformed values are authoring
//! defects, surfaced here by an explicit lint pass instead of at load time.

use std::fmt;

/// A single authoring defect found in a configuration entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintIssue {
    /// Name of the offending entry (network profile or compiler pin)
    pub entry: String,
    /// Human-readable description of the defect
    pub message: String,
}

impl LintIssue {
    pub fn new(entry: impl Into<String>, message: impl Into<String>) -> LintIssue {
        LintIssue {
            entry: entry.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for LintIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.entry, self.message)
    }
}
