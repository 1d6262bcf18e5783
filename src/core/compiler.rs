use crate::core::lint::LintIssue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A version constraint fixing which compiler release may be used
///
/// The constraint is a semantic-version range expression such as `"^0.5.0"`:
/// an optional leading caret followed by `MAJOR.MINOR.PATCH`. It is carried
/// verbatim and resolved by the external compiler logic, never here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerPin {
    /// Semantic-version range expression (e.g. `"^0.5.0"`)
    pub version: String,
}

impl CompilerPin {
    pub fn new(version: impl Into<String>) -> CompilerPin {
        CompilerPin {
            version: version.into(),
        }
    }

    /// Whether the constraint has the shape the external resolver recognizes
    pub fn is_valid_constraint(&self) -> bool {
        is_valid_version_constraint(&self.version)
    }

    /// Check the pin for authoring defects
    pub fn lint(&self, name: &str) -> Vec<LintIssue> {
        if self.is_valid_constraint() {
            vec![]
        } else {
            vec![LintIssue::new(
                name,
                format!(
                    "version constraint {:?} is not of the form [^]MAJOR.MINOR.PATCH",
                    self.version
                ),
            )]
        }
    }
}

impl fmt::Display for CompilerPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.version)
    }
}

/// Validate a semantic-version range expression
///
/// Accepts an optional leading `^` followed by exactly three dot-separated
/// numeric components.
pub fn is_valid_version_constraint(constraint: &str) -> bool {
    let version = constraint.strip_prefix('^').unwrap_or(constraint);
    let mut components = 0;
    for part in version.split('.') {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        components += 1;
    }
    components == 3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_constraints() {
        assert!(is_valid_version_constraint("^0.5.0"));
        assert!(is_valid_version_constraint("0.5.0"));
        assert!(is_valid_version_constraint("^1.12.3"));
        assert!(is_valid_version_constraint("10.0.0"));
    }

    #[test]
    fn test_invalid_constraints() {
        assert!(!is_valid_version_constraint(""));
        assert!(!is_valid_version_constraint("^"));
        assert!(!is_valid_version_constraint("0.5"));
        assert!(!is_valid_version_constraint("0.5.0.1"));
        assert!(!is_valid_version_constraint("^0.5.x"));
        assert!(!is_valid_version_constraint("latest"));
        assert!(!is_valid_version_constraint("^^0.5.0"));
        assert!(!is_valid_version_constraint("0..0"));
    }

    #[test]
    fn test_lint_valid_pin() {
        let pin = CompilerPin::new("^0.5.0");
        assert!(pin.lint("solc").is_empty());
    }

    #[test]
    fn test_lint_invalid_pin() {
        let pin = CompilerPin::new("latest");
        let issues = pin.lint("solc");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].entry, "solc");
        assert!(issues[0].message.contains("latest"));
    }

    #[test]
    fn test_display_is_the_constraint() {
        assert_eq!(CompilerPin::new("^0.5.0").to_string(), "^0.5.0");
    }
}
