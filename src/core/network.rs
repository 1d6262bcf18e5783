use crate::core::defaults::WILDCARD_NETWORK_ID;
use crate::core::lint::LintIssue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named bundle of connection parameters for reaching a blockchain node
///
/// Profiles are plain owned data: defined once, never mutated afterwards,
/// freely clonable. The consumer dials `host:port`, budgets `gas` units per
/// operation, and compares the node's reported network id against
/// `network_id` (where `"*"` accepts anything).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkProfile {
    /// Hostname or IP literal of the node
    pub host: String,
    /// TCP port of the node (1-65535)
    pub port: u16,
    /// Upper bound on computational budget per operation
    pub gas: u64,
    /// Network id the profile accepts; `"*"` means any
    pub network_id: String,
}

impl NetworkProfile {
    pub fn new(
        host: impl Into<String>,
        port: u16,
        gas: u64,
        network_id: impl Into<String>,
    ) -> NetworkProfile {
        NetworkProfile {
            host: host.into(),
            port,
            gas,
            network_id: network_id.into(),
        }
    }

    /// Whether this profile accepts any network id
    pub fn is_wildcard(&self) -> bool {
        self.network_id == WILDCARD_NETWORK_ID
    }

    /// Whether this profile accepts the given network id
    ///
    /// The wildcard `"*"` accepts everything; any other value must match
    /// exactly.
    pub fn accepts(&self, network_id: &str) -> bool {
        self.is_wildcard() || self.network_id == network_id
    }

    /// The `host:port` endpoint the consumer dials
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check the profile for authoring defects
    pub fn lint(&self, name: &str) -> Vec<LintIssue> {
        let mut issues = vec![];
        if self.host.trim().is_empty() {
            issues.push(LintIssue::new(name, "host must not be empty"));
        }
        if self.port == 0 {
            issues.push(LintIssue::new(name, "port must be between 1 and 65535"));
        }
        if self.gas == 0 {
            issues.push(LintIssue::new(name, "gas limit must be positive"));
        }
        if self.network_id.is_empty() {
            issues.push(LintIssue::new(
                name,
                "network id must not be empty (use \"*\" to accept any)",
            ));
        }
        issues
    }
}

impl fmt::Display for NetworkProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (gas limit {}, network id {})",
            self.endpoint(),
            self.gas,
            self.network_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn development() -> NetworkProfile {
        NetworkProfile::new("localhost", 8545, 4_600_000, "*")
    }

    #[test]
    fn test_wildcard_accepts_any_id() {
        let profile = development();
        assert!(profile.is_wildcard());
        assert!(profile.accepts("1"));
        assert!(profile.accepts("5777"));
        assert!(profile.accepts("anything"));
    }

    #[test]
    fn test_exact_id_accepts_only_itself() {
        let profile = NetworkProfile::new("10.0.0.5", 8546, 6_000_000, "5777");
        assert!(!profile.is_wildcard());
        assert!(profile.accepts("5777"));
        assert!(!profile.accepts("1"));
        assert!(!profile.accepts("*"));
    }

    #[test]
    fn test_endpoint_format() {
        assert_eq!(development().endpoint(), "localhost:8545");
    }

    #[test]
    fn test_lint_clean_profile() {
        assert!(development().lint("development").is_empty());
    }

    #[test]
    fn test_lint_catches_defects() {
        let profile = NetworkProfile::new("", 0, 0, "");
        let issues = profile.lint("broken");
        assert_eq!(issues.len(), 4);
        assert!(issues.iter().all(|i| i.entry == "broken"));
    }

    #[test]
    fn test_display_summary() {
        let summary = development().to_string();
        assert!(summary.contains("localhost:8545"));
        assert!(summary.contains("4600000"));
    }
}
