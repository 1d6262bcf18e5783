use crate::core::compiler::CompilerPin;
use crate::core::defaults::{
    DEFAULT_SOLC_CONSTRAINT, DEVELOPMENT_GAS, DEVELOPMENT_HOST, DEVELOPMENT_NETWORK,
    DEVELOPMENT_PORT, SOLC_COMPILER, WILDCARD_NETWORK_ID,
};
use crate::core::lint::LintIssue;
use crate::core::network::NetworkProfile;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The configuration root owned by a toolchain project
///
/// Two independent maps: network profiles keyed by name and compiler pins
/// keyed by tool name. Keys are unique and insertion order carries no
/// meaning. Values are plain owned data with no cross-entry invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Network profiles keyed by profile name
    #[serde(default)]
    pub networks: HashMap<String, NetworkProfile>,
    /// Compiler pins keyed by tool name
    #[serde(default)]
    pub compilers: HashMap<String, CompilerPin>,
}

impl ProjectConfig {
    /// Load the built-in configuration
    ///
    /// No inputs, no I/O, no error path: the record is a compile-time
    /// literal. Calling this twice yields structurally equal values.
    pub fn load() -> ProjectConfig {
        let mut networks = HashMap::new();
        networks.insert(
            String::from(DEVELOPMENT_NETWORK),
            NetworkProfile::new(
                DEVELOPMENT_HOST,
                DEVELOPMENT_PORT,
                DEVELOPMENT_GAS,
                WILDCARD_NETWORK_ID,
            ),
        );

        let mut compilers = HashMap::new();
        compilers.insert(
            String::from(SOLC_COMPILER),
            CompilerPin::new(DEFAULT_SOLC_CONSTRAINT),
        );

        ProjectConfig {
            networks,
            compilers,
        }
    }

    /// Look up a network profile by name
    pub fn network(&self, name: &str) -> Option<&NetworkProfile> {
        self.networks.get(name)
    }

    /// Look up a compiler pin by tool name
    pub fn compiler(&self, name: &str) -> Option<&CompilerPin> {
        self.compilers.get(name)
    }

    /// Profile names, sorted for stable listing output
    pub fn network_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.networks.keys().cloned().collect();
        names.sort();
        names
    }

    /// Compiler pin names, sorted for stable listing output
    pub fn compiler_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.compilers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Insert or replace a network profile
    pub fn insert_network(&mut self, name: impl Into<String>, profile: NetworkProfile) {
        self.networks.insert(name.into(), profile);
    }

    /// Insert or replace a compiler pin
    pub fn pin_compiler(&mut self, name: impl Into<String>, pin: CompilerPin) {
        self.compilers.insert(name.into(), pin);
    }

    /// Check every entry for authoring defects
    ///
    /// A configuration with no network profile at all is reported too: the
    /// consumer has nothing to connect to.
    pub fn lint(&self) -> Vec<LintIssue> {
        let mut issues = vec![];
        if self.networks.is_empty() {
            issues.push(LintIssue::new(
                "networks",
                "no network profiles are defined",
            ));
        }
        for name in self.network_names() {
            issues.extend(self.networks[&name].lint(&name));
        }
        for name in self.compiler_names() {
            issues.extend(self.compilers[&name].lint(&name));
        }
        issues
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self::load()
    }
}
