//! Core configuration model
//!
//! This module contains the fundamental configuration components including
//! network profiles, compiler pins, the project configuration root, and the
//! authoring-time lint pass.

pub mod compiler;
pub mod defaults;
pub mod lint;
pub mod network;
pub mod project;

pub use compiler::{is_valid_version_constraint, CompilerPin};
pub use defaults::{
    DEFAULT_SOLC_CONSTRAINT, DEVELOPMENT_GAS, DEVELOPMENT_HOST, DEVELOPMENT_NETWORK,
    DEVELOPMENT_PORT, SOLC_COMPILER, WILDCARD_NETWORK_ID,
};
pub use lint::LintIssue;
pub use network::NetworkProfile;
pub use project::ProjectConfig;
