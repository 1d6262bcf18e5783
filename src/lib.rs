//! # Chainsmith - My Configuration Layer for Blockchain Projects
//!
//! This is the configuration toolkit I built for blockchain development
//! projects in Rust. When I come back to this code, here's what I need to
//! remember:
//!
//! ## What I Built
//! - **Built-in Configuration**: A literal record every project starts from,
//!   loaded with no I/O and no failure path
//! - **Network Profiles**: Named host/port/gas/network-id bundles the build
//!   tool uses to reach a node, with `"*"` as the network-id wildcard
//! - **Compiler Pins**: Semantic-version range constraints (e.g. `^0.5.0`)
//!   handed to the external compiler resolution logic
//! - **Project Files**: TOML and JSON persistence with discovery, so each
//!   project can author its own configuration
//! - **Lint Pass**: Authoring defects (port 0, zero gas, malformed version
//!   constraints) surface through an explicit check, never at load time
//!
//! ## How I Organized My Code
//! - `core/`: The data model (profiles, pins, the configuration root, lint)
//! - `storage/`: Project file discovery, reading, and writing
//! - `config/`: Process-wide runtime settings from environment variables
//! - `utils/`: Serialization helpers shared across formats
//! - `cli/`: Command-line interface for all configuration operations
//!
//! ## Key Design Decisions I Made
//! - Loading the built-in record is infallible; files that parse are loaded
//!   as-is and defects belong to the lint pass
//! - TOML is the preferred project file format, JSON supported alongside
//! - Kept the serialized shape exactly what the build tool consumes:
//!   `networks.<name>.{host, port, gas, network_id}` and
//!   `compilers.<name>.version`
//!
//! ## When I Need to Understand Something
//! 1. Start with `main.rs` to see the CLI commands
//! 2. Look at `core/project.rs` for the configuration root and `load()`
//! 3. Check `storage/file.rs` for how project files are found and parsed
//! 4. Review `config/settings.rs` for the environment overrides

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod storage;
pub mod utils;

// Re-export commonly used types for convenience
pub use cli::{Command, FormatArg, Opt};
pub use config::{Settings, ACTIVE_NETWORK_ENV, CONFIG_PATH_ENV, GLOBAL_SETTINGS};
pub use core::{
    is_valid_version_constraint, CompilerPin, LintIssue, NetworkProfile, ProjectConfig,
    DEFAULT_SOLC_CONSTRAINT, DEVELOPMENT_GAS, DEVELOPMENT_HOST, DEVELOPMENT_NETWORK,
    DEVELOPMENT_PORT, SOLC_COMPILER, WILDCARD_NETWORK_ID,
};
pub use error::{ConfigError, Result};
pub use storage::{FileFormat, ProjectFile, JSON_FILE, TOML_FILE};
pub use utils::{from_json_str, from_toml_str, to_json_string, to_toml_string};
