//! Built-in configuration values
//!
//! This module defines the constants behind the configuration every project
//! starts from. The values match what the toolchain expects when a project
//! has not authored its own file yet:
//!
//! ## Built-in Profile
//! - **development**: a local node on `localhost:8545` (the conventional
//!   JSON-RPC port for development nodes)
//! - **Gas limit**: 4,600,000 units per operation
//! - **Network id**: `"*"`, accepting any network the node reports
//!
//! ## Compiler Pin
//! - **solc**: `"^0.5.0"`, resolved by the external compiler logic

/// Name of the built-in network profile
pub const DEVELOPMENT_NETWORK: &str = "development";

/// Host of the built-in development profile
pub const DEVELOPMENT_HOST: &str = "localhost";

/// Port of the built-in development profile
/// This is the conventional JSON-RPC port exposed by development nodes
pub const DEVELOPMENT_PORT: u16 = 8545;

/// Gas limit of the built-in development profile
/// Generous enough for contract deployment during development
pub const DEVELOPMENT_GAS: u64 = 4_600_000;

/// The only recognized network id wildcard
/// A profile carrying this id accepts whatever network the node reports
pub const WILDCARD_NETWORK_ID: &str = "*";

/// Name of the built-in compiler pin
pub const SOLC_COMPILER: &str = "solc";

/// Version constraint of the built-in compiler pin
pub const DEFAULT_SOLC_CONSTRAINT: &str = "^0.5.0";
