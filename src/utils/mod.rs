//! Utility functions
//!
//! This module provides serialization helpers shared across the crate.

pub mod serialization;

pub use serialization::{from_json_str, from_toml_str, to_json_string, to_toml_string};
