//! Command-line interface
//!
//! This module contains the CLI commands and argument parsing
//! for the configuration toolkit.

pub mod commands;

pub use commands::{Command, FormatArg, Opt};
