//! Project file persistence
//!
//! This module handles locating, reading, and writing the on-disk project
//! file in its supported formats.

pub mod file;

pub use file::{FileFormat, ProjectFile, JSON_FILE, TOML_FILE};
