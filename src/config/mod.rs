//! Runtime settings
//!
//! This module handles process-wide settings for the configuration toolkit,
//! sourced from environment variables at startup: an explicit project file
//! path and the active network profile.

pub mod settings;

pub use settings::{Settings, ACTIVE_NETWORK_ENV, CONFIG_PATH_ENV, GLOBAL_SETTINGS};
