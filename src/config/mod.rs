//! Configuration module for SmartPark
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SMARTPARK_*)
//! 3. Config file (carpark_config.toml, TOML or plain `key = value`)
//! 4. Built-in defaults (lowest priority)
//!
//! Loading never aborts: every problem is reported as a `ConfigWarning`
//! and the affected setting keeps its default.

mod loader;
mod types;

pub use crate::domain::value_objects::{ConfigWarning, ConfigWarningKind};

pub use loader::{apply_overrides, parse_with_warnings, DEFAULT_CONFIG_FILE};
pub use types::{
    CarparkConfig, DEFAULT_CAPACITY, DEFAULT_LOCATION, DEFAULT_LOG_FILE,
    DEFAULT_TEMPERATURE_INTERVAL_SECS,
};
