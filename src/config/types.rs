//! Configuration type definitions

use std::num::{NonZeroU64, NonZeroUsize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ConfigWarning;
use crate::error::SmartparkResult;

use super::loader;

/// Default number of spaces.
pub const DEFAULT_CAPACITY: usize = 1000;
/// Default site name.
pub const DEFAULT_LOCATION: &str = "Unknown";
/// Default audit log path.
pub const DEFAULT_LOG_FILE: &str = "carpark_log.txt";
/// Default temperature sampling period in seconds.
pub const DEFAULT_TEMPERATURE_INTERVAL_SECS: u64 = 3;

/// Car park configuration.
///
/// | key                         | default           |
/// |-----------------------------|-------------------|
/// | `capacity`                  | `1000`            |
/// | `location`                  | `"Unknown"`       |
/// | `log_file`                  | `carpark_log.txt` |
/// | `temperature_interval_secs` | `3`               |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarparkConfig {
    #[serde(default = "default_capacity")]
    pub capacity: NonZeroUsize,

    #[serde(default = "default_location")]
    pub location: String,

    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    #[serde(default = "default_temperature_interval_secs")]
    pub temperature_interval_secs: NonZeroU64,
}

impl Default for CarparkConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            location: default_location(),
            log_file: default_log_file(),
            temperature_interval_secs: default_temperature_interval_secs(),
        }
    }
}

pub(crate) fn default_capacity() -> NonZeroUsize {
    NonZeroUsize::new(DEFAULT_CAPACITY).unwrap_or(NonZeroUsize::MIN)
}

pub(crate) fn default_location() -> String {
    DEFAULT_LOCATION.to_string()
}

pub(crate) fn default_log_file() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

pub(crate) fn default_temperature_interval_secs() -> NonZeroU64 {
    NonZeroU64::new(DEFAULT_TEMPERATURE_INTERVAL_SECS).unwrap_or(NonZeroU64::MIN)
}

impl CarparkConfig {
    /// Load configuration, failing if the file cannot be read or parsed at
    /// all. Individual bad values still fall back to their defaults and come
    /// back as warnings.
    pub fn load_strict(path: &Path) -> SmartparkResult<(Self, Vec<ConfigWarning>)> {
        loader::load_strict(path)
    }

    /// Load configuration, never failing. Problems become warnings.
    pub fn load_with_warnings(path: &Path) -> (Self, Vec<ConfigWarning>) {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (SMARTPARK_* prefix)
    pub fn with_env_overrides(self) -> (Self, Vec<ConfigWarning>) {
        loader::with_env_overrides(self)
    }

    pub fn temperature_interval(&self) -> Duration {
        Duration::from_secs(self.temperature_interval_secs.get())
    }
}
