//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose, --config) are inherited by all subcommands
//! - Flags on `run` override the config file and SMARTPARK_* variables

use std::num::{NonZeroU64, NonZeroUsize};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{CarparkConfig, DEFAULT_CONFIG_FILE};

/// SmartPark - car park occupancy registry with audit log and sensor feeds
#[derive(Parser, Debug)]
#[command(name = "smartpark")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the car park: temperature feed, arrivals/departures from stdin, live display
    Run {
        #[command(flatten)]
        overrides: ConfigOverrides,
    },

    /// Show the effective configuration and any warnings
    Config {
        #[command(flatten)]
        overrides: ConfigOverrides,

        /// Fail if the file is missing, unparseable or produces any warning
        #[arg(long)]
        strict: bool,
    },
}

/// Command-line settings that take precedence over file and environment.
#[derive(clap::Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Number of spaces
    #[arg(long)]
    pub capacity: Option<NonZeroUsize>,

    /// Site name shown on the display
    #[arg(long)]
    pub location: Option<String>,

    /// Audit log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Seconds between temperature samples
    #[arg(long, value_name = "SECS")]
    pub interval: Option<NonZeroU64>,
}

impl ConfigOverrides {
    pub fn apply(&self, mut config: CarparkConfig) -> CarparkConfig {
        if let Some(capacity) = self.capacity {
            config.capacity = capacity;
        }
        if let Some(location) = &self.location {
            config.location = location.clone();
        }
        if let Some(log_file) = &self.log_file {
            config.log_file = log_file.clone();
        }
        if let Some(interval) = self.interval {
            config.temperature_interval_secs = interval;
        }
        config
    }
}
