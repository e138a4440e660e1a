//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Operator console commands read from stdin
//! - Output formatting (text/JSON)

pub mod cli;
pub mod console;
pub mod output;

pub use cli::{Cli, Commands, ConfigOverrides};
pub use console::{ConsoleCommand, ConsoleParseError, HELP};
