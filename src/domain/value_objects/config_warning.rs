//! Configuration warning value object.

use std::fmt;
use std::path::PathBuf;

/// Non-fatal configuration warning surfaced to operators.
///
/// Loading never fails; every problem (missing file, bad syntax, bad value,
/// unknown key) is reported as one of these and the default is used instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The offending key, or `None` for whole-file problems
    pub key: Option<String>,
    /// Where the value came from (file path or environment variable)
    pub source: PathBuf,
    /// The line number (1-indexed) if available
    pub line: Option<usize>,
    /// What went wrong
    pub kind: ConfigWarningKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarningKind {
    /// The configuration file does not exist
    Missing,
    /// The file exists but could not be read or parsed
    Unreadable { message: String },
    /// The key is not recognised
    UnknownKey { suggestion: Option<String> },
    /// The value has the wrong type or is out of range; default used
    InvalidValue { value: String, expected: &'static str },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let location = match self.line {
            Some(line) => format!("{}:{}", self.source.display(), line),
            None => self.source.display().to_string(),
        };
        let key = self.key.as_deref().unwrap_or("");

        match &self.kind {
            ConfigWarningKind::Missing => {
                write!(f, "config file {} not found, using defaults", location)
            }
            ConfigWarningKind::Unreadable { message } => {
                write!(f, "config file {} unreadable ({}), using defaults", location, message)
            }
            ConfigWarningKind::UnknownKey { suggestion } => {
                write!(f, "unknown config key '{}' in {}", key, location)?;
                if let Some(suggestion) = suggestion {
                    write!(f, " (did you mean '{}'?)", suggestion)?;
                }
                Ok(())
            }
            ConfigWarningKind::InvalidValue { value, expected } => write!(
                f,
                "invalid value {} for '{}' in {}: expected {}, using default",
                value, key, location, expected
            ),
        }
    }
}
