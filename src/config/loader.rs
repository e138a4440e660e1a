//! Configuration loading
//!
//! The file is read as TOML; if that fails it is re-read as plain
//! `key = value` / `key: value` lines. Each known key is then extracted on its
//! own, so one bad value only costs that key its setting.

use std::collections::BTreeMap;
use std::fs;
use std::num::{NonZeroU64, NonZeroUsize};
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ConfigWarning, ConfigWarningKind};
use crate::error::{SmartparkError, SmartparkResult};

use super::types::CarparkConfig;

/// Config file looked for when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "carpark_config.toml";

const KEY_CAPACITY: &str = "capacity";
const KEY_LOCATION: &str = "location";
const KEY_LOG_FILE: &str = "log_file";
const KEY_TEMPERATURE_INTERVAL: &str = "temperature_interval_secs";

const KNOWN_KEYS: &[&str] = &[
    KEY_CAPACITY,
    KEY_LOCATION,
    KEY_LOG_FILE,
    KEY_TEMPERATURE_INTERVAL,
];

/// Environment overrides, in application order.
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("SMARTPARK_CAPACITY", KEY_CAPACITY),
    ("SMARTPARK_LOCATION", KEY_LOCATION),
    ("SMARTPARK_LOG_FILE", KEY_LOG_FILE),
    ("SMARTPARK_TEMPERATURE_INTERVAL_SECS", KEY_TEMPERATURE_INTERVAL),
];

/// A raw value and the line it came from.
#[derive(Debug, Clone)]
struct RawEntry {
    value: toml::Value,
    line: Option<usize>,
}

/// Load a config file, never failing.
pub fn load_with_warnings(path: &Path) -> (CarparkConfig, Vec<ConfigWarning>) {
    if !path.exists() {
        return (
            CarparkConfig::default(),
            vec![ConfigWarning {
                key: None,
                source: path.to_path_buf(),
                line: None,
                kind: ConfigWarningKind::Missing,
            }],
        );
    }

    match fs::read_to_string(path) {
        Ok(content) => parse_with_warnings(&content, path),
        Err(e) => (
            CarparkConfig::default(),
            vec![ConfigWarning {
                key: None,
                source: path.to_path_buf(),
                line: None,
                kind: ConfigWarningKind::Unreadable {
                    message: e.to_string(),
                },
            }],
        ),
    }
}

/// Load a config file, failing if it cannot be read or parsed in either
/// supported format.
pub fn load_strict(path: &Path) -> SmartparkResult<(CarparkConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    let entries = match parse_toml(&content) {
        Ok(entries) => entries,
        Err(toml_err) => {
            parse_key_value_lines(&content).ok_or_else(|| SmartparkError::ConfigParse {
                file: path.to_path_buf(),
                message: toml_err,
            })?
        }
    };
    Ok(build(entries, path))
}

/// Parse config text. Anything unusable becomes a warning.
pub fn parse_with_warnings(content: &str, source: &Path) -> (CarparkConfig, Vec<ConfigWarning>) {
    match parse_toml(content) {
        Ok(entries) => build(entries, source),
        Err(toml_err) => match parse_key_value_lines(content) {
            Some(entries) => build(entries, source),
            None => (
                CarparkConfig::default(),
                vec![ConfigWarning {
                    key: None,
                    source: source.to_path_buf(),
                    line: None,
                    kind: ConfigWarningKind::Unreadable { message: toml_err },
                }],
            ),
        },
    }
}

/// Apply environment variable overrides (SMARTPARK_* prefix)
pub fn with_env_overrides(config: CarparkConfig) -> (CarparkConfig, Vec<ConfigWarning>) {
    apply_overrides(config, |name| std::env::var(name).ok())
}

/// Apply overrides from any variable lookup.
pub fn apply_overrides(
    mut config: CarparkConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> (CarparkConfig, Vec<ConfigWarning>) {
    let mut warnings = Vec::new();
    for &(var, key) in ENV_OVERRIDES {
        if let Some(raw) = lookup(var) {
            let entry = RawEntry {
                value: scalar_from_text(&raw),
                line: None,
            };
            apply_entry(&mut config, key, &entry, Path::new(var), &mut warnings);
        }
    }
    (config, warnings)
}

fn build(
    entries: BTreeMap<String, RawEntry>,
    source: &Path,
) -> (CarparkConfig, Vec<ConfigWarning>) {
    let mut config = CarparkConfig::default();
    let mut warnings = Vec::new();

    for (key, entry) in &entries {
        if KNOWN_KEYS.contains(&key.as_str()) {
            apply_entry(&mut config, key, entry, source, &mut warnings);
        } else {
            warnings.push(ConfigWarning {
                key: Some(key.clone()),
                source: source.to_path_buf(),
                line: entry.line,
                kind: ConfigWarningKind::UnknownKey {
                    suggestion: suggest_key(key),
                },
            });
        }
    }

    (config, warnings)
}

fn apply_entry(
    config: &mut CarparkConfig,
    key: &str,
    entry: &RawEntry,
    source: &Path,
    warnings: &mut Vec<ConfigWarning>,
) {
    let applied = match key {
        KEY_CAPACITY => positive_integer(&entry.value)
            .and_then(|n| usize::try_from(n).ok())
            .and_then(NonZeroUsize::new)
            .map(|capacity| config.capacity = capacity)
            .ok_or("a positive integer"),
        KEY_LOCATION => text(&entry.value)
            .map(|location| config.location = location)
            .ok_or("a string"),
        KEY_LOG_FILE => text(&entry.value)
            .filter(|path| !path.trim().is_empty())
            .map(|path| config.log_file = PathBuf::from(path))
            .ok_or("a non-empty path"),
        KEY_TEMPERATURE_INTERVAL => positive_integer(&entry.value)
            .and_then(NonZeroU64::new)
            .map(|secs| config.temperature_interval_secs = secs)
            .ok_or("a positive number of seconds"),
        _ => Ok(()),
    };

    if let Err(expected) = applied {
        warnings.push(ConfigWarning {
            key: Some(key.to_string()),
            source: source.to_path_buf(),
            line: entry.line,
            kind: ConfigWarningKind::InvalidValue {
                value: entry.value.to_string(),
                expected,
            },
        });
    }
}

fn positive_integer(value: &toml::Value) -> Option<u64> {
    match value {
        toml::Value::Integer(n) => u64::try_from(*n).ok().filter(|n| *n > 0),
        toml::Value::String(s) => s.trim().parse::<u64>().ok().filter(|n| *n > 0),
        _ => None,
    }
}

fn text(value: &toml::Value) -> Option<String> {
    match value {
        toml::Value::String(s) => Some(s.clone()),
        toml::Value::Integer(n) => Some(n.to_string()),
        toml::Value::Float(f) => Some(f.to_string()),
        toml::Value::Boolean(b) => Some(b.to_string()),
        _ => None,
    }
}

fn parse_toml(content: &str) -> Result<BTreeMap<String, RawEntry>, String> {
    let table: toml::Table = content.parse().map_err(|e: toml::de::Error| e.message().to_string())?;
    Ok(table
        .into_iter()
        .map(|(key, value)| {
            let line = find_line_number(content, &key);
            (key, RawEntry { value, line })
        })
        .collect())
}

/// Parse `key = value` or `key: value` lines; `#` starts a comment.
///
/// Returns `None` if any non-blank line has neither separator.
fn parse_key_value_lines(content: &str) -> Option<BTreeMap<String, RawEntry>> {
    let mut entries = BTreeMap::new();
    for (i, line) in content.lines().enumerate() {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() || (line.starts_with('[') && line.ends_with(']')) {
            continue;
        }
        let (key, value) = line.split_once('=').or_else(|| line.split_once(':'))?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        entries.insert(
            key.to_string(),
            RawEntry {
                value: scalar_from_text(value.trim()),
                line: Some(i + 1),
            },
        );
    }
    Some(entries)
}

/// Interpret unquoted text: integers stay integers, quotes are stripped.
fn scalar_from_text(raw: &str) -> toml::Value {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<i64>() {
        return toml::Value::Integer(n);
    }
    let unquoted = raw
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| raw.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')))
        .unwrap_or(raw);
    toml::Value::String(unquoted.to_string())
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.trim_start().starts_with(needle) {
            return Some(i + 1);
        }
    }
    None
}

/// Closest known key within two edits; ties go to the earlier key.
fn suggest_key(unknown: &str) -> Option<String> {
    let unknown = unknown.to_ascii_lowercase();
    KNOWN_KEYS
        .iter()
        .map(|&candidate| (candidate, edit_distance(&unknown, candidate)))
        .filter(|&(_, dist)| dist <= 2)
        .min_by_key(|&(_, dist)| dist)
        .map(|(candidate, _)| candidate.to_string())
}

/// Levenshtein distance over chars, keeping one row of the table.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        // `diagonal` is the previous row's value at j, before it is overwritten.
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitute = diagonal + usize::from(ca != cb);
            diagonal = row[j + 1];
            row[j + 1] = substitute.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[b.len()]
}
