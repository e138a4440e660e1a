//! Plate value object - the licence plate identifying a parked car
//!
//! A plate is always non-empty and trimmed. Sensors and the UI may deliver
//! no plate at all (anonymous traffic); `Plate::parse` maps blank input to
//! `None` so callers never have to special-case empty strings.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder used in log lines when a refused car carries no plate.
pub const UNKNOWN_PLATE: &str = "UNKNOWN";

/// Licence plate of a car.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plate(String);

impl Plate {
    /// Parse optional raw input into a plate.
    ///
    /// Returns `None` for absent, empty or whitespace-only input.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let trimmed = raw?.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display form for an optional plate (`UNKNOWN` when absent).
    pub fn or_unknown(plate: Option<&Plate>) -> &str {
        plate.map(Plate::as_str).unwrap_or(UNKNOWN_PLATE)
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Plate {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Plate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
