//! Outcomes of entry and exit decisions
//!
//! Refusals are ordinary results, not errors. Each outcome knows the audit
//! message it produces and the free-space count after the decision.

use chrono::{DateTime, Local};
use serde::Serialize;

use super::occupancy::{OccupancyRecord, EVENT_TIME_FORMAT};
use crate::domain::value_objects::Plate;

/// Result of a car asking to enter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EntryOutcome {
    /// A space was taken
    Admitted {
        plate: Option<Plate>,
        entry_time: DateTime<Local>,
        free_spaces: usize,
    },
    /// No free space left
    RefusedFull {
        plate: Option<Plate>,
        free_spaces: usize,
    },
    /// The plate is already parked
    RefusedDuplicate { plate: Plate, free_spaces: usize },
}

impl EntryOutcome {
    pub fn free_spaces(&self) -> usize {
        match self {
            EntryOutcome::Admitted { free_spaces, .. }
            | EntryOutcome::RefusedFull { free_spaces, .. }
            | EntryOutcome::RefusedDuplicate { free_spaces, .. } => *free_spaces,
        }
    }

    pub fn is_admitted(&self) -> bool {
        matches!(self, EntryOutcome::Admitted { .. })
    }

    /// Audit line body for this outcome.
    pub fn audit_message(&self) -> String {
        match self {
            EntryOutcome::Admitted {
                plate: Some(plate),
                entry_time,
                ..
            } => format!(
                "ENTRY: Car {} entered at {}.",
                plate,
                entry_time.format(EVENT_TIME_FORMAT)
            ),
            EntryOutcome::Admitted { plate: None, .. } => {
                "ENTRY: Car with no license plate recorded entered.".to_string()
            }
            EntryOutcome::RefusedFull { plate, .. } => format!(
                "ENTRY DENIED: Carpark full. Car {} refused.",
                Plate::or_unknown(plate.as_ref())
            ),
            EntryOutcome::RefusedDuplicate { plate, .. } => {
                format!("ENTRY DENIED: Car {} already in carpark.", plate)
            }
        }
    }
}

/// Result of a car asking to leave.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ExitOutcome {
    /// A plated car left; its closed record is handed back
    Departed {
        record: OccupancyRecord,
        free_spaces: usize,
    },
    /// An unplated car left
    DepartedAnonymous { free_spaces: usize },
    /// The plate is not parked here
    RefusedUnknown { plate: Plate, free_spaces: usize },
    /// Unplated exit reported while the lot is empty
    Ignored { free_spaces: usize },
}

impl ExitOutcome {
    pub fn free_spaces(&self) -> usize {
        match self {
            ExitOutcome::Departed { free_spaces, .. }
            | ExitOutcome::DepartedAnonymous { free_spaces }
            | ExitOutcome::RefusedUnknown { free_spaces, .. }
            | ExitOutcome::Ignored { free_spaces } => *free_spaces,
        }
    }

    pub fn is_departed(&self) -> bool {
        matches!(
            self,
            ExitOutcome::Departed { .. } | ExitOutcome::DepartedAnonymous { .. }
        )
    }

    /// Audit line body, or `None` for a silently ignored exit.
    pub fn audit_message(&self) -> Option<String> {
        match self {
            ExitOutcome::Departed { record, .. } => {
                let exit_time = record.exit_time.unwrap_or(record.entry_time);
                Some(format!(
                    "EXIT: Car {} exited at {}.",
                    record.plate,
                    exit_time.format(EVENT_TIME_FORMAT)
                ))
            }
            ExitOutcome::DepartedAnonymous { .. } => {
                Some("EXIT: Car with no license plate recorded left.".to_string())
            }
            ExitOutcome::RefusedUnknown { plate, .. } => {
                Some(format!("EXIT DENIED: Car {} not found in carpark.", plate))
            }
            ExitOutcome::Ignored { .. } => None,
        }
    }
}

/// Audit line body for a temperature sample.
pub fn temperature_message(reading: f64) -> String {
    format!("Temperature reading: {}", format_reading(reading))
}

/// Shortest round-trip form with a decimal point (`21.0`). Exponents carry a
/// sign and at least two digits (`1e+16`, `1e-05`); non-finite values are
/// `nan`, `inf` and `-inf`.
fn format_reading(reading: f64) -> String {
    if reading.is_nan() {
        return "nan".to_string();
    }
    if reading.is_infinite() {
        return if reading > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let shortest = format!("{:?}", reading);
    match shortest.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => shortest,
    }
}
