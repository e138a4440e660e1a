//! Point-in-time view of the car park for displays and reports

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::domain::entities::{CarparkState, OccupancyRecord};

/// Consistent copy of the registry state, taken under the registry lock.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarparkSnapshot {
    pub location: String,
    pub capacity: usize,
    pub free_spaces: usize,
    pub temperature: f64,
    pub current_time: DateTime<Local>,
    pub is_empty: bool,
    pub live_records: Vec<OccupancyRecord>,
}

impl CarparkSnapshot {
    pub(crate) fn capture(state: &CarparkState, now: DateTime<Local>) -> Self {
        Self {
            location: state.location().to_string(),
            capacity: state.capacity(),
            free_spaces: state.free_spaces(),
            temperature: state.temperature(),
            current_time: now,
            is_empty: state.is_empty(),
            live_records: state.live_records(),
        }
    }

    /// Spaces in use, anonymous cars included.
    pub fn occupied(&self) -> usize {
        self.capacity - self.free_spaces
    }

    /// `HH:MM:SS` form of `current_time`.
    pub fn time_of_day(&self) -> String {
        self.current_time.format("%H:%M:%S").to_string()
    }
}
