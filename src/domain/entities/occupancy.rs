//! OccupancyRecord entity - one car occupying one space

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::domain::value_objects::Plate;

/// Format of entry/exit times embedded in audit messages.
pub const EVENT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// A plated car currently (or, once `exit_time` is set, formerly) parked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OccupancyRecord {
    pub plate: Plate,
    pub entry_time: DateTime<Local>,
    pub exit_time: Option<DateTime<Local>>,
    pub make: String,
    pub model: String,
}

impl OccupancyRecord {
    pub fn new(
        plate: Plate,
        entry_time: DateTime<Local>,
        make: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            plate,
            entry_time,
            exit_time: None,
            make: make.into(),
            model: model.into(),
        }
    }

    /// Stamp the exit time. Only the first call has an effect.
    pub fn mark_exit(&mut self, at: DateTime<Local>) {
        if self.exit_time.is_none() {
            self.exit_time = Some(at);
        }
    }
}
