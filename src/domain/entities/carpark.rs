//! CarparkState entity
//!
//! Holds capacity, the free-space counter and the live records, and applies
//! the admission and release rules. It is not thread-safe on its own; the
//! application-layer `Registry` serialises access to it.

use std::collections::HashMap;
use std::num::NonZeroUsize;

use chrono::{DateTime, Local};

use super::occupancy::OccupancyRecord;
use super::outcome::{EntryOutcome, ExitOutcome};
use crate::domain::value_objects::Plate;

#[derive(Debug, Clone)]
pub struct CarparkState {
    capacity: usize,
    free_spaces: usize,
    records: HashMap<Plate, OccupancyRecord>,
    temperature: f64,
    location: String,
}

impl CarparkState {
    pub fn new(capacity: NonZeroUsize, location: impl Into<String>) -> Self {
        Self {
            capacity: capacity.get(),
            free_spaces: capacity.get(),
            records: HashMap::new(),
            temperature: 0.0,
            location: location.into(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn free_spaces(&self) -> usize {
        self.free_spaces
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn is_empty(&self) -> bool {
        self.free_spaces == self.capacity
    }

    pub fn contains(&self, plate: &str) -> bool {
        self.records.contains_key(plate)
    }

    /// Live records ordered by entry time, then plate.
    pub fn live_records(&self) -> Vec<OccupancyRecord> {
        let mut records: Vec<_> = self.records.values().cloned().collect();
        records.sort_by(|a, b| {
            a.entry_time
                .cmp(&b.entry_time)
                .then_with(|| a.plate.cmp(&b.plate))
        });
        records
    }

    /// Admit a car if there is room and the plate is not already parked.
    ///
    /// A full lot is checked before the duplicate plate.
    pub fn enter(
        &mut self,
        plate: Option<Plate>,
        make: &str,
        model: &str,
        now: DateTime<Local>,
    ) -> EntryOutcome {
        if self.free_spaces == 0 {
            return EntryOutcome::RefusedFull {
                plate,
                free_spaces: self.free_spaces,
            };
        }

        if let Some(plate) = plate.as_ref() {
            if self.records.contains_key(plate) {
                return EntryOutcome::RefusedDuplicate {
                    plate: plate.clone(),
                    free_spaces: self.free_spaces,
                };
            }
            let record = OccupancyRecord::new(plate.clone(), now, make, model);
            self.records.insert(plate.clone(), record);
        }

        self.free_spaces -= 1;
        EntryOutcome::Admitted {
            plate,
            entry_time: now,
            free_spaces: self.free_spaces,
        }
    }

    /// Release a space.
    ///
    /// An unplated exit while the lot is empty is ignored. The counter never
    /// climbs above capacity, even if anonymous exits outnumber entries.
    pub fn exit(&mut self, plate: Option<&Plate>, now: DateTime<Local>) -> ExitOutcome {
        let outcome = match plate {
            None if self.is_empty() => {
                return ExitOutcome::Ignored {
                    free_spaces: self.free_spaces,
                };
            }
            None => None,
            Some(plate) => match self.records.remove(plate) {
                Some(mut record) => {
                    record.mark_exit(now);
                    Some(record)
                }
                None => {
                    return ExitOutcome::RefusedUnknown {
                        plate: plate.clone(),
                        free_spaces: self.free_spaces,
                    };
                }
            },
        };

        if self.free_spaces < self.capacity {
            self.free_spaces += 1;
        }

        match outcome {
            Some(record) => ExitOutcome::Departed {
                record,
                free_spaces: self.free_spaces,
            },
            None => ExitOutcome::DepartedAnonymous {
                free_spaces: self.free_spaces,
            },
        }
    }

    pub fn set_temperature(&mut self, reading: f64) {
        self.temperature = reading;
    }
}
