//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `OccupancyRecord` - A plated car occupying a space
//! - `CarparkState` - Capacity, free-space counter and live records
//! - `EntryOutcome` / `ExitOutcome` - Decisions taken by `CarparkState`

mod carpark;
mod occupancy;
mod outcome;

pub use carpark::CarparkState;
pub use occupancy::{OccupancyRecord, EVENT_TIME_FORMAT};
pub use outcome::{temperature_message, EntryOutcome, ExitOutcome};
