//! SmartPark - car park occupancy registry
//!
//! Tracks free spaces and plated cars for a single car park, writes every
//! decision and temperature sample to an append-only audit log, and keeps a
//! sign board in sync with the current state.
//!
//! Arrivals, departures and temperature samples may come from any thread;
//! the [`Registry`] serialises them.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    CarparkSnapshot, FeedHandle, Registry, TemperatureFeed, TemperatureWave, TrafficFeed,
    TrafficHandle, TrafficOutcome, TrafficRequest, TrafficSender,
};
pub use config::{CarparkConfig, ConfigWarning};
pub use domain::entities::{EntryOutcome, ExitOutcome, OccupancyRecord};
pub use domain::ports::{AuditLog, CarparkDataProvider, Clock, DisplayRefresh, SensorListener};
pub use domain::value_objects::Plate;
pub use error::{SmartparkError, SmartparkResult};
pub use infrastructure::{ConsoleDisplay, FileAuditLog, ManualClock, MemoryAuditLog, SystemClock};
