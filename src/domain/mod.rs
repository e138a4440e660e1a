//! Domain Layer
//!
//! The rules of the car park, without threads or I/O.
//!
//! ## Structure
//!
//! - `entities/` - `CarparkState`, `OccupancyRecord` and decision outcomes
//! - `value_objects/` - Immutable value types (`Plate`, `ConfigWarning`)
//! - `ports/` - Interfaces for the audit log, clock, display and sensors

pub mod entities;
pub mod ports;
pub mod value_objects;
