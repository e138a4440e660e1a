//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod audit_log;
pub mod clock;
pub mod display;
pub mod sensor;

pub use audit_log::{format_audit_line, AuditLog, AUDIT_TIMESTAMP_FORMAT};
pub use clock::Clock;
pub use display::DisplayRefresh;
pub use sensor::{CarparkDataProvider, SensorListener};
