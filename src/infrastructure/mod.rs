//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `audit/` - Audit log sinks (file, in-memory)
//! - `clock` - Wall clock and a manually driven clock
//! - `display/` - Console sign board

pub mod audit;
pub mod clock;
pub mod display;

// Re-export for convenience
pub use audit::{FileAuditLog, MemoryAuditLog};
pub use clock::{ManualClock, SystemClock};
pub use display::{render_board, ConsoleDisplay, DisplayField};
