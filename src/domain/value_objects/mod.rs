//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod plate;

pub use config_warning::{ConfigWarning, ConfigWarningKind};
pub use plate::{Plate, UNKNOWN_PLATE};
