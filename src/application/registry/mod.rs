//! Registry
//!
//! Thread-safe owner of the car park state, its audit trail and its display.

mod snapshot;
mod use_case;


pub use snapshot::CarparkSnapshot;
pub use use_case::Registry;
