//! Application Layer
//!
//! Orchestrates the domain rules across threads and I/O.
//! This layer:
//! - Depends on Domain layer (entities, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Components
//!
//! - `Registry` - Serialised owner of the car park state, audit log and display
//! - `TemperatureFeed` - Periodic temperature producer
//! - `TrafficFeed` - Arrival/departure consumer

pub mod feeds;
pub mod registry;

pub use feeds::{
    FeedHandle, TemperatureFeed, TemperatureWave, TrafficFeed, TrafficHandle, TrafficOutcome,
    TrafficRequest, TrafficSender, DEFAULT_TEMPERATURE_INTERVAL,
};
pub use registry::{CarparkSnapshot, Registry};
