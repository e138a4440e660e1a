//! Feed Adapters
//!
//! Translate external stimuli into registry calls, each on its own thread:
//! - `temperature` - periodic synthetic temperature samples
//! - `traffic` - arrival/departure requests from sensors or the UI

pub mod temperature;
pub mod traffic;

pub use temperature::{FeedHandle, TemperatureFeed, TemperatureWave, DEFAULT_TEMPERATURE_INTERVAL};
pub use traffic::{TrafficFeed, TrafficHandle, TrafficOutcome, TrafficRequest, TrafficSender};
