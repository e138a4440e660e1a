//! Temperature feed
//!
//! A synthetic sensor: `TemperatureWave` produces a saw-tooth between 18 and
//! 25 °C, and `TemperatureFeed` pushes one sample per period into a
//! `SensorListener` until stopped.

use std::sync::mpsc::{channel, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, info};

use crate::domain::ports::SensorListener;

/// Default sampling period.
pub const DEFAULT_TEMPERATURE_INTERVAL: Duration = Duration::from_secs(3);

const WAVE_START: f64 = 20.0;
const WAVE_STEP: f64 = 0.5;
const WAVE_MAX: f64 = 25.0;
const WAVE_RESET: f64 = 18.0;

/// Endless saw-tooth temperature generator.
///
/// Each sample is 0.5 °C above the last; once that would exceed 25 °C the
/// wave drops back to 18 °C. The first sample is 20.5 °C.
#[derive(Debug, Clone)]
pub struct TemperatureWave {
    current: f64,
}

impl TemperatureWave {
    pub fn new() -> Self {
        Self { current: WAVE_START }
    }
}

impl Default for TemperatureWave {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for TemperatureWave {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.current += WAVE_STEP;
        if self.current > WAVE_MAX {
            self.current = WAVE_RESET;
        }
        Some(self.current)
    }
}

/// Handle to a running feed thread.
///
/// Dropping the handle stops the feed and waits for its thread.
pub struct FeedHandle {
    stop: Option<Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl FeedHandle {
    pub(crate) fn new(stop: Sender<()>, thread: JoinHandle<()>) -> Self {
        Self {
            stop: Some(stop),
            thread: Some(thread),
        }
    }

    /// Stop the feed and wait for its thread to finish.
    pub fn stop(mut self) {
        self.shutdown();
    }

    pub fn is_finished(&self) -> bool {
        self.thread.as_ref().map(|t| t.is_finished()).unwrap_or(true)
    }

    fn shutdown(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for FeedHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

pub struct TemperatureFeed;

impl TemperatureFeed {
    /// Start sampling `wave` every `interval` on a background thread.
    ///
    /// The first sample is taken after one full interval. Samples stop as
    /// soon as the handle is stopped or dropped.
    pub fn spawn<I>(
        listener: Arc<dyn SensorListener>,
        wave: I,
        interval: Duration,
    ) -> std::io::Result<FeedHandle>
    where
        I: Iterator<Item = f64> + Send + 'static,
    {
        let (stop_tx, stop_rx) = channel::<()>();

        let thread = thread::Builder::new()
            .name("temperature-feed".to_string())
            .spawn(move || {
                info!(interval_ms = interval.as_millis() as u64, "temperature feed started");
                for reading in wave {
                    match stop_rx.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => {
                            debug!(reading, "temperature sample");
                            listener.temperature_reading(reading);
                        }
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                info!("temperature feed stopped");
            })?;

        Ok(FeedHandle::new(stop_tx, thread))
    }
}
