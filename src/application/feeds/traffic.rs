//! Arrival/departure feed
//!
//! Bay sensors and the UI hand requests to a `TrafficSender` from whatever
//! thread they run on. One consumer thread turns each request into exactly
//! one registry call, in the order received.
//!
//! The consumer exits once every `TrafficSender` is gone, or when its
//! `TrafficHandle` is stopped. Only senders hold the request channel, so the
//! handle signals through a flag that the consumer checks between requests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info};

use crate::application::registry::Registry;
use crate::domain::entities::{EntryOutcome, ExitOutcome};

/// A single arrival or departure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrafficRequest {
    Arrived {
        plate: Option<String>,
        make: String,
        model: String,
    },
    Left {
        plate: Option<String>,
    },
}

/// What the registry decided for a request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TrafficOutcome {
    Entry(EntryOutcome),
    Exit(ExitOutcome),
}

impl TrafficOutcome {
    pub fn free_spaces(&self) -> usize {
        match self {
            TrafficOutcome::Entry(outcome) => outcome.free_spaces(),
            TrafficOutcome::Exit(outcome) => outcome.free_spaces(),
        }
    }
}

/// How long the consumer waits for a request before checking the stop flag.
const STOP_POLL: Duration = Duration::from_millis(25);

/// Cloneable entry point for arrival/departure signals.
#[derive(Clone)]
pub struct TrafficSender {
    tx: Sender<TrafficRequest>,
}

impl TrafficSender {
    /// Queue an arrival. Returns `false` if the feed has stopped.
    pub fn car_arrived(
        &self,
        plate: Option<&str>,
        make: Option<&str>,
        model: Option<&str>,
    ) -> bool {
        self.send(TrafficRequest::Arrived {
            plate: plate.map(str::to_string),
            make: make.unwrap_or_default().to_string(),
            model: model.unwrap_or_default().to_string(),
        })
    }

    /// Queue a departure. Returns `false` if the feed has stopped.
    pub fn car_left(&self, plate: Option<&str>) -> bool {
        self.send(TrafficRequest::Left {
            plate: plate.map(str::to_string),
        })
    }

    pub fn send(&self, request: TrafficRequest) -> bool {
        self.tx.send(request).is_ok()
    }
}

/// Handle to the consumer thread.
///
/// Stopping (or dropping) lets already-queued requests drain first.
pub struct TrafficHandle {
    stop: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl TrafficHandle {
    pub fn stop(mut self) {
        self.shutdown();
    }

    /// True once the consumer thread has exited.
    pub fn is_finished(&self) -> bool {
        self.thread.as_ref().map(|t| t.is_finished()).unwrap_or(true)
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::Release);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for TrafficHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

type OutcomeObserver = Box<dyn Fn(&TrafficRequest, &TrafficOutcome) + Send>;

pub struct TrafficFeed {
    registry: Arc<Registry>,
    observer: Option<OutcomeObserver>,
}

impl TrafficFeed {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self {
            registry,
            observer: None,
        }
    }

    /// Called on the consumer thread after every decision.
    pub fn with_observer(
        mut self,
        observer: impl Fn(&TrafficRequest, &TrafficOutcome) + Send + 'static,
    ) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Start the consumer thread.
    pub fn spawn(self) -> std::io::Result<(TrafficSender, TrafficHandle)> {
        let (tx, rx) = channel();
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        let thread = thread::Builder::new()
            .name("traffic-feed".to_string())
            .spawn(move || self.run(rx, &stop_flag))?;

        Ok((
            TrafficSender { tx },
            TrafficHandle {
                stop,
                thread: Some(thread),
            },
        ))
    }

    fn run(self, rx: Receiver<TrafficRequest>, stop: &AtomicBool) {
        info!("traffic feed started");
        loop {
            match rx.recv_timeout(STOP_POLL) {
                Ok(request) => self.handle(request),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
            if stop.load(Ordering::Acquire) {
                // Requests queued before the stop still get decided.
                while let Ok(request) = rx.try_recv() {
                    self.handle(request);
                }
                break;
            }
        }
        info!("traffic feed stopped");
    }

    fn handle(&self, request: TrafficRequest) {
        let outcome = self.apply(&request);
        debug!(?request, free_spaces = outcome.free_spaces(), "traffic request applied");
        if let Some(observer) = &self.observer {
            observer(&request, &outcome);
        }
    }

    fn apply(&self, request: &TrafficRequest) -> TrafficOutcome {
        match request {
            TrafficRequest::Arrived { plate, make, model } => {
                TrafficOutcome::Entry(self.registry.arrive(plate.as_deref(), make, model))
            }
            TrafficRequest::Left { plate } => {
                TrafficOutcome::Exit(self.registry.depart(plate.as_deref()))
            }
        }
    }
}
