//! Registry
//!
//! The single owner of `CarparkState`. Every mutation runs the full
//! check-and-update sequence under one mutex, writes its audit line before
//! releasing the lock (so the log reads in decision order) and refreshes the
//! display after releasing it (the display reads back through the lock).

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use chrono::{DateTime, Local};
use tracing::{debug, warn};

use super::snapshot::CarparkSnapshot;
use crate::config::CarparkConfig;
use crate::domain::entities::{
    temperature_message, CarparkState, EntryOutcome, ExitOutcome, OccupancyRecord,
};
use crate::domain::ports::{AuditLog, CarparkDataProvider, Clock, DisplayRefresh, SensorListener};
use crate::domain::value_objects::Plate;
use crate::infrastructure::clock::SystemClock;

pub struct Registry {
    state: Mutex<CarparkState>,
    audit: Arc<dyn AuditLog>,
    clock: Arc<dyn Clock>,
    display: RwLock<Option<Arc<dyn DisplayRefresh>>>,
}

impl Registry {
    pub fn new(
        capacity: NonZeroUsize,
        location: impl Into<String>,
        audit: Arc<dyn AuditLog>,
    ) -> Self {
        Self {
            state: Mutex::new(CarparkState::new(capacity, location)),
            audit,
            clock: Arc::new(SystemClock),
            display: RwLock::new(None),
        }
    }

    pub fn from_config(config: &CarparkConfig, audit: Arc<dyn AuditLog>) -> Self {
        Self::new(config.capacity, config.location.clone(), audit)
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_display(self, display: Arc<dyn DisplayRefresh>) -> Self {
        self.set_display(display);
        self
    }

    /// Attach or replace the display.
    pub fn set_display(&self, display: Arc<dyn DisplayRefresh>) {
        *self.display.write().unwrap_or_else(PoisonError::into_inner) = Some(display);
    }

    pub fn clear_display(&self) {
        *self.display.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Ask to admit a car and report what happened.
    pub fn arrive(&self, plate: Option<&str>, make: &str, model: &str) -> EntryOutcome {
        let plate = Plate::parse(plate);
        let now = self.clock.now();

        let outcome = {
            let mut state = self.lock();
            let outcome = state.enter(plate, make, model, now);
            self.write_audit(now, &outcome.audit_message());
            outcome
        };

        debug!(?outcome, "entry decided");
        if outcome.is_admitted() {
            self.notify_display();
        }
        outcome
    }

    /// Admit a car; returns the free spaces afterwards.
    ///
    /// Refusals leave the count unchanged and are only visible in the log.
    pub fn admit(&self, plate: Option<&str>, make: &str, model: &str) -> usize {
        self.arrive(plate, make, model).free_spaces()
    }

    /// Ask to release a space and report what happened.
    pub fn depart(&self, plate: Option<&str>) -> ExitOutcome {
        let plate = Plate::parse(plate);
        let now = self.clock.now();

        let outcome = {
            let mut state = self.lock();
            let outcome = state.exit(plate.as_ref(), now);
            if let Some(message) = outcome.audit_message() {
                self.write_audit(now, &message);
            }
            outcome
        };

        debug!(?outcome, "exit decided");
        if outcome.is_departed() {
            self.notify_display();
        }
        outcome
    }

    /// Release a space; returns the free spaces afterwards.
    pub fn release(&self, plate: Option<&str>) -> usize {
        self.depart(plate).free_spaces()
    }

    /// Store a temperature sample. Any value is accepted.
    pub fn record_temperature(&self, reading: f64) {
        let now = self.clock.now();
        {
            let mut state = self.lock();
            state.set_temperature(reading);
            self.write_audit(now, &temperature_message(reading));
        }
        self.notify_display();
    }

    pub fn snapshot(&self) -> CarparkSnapshot {
        let now = self.clock.now();
        CarparkSnapshot::capture(&self.lock(), now)
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    pub fn location(&self) -> String {
        self.lock().location().to_string()
    }

    pub fn free_spaces(&self) -> usize {
        self.lock().free_spaces()
    }

    /// Last recorded temperature, 0.0 before the first sample.
    pub fn temperature(&self) -> f64 {
        self.lock().temperature()
    }

    /// Wall-clock time as `HH:MM:SS`.
    pub fn current_time(&self) -> String {
        self.clock.now().format("%H:%M:%S").to_string()
    }

    pub fn cars_currently_parked(&self) -> Vec<OccupancyRecord> {
        self.lock().live_records()
    }

    fn lock(&self) -> MutexGuard<'_, CarparkState> {
        // CarparkState only changes after all checks pass, so a panic while
        // the lock is held cannot leave it half-updated.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_audit(&self, at: DateTime<Local>, message: &str) {
        if let Err(err) = self.audit.append(at, message) {
            warn!(error = %err, message, "audit log write failed");
        }
    }

    fn notify_display(&self) {
        let display = self
            .display
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(display) = display {
            display.refresh();
        }
    }
}

impl SensorListener for Registry {
    fn incoming_car(&self, license_plate: Option<&str>) -> usize {
        self.admit(license_plate, "", "")
    }

    fn outgoing_car(&self, license_plate: Option<&str>) -> usize {
        self.release(license_plate)
    }

    fn temperature_reading(&self, reading: f64) {
        self.record_temperature(reading);
    }
}

impl CarparkDataProvider for Registry {
    fn available_spaces(&self) -> usize {
        self.free_spaces()
    }

    fn temperature(&self) -> f64 {
        Registry::temperature(self)
    }

    fn current_time(&self) -> String {
        Registry::current_time(self)
    }
}
