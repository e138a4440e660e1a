//! Reusable registries and recording ports.

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, Weak};

use chrono::{DateTime, Local, TimeZone};

use smartpark::domain::ports::{CarparkDataProvider, DisplayRefresh};
use smartpark::{ManualClock, MemoryAuditLog, Registry};

pub const LOCATION: &str = "Moondalup City Square";

/// Fixed wall-clock start for deterministic timestamps.
pub fn opening_time() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 7, 4, 9, 15, 0).unwrap()
}

pub struct Lot {
    pub registry: Arc<Registry>,
    pub log: Arc<MemoryAuditLog>,
    pub clock: Arc<ManualClock>,
}

/// Registry with an in-memory audit log and a manual clock.
pub fn lot(capacity: usize) -> Lot {
    let log = Arc::new(MemoryAuditLog::new());
    let clock = Arc::new(ManualClock::new(opening_time()));
    let registry = Registry::new(NonZeroUsize::new(capacity).unwrap(), LOCATION, log.clone())
        .with_clock(clock.clone());
    Lot {
        registry: Arc::new(registry),
        log,
        clock,
    }
}

/// Display that records the free-space count it reads on every refresh.
pub struct ObservingDisplay {
    provider: Weak<dyn CarparkDataProvider>,
    seen: Mutex<Vec<usize>>,
}

impl ObservingDisplay {
    pub fn attach(registry: &Arc<Registry>) -> Arc<Self> {
        let weak: Weak<Registry> = Arc::downgrade(registry);
        let display = Arc::new(Self {
            provider: weak,
            seen: Mutex::new(Vec::new()),
        });
        registry.set_display(display.clone());
        display
    }

    pub fn seen(&self) -> Vec<usize> {
        self.seen.lock().unwrap().clone()
    }
}

impl DisplayRefresh for ObservingDisplay {
    fn refresh(&self) {
        if let Some(provider) = self.provider.upgrade() {
            self.seen.lock().unwrap().push(provider.available_spaces());
        }
    }
}
