//! Clock port - source of "now" for entry/exit stamps and audit lines

use chrono::{DateTime, Local};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}
