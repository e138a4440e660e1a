//! In-memory audit log, for tests and for embedding without a file.

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Local};

use crate::domain::ports::{format_audit_line, AuditLog};
use crate::error::SmartparkResult;

#[derive(Default)]
pub struct MemoryAuditLog {
    lines: Mutex<Vec<String>>,
}

impl MemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full lines, timestamp prefix included.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Lines with the `[timestamp] ` prefix stripped.
    pub fn messages(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .map(|line| match line.split_once("] ") {
                Some((_, message)) => message.to_string(),
                None => line,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AuditLog for MemoryAuditLog {
    fn append(&self, at: DateTime<Local>, message: &str) -> SmartparkResult<()> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(format_audit_line(at, message));
        Ok(())
    }
}
