//! AuditLog port
//!
//! Append-only sink for timestamped audit lines. Implementations add the
//! `[YYYY-MM-DD HH:MM:SS]` prefix themselves.

use chrono::{DateTime, Local};

use crate::error::SmartparkResult;

/// Timestamp prefix format for audit lines.
pub const AUDIT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a full audit line (without trailing newline).
pub fn format_audit_line(at: DateTime<Local>, message: &str) -> String {
    format!("[{}] {}", at.format(AUDIT_TIMESTAMP_FORMAT), message)
}

pub trait AuditLog: Send + Sync {
    /// Append one message stamped with `at`.
    ///
    /// Callers treat failures as best-effort: they are reported, never
    /// allowed to undo the decision being logged.
    fn append(&self, at: DateTime<Local>, message: &str) -> SmartparkResult<()>;
}
