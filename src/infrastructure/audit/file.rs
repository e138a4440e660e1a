//! File Audit Log
//!
//! Appends one line per event to a UTF-8 text file. The file is opened,
//! locked, appended and closed on every write so that several processes (or
//! an operator's `tail -f`) can share it without a long-lived handle.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use fs2::FileExt;

use crate::domain::ports::{format_audit_line, AuditLog};
use crate::error::{SmartparkError, SmartparkResult};

pub struct FileAuditLog {
    path: PathBuf,
}

impl FileAuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_line(&self, line: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.lock_exclusive()?;

        let result = writeln!(file, "{}", line).and_then(|_| file.flush());

        let _ = file.unlock();
        result
    }
}

impl AuditLog for FileAuditLog {
    fn append(&self, at: DateTime<Local>, message: &str) -> SmartparkResult<()> {
        self.write_line(&format_audit_line(at, message))
            .map_err(|source| SmartparkError::LogWrite {
                path: self.path.clone(),
                source,
            })
    }
}
