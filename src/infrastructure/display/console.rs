//! Console display
//!
//! Terminal stand-in for the car park's sign board. On every refresh it
//! reads the provider it watches and prints the configured fields.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError, Weak};

use crate::domain::ports::{CarparkDataProvider, DisplayRefresh};

const SEPARATOR: &str = " : ";
const PLACEHOLDER: &str = " - - ";

/// A single line on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayField {
    AvailableSpaces,
    Temperature,
    CurrentTime,
}

impl DisplayField {
    pub const ALL: [DisplayField; 3] = [
        DisplayField::AvailableSpaces,
        DisplayField::Temperature,
        DisplayField::CurrentTime,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DisplayField::AvailableSpaces => "Available spaces",
            DisplayField::Temperature => "Temperature",
            DisplayField::CurrentTime => "Current time",
        }
    }

    fn value(&self, provider: &dyn CarparkDataProvider) -> String {
        match self {
            DisplayField::AvailableSpaces => provider.available_spaces().to_string(),
            DisplayField::Temperature => format!("{:.1} °C", provider.temperature()),
            DisplayField::CurrentTime => provider.current_time(),
        }
    }
}

/// Render the board; fields show a placeholder when there is no provider.
pub fn render_board(
    title: &str,
    fields: &[DisplayField],
    provider: Option<&dyn CarparkDataProvider>,
) -> String {
    let width = fields.iter().map(|f| f.label().len()).max().unwrap_or(0);
    let mut lines = Vec::with_capacity(fields.len() + 1);
    lines.push(format!("== {} ==", title));
    for field in fields {
        let value = match provider {
            Some(provider) => field.value(provider),
            None => PLACEHOLDER.to_string(),
        };
        lines.push(format!("{:<width$}{}{}", field.label(), SEPARATOR, value));
    }
    lines.join("\n")
}

pub struct ConsoleDisplay {
    title: String,
    fields: Vec<DisplayField>,
    provider: Weak<dyn CarparkDataProvider>,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleDisplay {
    /// Display writing to stdout.
    pub fn stdout(title: impl Into<String>, provider: Weak<dyn CarparkDataProvider>) -> Self {
        Self::with_writer(title, provider, io::stdout())
    }

    /// Display writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(
        title: impl Into<String>,
        provider: Weak<dyn CarparkDataProvider>,
        writer: W,
    ) -> Self {
        Self {
            title: title.into(),
            fields: DisplayField::ALL.to_vec(),
            provider,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    pub fn with_fields(mut self, fields: &[DisplayField]) -> Self {
        self.fields = fields.to_vec();
        self
    }

    pub fn render(&self) -> String {
        let provider = self.provider.upgrade();
        render_board(&self.title, &self.fields, provider.as_deref())
    }
}

impl DisplayRefresh for ConsoleDisplay {
    fn refresh(&self) {
        let board = self.render();
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writeln!(writer, "{}\n", board);
        let _ = writer.flush();
    }
}
