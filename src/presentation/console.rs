//! Operator console commands
//!
//! One command per stdin line:
//!
//! ```text
//! in [PLATE [MAKE [MODEL]]]   car arrives (no plate = anonymous)
//! out [PLATE]                 car leaves
//! temp READING                manual temperature sample
//! status                      print the current snapshot
//! help                        list commands
//! quit                        stop
//! ```

use crate::application::TrafficRequest;

#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    Traffic(TrafficRequest),
    Temperature(f64),
    Status,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConsoleParseError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("'temp' needs a numeric reading, got '{0}'")]
    BadReading(String),
}

pub const HELP: &str = "\
commands:
  in [PLATE [MAKE [MODEL]]]   car arrives
  out [PLATE]                 car leaves
  temp READING                record a temperature
  status                      show occupancy
  help                        list commands
  quit                        stop";

impl ConsoleCommand {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Result<Self, ConsoleParseError>> {
        let mut words = line.split_whitespace();
        let verb = words.next()?;

        let command = match verb.to_ascii_lowercase().as_str() {
            "in" | "arrive" | "enter" => {
                let plate = words.next().map(str::to_string);
                let make = words.next().unwrap_or_default().to_string();
                let model = words.collect::<Vec<_>>().join(" ");
                Ok(ConsoleCommand::Traffic(TrafficRequest::Arrived { plate, make, model }))
            }
            "out" | "leave" | "exit" => Ok(ConsoleCommand::Traffic(TrafficRequest::Left {
                plate: words.next().map(str::to_string),
            })),
            "temp" | "temperature" => {
                let raw = words.next().unwrap_or_default();
                raw.parse::<f64>()
                    .map(ConsoleCommand::Temperature)
                    .map_err(|_| ConsoleParseError::BadReading(raw.to_string()))
            }
            "status" | "s" => Ok(ConsoleCommand::Status),
            "help" | "?" => Ok(ConsoleCommand::Help),
            "quit" | "q" => Ok(ConsoleCommand::Quit),
            other => Err(ConsoleParseError::Unknown(other.to_string())),
        };
        Some(command)
    }
}
