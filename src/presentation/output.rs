//! Output rendering for the CLI
//!
//! Human-readable lines by default, one JSON object per line with `--json`.

use std::path::Path;

use crate::application::{CarparkSnapshot, TrafficOutcome, TrafficRequest};
use crate::config::{CarparkConfig, ConfigWarning};
use crate::domain::entities::{EntryOutcome, ExitOutcome};

/// One-line human summary of a traffic decision.
pub fn describe_outcome(outcome: &TrafficOutcome) -> String {
    match outcome {
        TrafficOutcome::Entry(EntryOutcome::Admitted { plate, free_spaces, .. }) => match plate {
            Some(plate) => format!("✓ {} admitted ({} free)", plate, free_spaces),
            None => format!("✓ unplated car admitted ({} free)", free_spaces),
        },
        TrafficOutcome::Entry(EntryOutcome::RefusedFull { .. }) => {
            "✗ refused: carpark full".to_string()
        }
        TrafficOutcome::Entry(EntryOutcome::RefusedDuplicate { plate, .. }) => {
            format!("✗ refused: {} is already parked", plate)
        }
        TrafficOutcome::Exit(ExitOutcome::Departed { record, free_spaces }) => {
            format!("✓ {} left ({} free)", record.plate, free_spaces)
        }
        TrafficOutcome::Exit(ExitOutcome::DepartedAnonymous { free_spaces }) => {
            format!("✓ unplated car left ({} free)", free_spaces)
        }
        TrafficOutcome::Exit(ExitOutcome::RefusedUnknown { plate, .. }) => {
            format!("✗ refused: {} is not parked here", plate)
        }
        TrafficOutcome::Exit(ExitOutcome::Ignored { .. }) => {
            "· ignored: carpark is already empty".to_string()
        }
    }
}

pub fn outcome_json(request: &TrafficRequest, outcome: &TrafficOutcome) -> serde_json::Value {
    let event = match request {
        TrafficRequest::Arrived { .. } => "arrival",
        TrafficRequest::Left { .. } => "departure",
    };
    let mut value = serde_json::to_value(outcome).unwrap_or_else(|_| serde_json::json!({}));
    if let Some(map) = value.as_object_mut() {
        map.insert("event".to_string(), serde_json::json!(event));
    }
    value
}

pub fn snapshot_json(snapshot: &CarparkSnapshot) -> serde_json::Value {
    let mut value = serde_json::to_value(snapshot).unwrap_or_else(|_| serde_json::json!({}));
    if let Some(map) = value.as_object_mut() {
        map.insert("event".to_string(), serde_json::json!("status"));
    }
    value
}

pub fn describe_snapshot(snapshot: &CarparkSnapshot) -> String {
    let mut lines = vec![
        format!("📍 {}", snapshot.location),
        format!(
            "  Spaces: {} free of {} ({} occupied)",
            snapshot.free_spaces,
            snapshot.capacity,
            snapshot.occupied()
        ),
        format!("  Temperature: {:.1} °C", snapshot.temperature),
        format!("  Time: {}", snapshot.time_of_day()),
    ];
    if snapshot.live_records.is_empty() {
        lines.push("  No plated cars parked".to_string());
    } else {
        lines.push(format!("  Plated cars ({}):", snapshot.live_records.len()));
        for record in &snapshot.live_records {
            let vehicle = format!("{} {}", record.make, record.model);
            let vehicle = vehicle.trim();
            lines.push(format!(
                "    - {} since {}{}",
                record.plate,
                record.entry_time.format("%H:%M:%S"),
                if vehicle.is_empty() {
                    String::new()
                } else {
                    format!(" ({})", vehicle)
                }
            ));
        }
    }
    lines.join("\n")
}

pub fn describe_config(path: &Path, config: &CarparkConfig) -> String {
    [
        format!("⚙ Configuration ({})", path.display()),
        format!("  capacity: {}", config.capacity),
        format!("  location: {}", config.location),
        format!("  log_file: {}", config.log_file.display()),
        format!(
            "  temperature_interval_secs: {}",
            config.temperature_interval_secs
        ),
    ]
    .join("\n")
}

pub fn print_config_warnings(warnings: &[ConfigWarning], json: bool) {
    for warning in warnings {
        if json {
            let value = serde_json::json!({
                "event": "config_warning",
                "key": warning.key,
                "source": warning.source.display().to_string(),
                "line": warning.line,
                "message": warning.to_string(),
            });
            eprintln!("{}", value);
        } else {
            eprintln!("⚠ {}", warning);
        }
    }
}
