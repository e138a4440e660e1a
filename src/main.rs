//! SmartPark CLI - car park occupancy registry
//!
//! Usage: smartpark <COMMAND>
//!
//! Commands:
//!   run     Run the car park from the console
//!   config  Show the effective configuration

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::mpsc::{channel, Sender};
use std::sync::{Arc, Weak};
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use smartpark::application::{Registry, TemperatureFeed, TemperatureWave, TrafficFeed};
use smartpark::config::{CarparkConfig, ConfigWarning};
use smartpark::domain::ports::{CarparkDataProvider, DisplayRefresh, SensorListener};
use smartpark::infrastructure::{ConsoleDisplay, FileAuditLog};
use smartpark::presentation::output::{
    describe_config, describe_outcome, describe_snapshot, outcome_json, print_config_warnings,
    snapshot_json,
};
use smartpark::presentation::{Cli, Commands, ConfigOverrides, ConsoleCommand, HELP};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run { overrides } => cmd_run(&cli.config, &overrides, cli.json),
        Commands::Config { overrides, strict } => {
            cmd_config(&cli.config, &overrides, strict, cli.json)
        }
    }
}

/// `RUST_LOG` wins; otherwise -v/-vv/-vvv raise the level from `warn`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// File, then SMARTPARK_* variables, then command-line flags.
fn effective_config(
    path: &Path,
    overrides: &ConfigOverrides,
) -> (CarparkConfig, Vec<ConfigWarning>) {
    let (config, mut warnings) = CarparkConfig::load_with_warnings(path);
    let (config, env_warnings) = config.with_env_overrides();
    warnings.extend(env_warnings);
    (overrides.apply(config), warnings)
}

/// Like `effective_config`, but an unreadable or unparseable file is an error.
fn strict_config(
    path: &Path,
    overrides: &ConfigOverrides,
) -> Result<(CarparkConfig, Vec<ConfigWarning>)> {
    let (config, mut warnings) = CarparkConfig::load_strict(path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    let (config, env_warnings) = config.with_env_overrides();
    warnings.extend(env_warnings);
    Ok((overrides.apply(config), warnings))
}

fn cmd_config(path: &Path, overrides: &ConfigOverrides, strict: bool, json: bool) -> Result<()> {
    let (config, warnings) = if strict {
        strict_config(path, overrides)?
    } else {
        effective_config(path, overrides)
    };
    print_config_warnings(&warnings, json);
    if strict && !warnings.is_empty() {
        anyhow::bail!("{} configuration warning(s) in strict mode", warnings.len());
    }

    if json {
        println!("{}", serde_json::to_string(&config)?);
    } else {
        println!("{}", describe_config(path, &config));
    }
    Ok(())
}

enum Input {
    Line(String),
    Eof,
    Interrupt,
}

fn cmd_run(path: &Path, overrides: &ConfigOverrides, json: bool) -> Result<()> {
    let (config, warnings) = effective_config(path, overrides);
    for warning in &warnings {
        warn!(%warning, "configuration");
    }

    let audit = Arc::new(FileAuditLog::new(config.log_file.clone()));
    let registry = Arc::new(Registry::from_config(&config, audit));
    info!(
        location = %config.location,
        capacity = config.capacity.get(),
        log_file = %config.log_file.display(),
        "car park open"
    );

    if !json {
        println!("🅿 SmartPark - {}", config.location);
        println!("Capacity: {}", config.capacity);
        println!("Audit log: {}", config.log_file.display());
        println!("Type 'help' for commands, Ctrl+C to stop\n");

        let weak: Weak<Registry> = Arc::downgrade(&registry);
        let provider: Weak<dyn CarparkDataProvider> = weak;
        let display = Arc::new(ConsoleDisplay::stdout(config.location.clone(), provider));
        display.refresh();
        registry.set_display(display);
    }

    let listener: Arc<dyn SensorListener> = registry.clone();
    let temperature = TemperatureFeed::spawn(
        listener,
        TemperatureWave::new(),
        config.temperature_interval(),
    )
    .context("failed to start temperature feed")?;

    let (traffic, traffic_handle) = TrafficFeed::new(registry.clone())
        .with_observer(move |request, outcome| {
            if json {
                println!("{}", outcome_json(request, outcome));
            } else {
                println!("{}", describe_outcome(outcome));
            }
        })
        .spawn()
        .context("failed to start traffic feed")?;

    let (tx, rx) = channel();
    let interrupt_tx = tx.clone();
    ctrlc::set_handler(move || {
        let _ = interrupt_tx.send(Input::Interrupt);
    })
    .context("failed to set Ctrl+C handler")?;
    spawn_stdin_reader(tx).context("failed to start console reader")?;

    let interactive = !json && io::stdin().is_terminal();

    loop {
        if interactive {
            print!("> ");
            let _ = io::stdout().flush();
        }

        let line = match rx.recv() {
            Ok(Input::Line(line)) => line,
            Ok(Input::Eof) | Ok(Input::Interrupt) | Err(_) => break,
        };

        match ConsoleCommand::parse(&line) {
            None => {}
            Some(Err(err)) => eprintln!("✗ {}", err),
            Some(Ok(ConsoleCommand::Traffic(request))) => {
                if !traffic.send(request) {
                    eprintln!("✗ traffic feed has stopped");
                    break;
                }
            }
            Some(Ok(ConsoleCommand::Temperature(reading))) => registry.record_temperature(reading),
            Some(Ok(ConsoleCommand::Status)) => {
                let snapshot = registry.snapshot();
                if json {
                    println!("{}", snapshot_json(&snapshot));
                } else {
                    println!("{}", describe_snapshot(&snapshot));
                }
            }
            Some(Ok(ConsoleCommand::Help)) => println!("{}", HELP),
            Some(Ok(ConsoleCommand::Quit)) => break,
        }
    }

    if !json {
        println!("\n👋 Shutting down...");
    }
    temperature.stop();
    traffic_handle.stop();
    registry.clear_display();
    info!(free_spaces = registry.free_spaces(), "car park closed");

    Ok(())
}

fn spawn_stdin_reader(tx: Sender<Input>) -> io::Result<()> {
    thread::Builder::new()
        .name("console-input".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(Input::Line(line)).is_err() {
                    return;
                }
            }
            let _ = tx.send(Input::Eof);
        })?;
    Ok(())
}
