//! Scenario: An Operator Session at the Console
//!
//! Journey: The attendant starts `smartpark run`, types arrivals and
//! departures, and quits.
//!
//! Success Criteria:
//! - Each command gets one outcome line on stdout
//! - The audit log in the working directory records every decision
//! - Config problems are reported but never stop the run

use crate::common::*;

const SESSION: &str = "in A Toyota Yaris\nin B\nin C\nout A\nin C\nout GHOST\nquit\n";

#[test]
fn scenario_console_session_with_json_output() {
    let env = TestEnv::new();
    env.write_config("capacity = 2\nlocation = \"Level 1\"\ntemperature_interval_secs = 3600\n");

    let result = env.run(&["--json", "run"], SESSION);
    assert!(result.success, "run failed: {}", result.stderr);

    let free: Vec<_> = result
        .json_lines()
        .into_iter()
        .filter(|line| line["event"] == "arrival" || line["event"] == "departure")
        .map(|line| line["free_spaces"].as_u64().unwrap())
        .collect();
    assert_eq!(free, vec![1, 0, 0, 1, 0, 0]);

    let refused = result.events("arrival");
    assert_eq!(refused[2]["outcome"], "refused_full");

    let log = env.read_log("carpark_log.txt");
    assert_eq!(log.lines().count(), 6);
    assert!(log.contains("ENTRY DENIED: Carpark full. Car C refused."));
    assert!(log.contains("EXIT DENIED: Car GHOST not found in carpark."));
}

#[test]
fn scenario_flags_and_env_override_config_file() {
    let env = TestEnv::new();
    env.write_config("capacity = 100\nlocation = \"Level 1\"\n");

    let result = env.run_with_env(
        &["--json", "config", "--location", "Rooftop"],
        "",
        &[("SMARTPARK_CAPACITY", "7"), ("SMARTPARK_LOCATION", "Basement")],
    );
    assert!(result.success, "config failed: {}", result.stderr);

    let config = &result.json_lines()[0];
    assert_eq!(config["capacity"], 7);
    assert_eq!(config["location"], "Rooftop");
    assert_eq!(config["log_file"], "carpark_log.txt");
}

#[test]
fn scenario_bad_config_warns_and_falls_back() {
    let env = TestEnv::new();
    env.write_config("capacty = 5\ncapacity = \"lots\"\n");

    let result = env.run(&["config"], "");
    assert!(result.success, "config failed: {}", result.stderr);
    assert!(result.stderr.contains("did you mean 'capacity'?"), "stderr: {}", result.stderr);
    assert!(result.stderr.contains("invalid value"), "stderr: {}", result.stderr);
    assert!(result.stdout.contains("capacity: 1000"), "stdout: {}", result.stdout);
}

#[test]
fn scenario_end_of_input_drains_queued_traffic() {
    let env = TestEnv::new();

    let result = env.run(
        &["--json", "run", "--capacity", "4", "--log-file", "logs/lot.txt", "--interval", "3600"],
        "in XYZ789 Honda Jazz\nin\n",
    );
    assert!(result.success, "run failed: {}", result.stderr);
    assert_eq!(result.events("arrival").len(), 2);

    let log = env.read_log("logs/lot.txt");
    assert!(log.contains("ENTRY: Car XYZ789 entered at"));
    assert!(log.contains("ENTRY: Car with no license plate recorded entered."));
}

#[test]
fn scenario_status_and_bad_commands() {
    let env = TestEnv::new();

    let result = env.run(
        &["--json", "run", "--capacity", "3", "--location", "Kiosk", "--interval", "3600"],
        "status\nfly away\ntemp warm\nquit\n",
    );
    assert!(result.success, "run failed: {}", result.stderr);

    let status = result.events("status");
    assert_eq!(status.len(), 1);
    assert_eq!(status[0]["location"], "Kiosk");
    assert_eq!(status[0]["free_spaces"], 3);
    assert_eq!(status[0]["is_empty"], true);

    assert!(result.stderr.contains("unknown command 'fly'"));
    assert!(result.stderr.contains("'temp' needs a numeric reading"));
}

#[test]
fn scenario_strict_config_check_fails_on_warnings() {
    let env = TestEnv::new();
    env.write_config("capacity = 20\nlocaton = \"Level 2\"\n");

    let result = env.run(&["config", "--strict"], "");
    assert!(!result.success, "strict check passed: {}", result.stdout);
    assert!(result.stderr.contains("did you mean 'location'?"), "stderr: {}", result.stderr);
    assert!(result.stderr.contains("strict mode"), "stderr: {}", result.stderr);

    env.write_config("capacity = 20\nlocation = \"Level 2\"\n");
    let result = env.run(&["config", "--strict"], "");
    assert!(result.success, "strict check failed: {}", result.stderr);
    assert!(result.stdout.contains("capacity: 20"));
}
