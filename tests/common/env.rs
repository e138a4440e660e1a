//! Test environment for running the `smartpark` binary in isolation.
//!
//! Each `TestEnv` owns a temp directory used as the working directory, so the
//! default config file and audit log never touch the repository.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Result of running a SmartPark CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Stdout lines parsed as JSON, skipping anything that is not.
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect()
    }

    /// JSON lines whose `event` field matches.
    pub fn events(&self, event: &str) -> Vec<serde_json::Value> {
        self.json_lines()
            .into_iter()
            .filter(|value| value["event"] == event)
            .collect()
    }
}

pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_config(&self, content: &str) {
        std::fs::write(self.path("carpark_config.toml"), content).expect("Failed to write config");
    }

    pub fn read_log(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative)).unwrap_or_default()
    }

    /// Run smartpark with `stdin` piped in. SMARTPARK_* variables from the
    /// outer environment are cleared.
    pub fn run(&self, args: &[&str], stdin: &str) -> TestResult {
        self.run_with_env(args, stdin, &[])
    }

    pub fn run_with_env(
        &self,
        args: &[&str],
        stdin: &str,
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_smartpark"));
        cmd.current_dir(self.root())
            .args(args)
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        for var in [
            "SMARTPARK_CAPACITY",
            "SMARTPARK_LOCATION",
            "SMARTPARK_LOG_FILE",
            "SMARTPARK_TEMPERATURE_INTERVAL_SECS",
        ] {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let mut child = cmd.spawn().expect("Failed to execute smartpark");
        child
            .stdin
            .take()
            .expect("stdin piped")
            .write_all(stdin.as_bytes())
            .expect("Failed to write stdin");
        let output = child.wait_with_output().expect("Failed to wait for smartpark");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
