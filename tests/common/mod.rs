//! Shared integration-test harness for running the `arc-diem-config`
//! binary and locating fixtures.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

/// Helpers for invoking the built binary.
pub struct ArcDiemProcess;

impl ArcDiemProcess {
    /// Runs the binary with `args` and waits for it to exit.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_command(args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_arc-diem-config"))
            .args(args)
            .env_remove("ARC_DIEM_LOG_LEVEL")
            .env_remove("ARC_DIEM_FORM")
            .env("NO_COLOR", "1")
            .output()
            .expect("failed to run arc-diem-config")
    }

    /// Absolute path to a file under `tests/fixtures`.
    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    /// Stdout as a string.
    pub fn stdout(output: &Output) -> String {
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Stderr as a string.
    pub fn stderr(output: &Output) -> String {
        String::from_utf8_lossy(&output.stderr).into_owned()
    }
}
