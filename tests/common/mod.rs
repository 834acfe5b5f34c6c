//! Shared testing utilities for label-tracker CLI tests.

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Runner variables a developer or CI shell may already export.
const RUNNER_VARS: &[&str] = &[
    "GITHUB_EVENT_NAME",
    "GITHUB_EVENT_PATH",
    "GITHUB_OUTPUT",
    "GITHUB_REPOSITORY",
    "GITHUB_API_URL",
    "GITHUB_TOKEN",
    "GH_TOKEN",
    "INPUT_CHANGED-LABEL",
    "INPUT_QUALIFYING-LABELS",
    "INPUT_REPO-TOKEN",
    "LABEL_TRACKER_LOG",
];

/// Testing harness emulating one Actions step.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        Self { root: TempDir::new().expect("Failed to create temp directory for tests") }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Path of the event payload file.
    pub fn event_path(&self) -> PathBuf {
        self.root.path().join("event.json")
    }

    /// Path of the step output file.
    pub fn output_path(&self) -> PathBuf {
        self.root.path().join("github_output")
    }

    /// Write the webhook payload for the step.
    pub fn write_event(&self, payload: &str) {
        self.root.child("event.json").write_str(payload).expect("Failed to write event payload");
    }

    /// Write a TOML config file and return its path.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        let config = self.root.child("label-tracker.toml");
        config.write_str(contents).expect("Failed to write config file");
        config.path().to_path_buf()
    }

    /// Build a command for the compiled binary with a clean runner environment.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("label-tracker").expect("Failed to locate binary");
        cmd.current_dir(self.root());
        for var in RUNNER_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Command configured like an Actions step triggered by `event_name`.
    pub fn step(&self, subcommand: &str, event_name: &str) -> Command {
        let mut cmd = self.cli();
        cmd.arg(subcommand)
            .env("GITHUB_EVENT_NAME", event_name)
            .env("GITHUB_EVENT_PATH", self.event_path())
            .env("GITHUB_OUTPUT", self.output_path())
            .env("INPUT_CHANGED-LABEL", "needs-sync")
            .env("INPUT_QUALIFYING-LABELS", "tracked");
        cmd
    }

    /// JSON recorded in the step output file.
    pub fn step_output(&self) -> serde_json::Value {
        let contents = fs::read_to_string(self.output_path()).expect("step output missing");
        let line = contents.lines().last().expect("step output empty");
        let json = line.strip_prefix("json=").expect("step output should start with json=");
        serde_json::from_str(json).expect("step output should be JSON")
    }
}
