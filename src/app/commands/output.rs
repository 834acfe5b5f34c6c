//! Canonical command output.
//!
//! Writes compact single-line JSON to stdout on success, and optionally
//! appends `json=<...>` to `GITHUB_OUTPUT` when set.

use std::io::Write;

use serde::Serialize;

use crate::adapters::RunnerEnv;
use crate::domain::{AppError, SkipReason, WebhookEvent};

/// What the run did with the tracking label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The tracking label was added.
    Applied,
    /// The event passed every pure check; qualification was not attempted.
    Eligible,
    Skipped,
}

/// Output of `sync` and `evaluate`.
#[derive(Debug, Clone, Serialize)]
pub struct LabelOutput {
    pub schema_version: u32,
    pub event: String,
    pub action: String,
    pub outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl LabelOutput {
    fn base(event: &WebhookEvent, outcome: Outcome) -> Self {
        Self {
            schema_version: 1,
            event: event.kind.to_string(),
            action: event.action.clone(),
            outcome,
            reason_code: None,
            skipped_reason: None,
            target: None,
            label: None,
        }
    }

    pub fn skipped(event: &WebhookEvent, reason: &SkipReason) -> Self {
        Self {
            reason_code: Some(reason.code().to_string()),
            skipped_reason: Some(reason.to_string()),
            ..Self::base(event, Outcome::Skipped)
        }
    }

    pub fn skipped_for_issue(event: &WebhookEvent, reason: &SkipReason, issue_number: u64) -> Self {
        Self { target: Some(issue_number), ..Self::skipped(event, reason) }
    }

    pub fn eligible(event: &WebhookEvent, issue_number: u64, label: &str) -> Self {
        Self {
            target: Some(issue_number),
            label: Some(label.to_string()),
            ..Self::base(event, Outcome::Eligible)
        }
    }

    pub fn applied(event: &WebhookEvent, issue_number: u64, label: &str) -> Self {
        Self {
            target: Some(issue_number),
            label: Some(label.to_string()),
            ..Self::base(event, Outcome::Applied)
        }
    }
}

/// Write command output in canonical format.
///
/// - Writes compact single-line JSON to stdout.
/// - Appends `json=<same JSON>` to the `GITHUB_OUTPUT` file if the runner set one.
///
/// # Errors
/// Returns an error if JSON serialization fails or file I/O fails.
pub fn write_workflow_output<T: Serialize>(output: &T, env: &RunnerEnv) -> Result<(), AppError> {
    let json = render(output)?;

    println!("{}", json);

    if let Some(path) = env.get("GITHUB_OUTPUT") {
        append_github_output(path, &json)?;
    }

    Ok(())
}

fn render<T: Serialize>(output: &T) -> Result<String, AppError> {
    let json = serde_json::to_string(output)
        .map_err(|e| AppError::InternalError(format!("Failed to serialize output: {}", e)))?;
    debug_assert!(!json.contains('\n'), "workflow output JSON must be single-line");
    Ok(json)
}

fn append_github_output(path: &str, json: &str) -> Result<(), AppError> {
    let mut file = std::fs::OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "json={}", json)?;
    Ok(())
}
