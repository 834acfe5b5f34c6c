//! Webhook event supplied by the Actions runner.

use std::fs;
use std::path::PathBuf;

use crate::adapters::RunnerEnv;
use crate::domain::{AppError, PayloadData, WebhookEvent};
use crate::ports::EventSource;

/// Event named by `GITHUB_EVENT_NAME` with its payload at `GITHUB_EVENT_PATH`.
#[derive(Debug, Clone)]
pub struct ActionsEventSource {
    event_name: String,
    event_path: PathBuf,
}

impl ActionsEventSource {
    pub fn new(event_name: impl Into<String>, event_path: impl Into<PathBuf>) -> Self {
        Self { event_name: event_name.into(), event_path: event_path.into() }
    }

    /// Resolve the event from explicit overrides, falling back to the runner variables.
    pub fn resolve(
        env: &RunnerEnv,
        event_name: Option<String>,
        event_path: Option<PathBuf>,
    ) -> Result<Self, AppError> {
        let event_name = event_name
            .or_else(|| env.get("GITHUB_EVENT_NAME").map(str::to_string))
            .ok_or_else(|| {
                AppError::EventContext(
                    "GITHUB_EVENT_NAME is not set; pass --event-name outside of Actions".into(),
                )
            })?;
        let event_path = event_path
            .or_else(|| env.get("GITHUB_EVENT_PATH").map(PathBuf::from))
            .ok_or_else(|| {
                AppError::EventContext(
                    "GITHUB_EVENT_PATH is not set; pass --event-path outside of Actions".into(),
                )
            })?;

        Ok(Self::new(event_name, event_path))
    }
}

impl EventSource for ActionsEventSource {
    fn current_event(&self) -> Result<WebhookEvent, AppError> {
        let raw = fs::read_to_string(&self.event_path).map_err(|e| {
            AppError::EventContext(format!(
                "Failed to read event payload {}: {}",
                self.event_path.display(),
                e
            ))
        })?;
        let payload = PayloadData::from_json(&raw)?;
        Ok(WebhookEvent::new(&self.event_name, payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EventKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn payload_file(body: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_event_from_runner_variables() {
        let file = payload_file(r#"{"action":"edited","issue":{"number":5}}"#);
        let env = RunnerEnv::from_pairs([
            ("GITHUB_EVENT_NAME", "issues".to_string()),
            ("GITHUB_EVENT_PATH", file.path().display().to_string()),
        ]);

        let event = ActionsEventSource::resolve(&env, None, None).unwrap().current_event().unwrap();

        assert_eq!(event.kind, EventKind::Issues);
        assert_eq!(event.action, "edited");
        assert_eq!(event.payload.issue.map(|issue| issue.number), Some(5));
    }

    #[test]
    fn overrides_take_precedence() {
        let file = payload_file(r#"{"action":"moved"}"#);
        let env = RunnerEnv::from_pairs([
            ("GITHUB_EVENT_NAME", "issues"),
            ("GITHUB_EVENT_PATH", "/nonexistent/event.json"),
        ]);

        let source = ActionsEventSource::resolve(
            &env,
            Some("project_card".to_string()),
            Some(file.path().to_path_buf()),
        )
        .unwrap();
        let event = source.current_event().unwrap();

        assert_eq!(event.kind, EventKind::ProjectCard);
        assert_eq!(event.action, "moved");
    }

    #[test]
    fn missing_event_name_is_reported() {
        let err = ActionsEventSource::resolve(&RunnerEnv::default(), None, None).unwrap_err();
        assert!(matches!(err, AppError::EventContext(msg) if msg.contains("GITHUB_EVENT_NAME")));
    }

    #[test]
    fn unreadable_payload_is_reported() {
        let source = ActionsEventSource::new("issues", "/nonexistent/event.json");
        let err = source.current_event().unwrap_err();
        assert!(matches!(err, AppError::EventContext(_)));
    }

    #[test]
    fn malformed_payload_is_a_parse_error() {
        let file = payload_file("not json");
        let source = ActionsEventSource::new("issues", file.path());
        assert!(matches!(source.current_event(), Err(AppError::ParseError { .. })));
    }
}
