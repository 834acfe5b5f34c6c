//! Webhook event model.
//!
//! Only the payload fields the label policy reads are modeled. Every field is
//! optional; an explicit JSON `null` reads the same as an absent key.

use std::fmt;

use serde::Deserialize;

use crate::domain::AppError;

/// Trigger type of the webhook event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Issues,
    ProjectCard,
    /// Any other trigger, keeping the runner's name for reporting.
    Other(String),
}

impl EventKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "issues" => EventKind::Issues,
            "project_card" => EventKind::ProjectCard,
            other => EventKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EventKind::Issues => "issues",
            EventKind::ProjectCard => "project_card",
            EventKind::Other(name) => name,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label reference carried by `labeled` / `unlabeled` payloads.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LabelRef {
    pub name: String,
}

/// Issue reference carried by `issues` payloads.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IssueRef {
    pub number: u64,
}

/// Project card reference carried by `project_card` payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectCardRef {
    #[serde(default)]
    pub content_url: Option<String>,
}

/// Payload fields the policy inspects.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PayloadData {
    #[serde(default)]
    pub action: Option<String>,
    /// Opaque; only its presence matters.
    #[serde(default)]
    pub changes: Option<serde_json::Value>,
    #[serde(default)]
    pub label: Option<LabelRef>,
    #[serde(default)]
    pub issue: Option<IssueRef>,
    #[serde(default)]
    pub project_card: Option<ProjectCardRef>,
}

impl PayloadData {
    /// Parse a raw webhook payload document.
    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        serde_json::from_str(raw).map_err(|e| AppError::ParseError {
            what: "webhook event payload".to_string(),
            details: e.to_string(),
        })
    }
}

/// One webhook delivery, built once per invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookEvent {
    pub kind: EventKind,
    pub action: String,
    pub payload: PayloadData,
}

impl WebhookEvent {
    /// Build an event from the runner's event name and the payload document.
    ///
    /// The action name is read from the payload; a payload without one yields
    /// an empty action, which the policy treats as unsupported.
    pub fn new(event_name: &str, payload: PayloadData) -> Self {
        let action = payload.action.clone().unwrap_or_default();
        Self { kind: EventKind::from_name(event_name), action, payload }
    }

    /// `<event>.<action>` form used in log lines.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.kind, self.action)
    }
}
