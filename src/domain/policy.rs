//! Label policy: decides from a webhook event whether the tracking label
//! should be applied and to which issue.
//!
//! Everything here is pure. The only input that needs network access, the
//! issue's current labels, is passed to [`qualify`] by the caller.

use std::collections::BTreeSet;

use crate::domain::{
    Decision, EventKind, FailReason, PayloadData, PolicyConfig, SkipReason, WebhookEvent,
};

const ISSUE_ACTIONS: &[&str] = &["edited", "labeled", "unlabeled"];
const PROJECT_CARD_ACTIONS: &[&str] = &["moved", "deleted"];

/// Classify an event. Rules are applied in order; the first match wins.
pub fn evaluate(event: &WebhookEvent, config: &PolicyConfig) -> Decision {
    if let Some(reason) = screen(event, config) {
        return Decision::Skip(reason);
    }

    match resolve_issue_number(&event.payload) {
        Ok(number) => Decision::Apply(number),
        Err(reason) => Decision::Fail(reason),
    }
}

/// The skip rules of [`evaluate`]: trigger, action, and payload guards.
///
/// `None` means the event passed and only issue resolution remains.
pub fn screen(event: &WebhookEvent, config: &PolicyConfig) -> Option<SkipReason> {
    let eligible_actions = match event.kind {
        EventKind::Issues => ISSUE_ACTIONS,
        EventKind::ProjectCard => PROJECT_CARD_ACTIONS,
        EventKind::Other(_) => return Some(SkipReason::UnsupportedTrigger),
    };
    if !eligible_actions.contains(&event.action.as_str()) {
        return Some(SkipReason::UnsupportedAction);
    }

    guard_skip(&event.action, &event.payload, config)
}

fn guard_skip(action: &str, payload: &PayloadData, config: &PolicyConfig) -> Option<SkipReason> {
    if action == "moved" && payload.changes.is_none() {
        return Some(SkipReason::CardMovedWithinColumn);
    }

    let label = payload.label.as_ref().map(|label| label.name.as_str());
    match (action, label) {
        ("unlabeled", None) => Some(SkipReason::LabelDeleted),
        ("unlabeled", Some(name)) if name == config.tracking_label() => {
            Some(SkipReason::TrackingLabelRemoved { label: name.to_string() })
        }
        ("labeled" | "unlabeled", Some(name)) if config.is_qualifying(name) => {
            Some(SkipReason::QualifyingLabelToggled {
                label: name.to_string(),
                applied: action == "labeled",
            })
        }
        _ => None,
    }
}

/// Map the payload to the issue it concerns.
///
/// An embedded issue wins; otherwise the trailing segment of the project
/// card's `content_url` must be a positive issue number.
pub fn resolve_issue_number(payload: &PayloadData) -> Result<u64, FailReason> {
    if let Some(issue) = &payload.issue {
        return Ok(issue.number);
    }

    payload
        .project_card
        .as_ref()
        .and_then(|card| card.content_url.as_deref())
        .filter(|url| !url.is_empty())
        .and_then(|url| url.rsplit('/').next())
        .and_then(|segment| segment.parse::<u64>().ok())
        .filter(|number| *number > 0)
        .ok_or(FailReason::IssueNumberUnresolved)
}

/// Confirm the issue carries at least one qualifying label.
pub fn qualify(issue_number: u64, labels: &BTreeSet<String>, config: &PolicyConfig) -> Decision {
    if labels.iter().any(|label| config.is_qualifying(label)) {
        Decision::Apply(issue_number)
    } else {
        Decision::Skip(SkipReason::NoQualifyingLabel)
    }
}
