//! `sync` command implementation.
//!
//! Runs the label policy for one event and, when the target issue carries a
//! qualifying label, adds the tracking label to it.

use tracing::info;

use crate::app::commands::{LabelOutput, report_skip};
use crate::domain::{
    AppError, Decision, PolicyConfig, WebhookEvent, qualify, resolve_issue_number, screen,
};
use crate::ports::IssueLabelClient;

/// Execute `sync`.
///
/// `connect` is only called once the event has passed the policy and
/// resolved to an issue, so skipped events need no credentials.
pub fn execute<C, F>(
    event: &WebhookEvent,
    config: &PolicyConfig,
    connect: F,
) -> Result<LabelOutput, AppError>
where
    C: IssueLabelClient,
    F: FnOnce() -> Result<C, AppError>,
{
    if let Some(reason) = screen(event, config) {
        report_skip(&reason);
        return Ok(LabelOutput::skipped(event, &reason));
    }
    info!("A '{}' event action has been triggered.", event.qualified_name());

    let issue_number = resolve_issue_number(&event.payload)?;
    let client = connect()?;

    let labels = client.list_labels(issue_number)?;
    match qualify(issue_number, &labels, config) {
        Decision::Apply(issue_number) => {
            info!(
                "One or more of the '{}' label(s) are on issue #{}.",
                config.qualifying_display(),
                issue_number
            );
            client.add_label(issue_number, config.tracking_label())?;
            info!(
                "The '{}' label was applied to issue #{}.",
                config.tracking_label(),
                issue_number
            );
            Ok(LabelOutput::applied(event, issue_number, config.tracking_label()))
        }
        Decision::Skip(reason) => {
            report_skip(&reason);
            Ok(LabelOutput::skipped_for_issue(event, &reason, issue_number))
        }
        Decision::Fail(reason) => Err(reason.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::commands::Outcome;
    use crate::testing::{EventBuilder, FakeIssueLabels};

    fn config() -> PolicyConfig {
        PolicyConfig::new("needs-sync", "tracked").unwrap()
    }

    #[test]
    fn applies_tracking_label_to_qualifying_issue() {
        let gh = FakeIssueLabels::new().with_issue(5, &["tracked", "bug"]);
        let event = EventBuilder::issues("edited").issue(5).build();

        let out = execute(&event, &config(), || Ok(&gh)).unwrap();

        assert_eq!(out.outcome, Outcome::Applied);
        assert_eq!(out.target, Some(5));
        assert_eq!(out.label.as_deref(), Some("needs-sync"));
        assert_eq!(*gh.listed.lock().unwrap(), vec![5]);
        assert_eq!(*gh.applied_labels.lock().unwrap(), vec![(5, "needs-sync".to_string())]);
    }

    #[test]
    fn any_qualifying_label_is_enough() {
        let config = PolicyConfig::new("needs-sync", "approved,ready").unwrap();
        let gh = FakeIssueLabels::new().with_issue(8, &["bug", "ready"]);
        let event = EventBuilder::issues("edited").issue(8).build();

        execute(&event, &config, || Ok(&gh)).unwrap();

        assert_eq!(gh.applied_labels.lock().unwrap().len(), 1);
    }

    #[test]
    fn skips_issue_without_qualifying_label() {
        let gh = FakeIssueLabels::new().with_issue(5, &["bug"]);
        let event = EventBuilder::issues("edited").issue(5).build();

        let out = execute(&event, &config(), || Ok(&gh)).unwrap();

        assert_eq!(out.outcome, Outcome::Skipped);
        assert_eq!(out.reason_code.as_deref(), Some("no_qualifying_label"));
        assert_eq!(out.target, Some(5));
        assert!(gh.applied_labels.lock().unwrap().is_empty());
    }

    #[test]
    fn tracking_label_already_present_is_not_an_error() {
        let gh = FakeIssueLabels::new().with_issue(5, &["tracked", "needs-sync"]);
        let event = EventBuilder::issues("edited").issue(5).build();

        let out = execute(&event, &config(), || Ok(&gh)).unwrap();

        assert_eq!(out.outcome, Outcome::Applied);
        assert_eq!(gh.applied_labels.lock().unwrap().len(), 1);
    }

    #[test]
    fn policy_skips_make_no_api_calls() {
        let gh = FakeIssueLabels::new().with_issue(5, &["tracked"]);
        let events = [
            EventBuilder::new("push", "edited").issue(5).build(),
            EventBuilder::issues("opened").issue(5).build(),
            EventBuilder::project_card("moved").card_url("https://x/issues/5").build(),
            EventBuilder::issues("unlabeled").issue(5).build(),
            EventBuilder::issues("unlabeled").issue(5).label("needs-sync").build(),
            EventBuilder::issues("labeled").issue(5).label("tracked").build(),
        ];

        for event in &events {
            let out = execute(event, &config(), || Ok(&gh)).unwrap();
            assert_eq!(out.outcome, Outcome::Skipped, "{}", event.qualified_name());
        }

        assert!(gh.listed.lock().unwrap().is_empty());
        assert!(gh.applied_labels.lock().unwrap().is_empty());
    }

    #[test]
    fn moved_card_resolves_issue_from_content_url() {
        let gh = FakeIssueLabels::new().with_issue(77, &["tracked"]);
        let event = EventBuilder::project_card("moved")
            .changes()
            .card_url("https://api.github.com/repos/o/r/issues/77")
            .build();

        let out = execute(&event, &config(), || Ok(&gh)).unwrap();

        assert_eq!(out.target, Some(77));
        assert_eq!(*gh.applied_labels.lock().unwrap(), vec![(77, "needs-sync".to_string())]);
    }

    #[test]
    fn unresolvable_issue_fails_the_run() {
        let gh = FakeIssueLabels::new();
        let event = EventBuilder::project_card("deleted").card().build();

        let err = execute(&event, &config(), || Ok(&gh)).unwrap_err();

        assert!(matches!(err, AppError::IssueNumberUnresolved));
        assert!(gh.listed.lock().unwrap().is_empty());
    }

    #[test]
    fn skipped_events_never_connect() {
        let event = EventBuilder::new("pull_request", "opened").build();

        let out = execute(&event, &config(), || -> Result<&FakeIssueLabels, AppError> {
            Err(AppError::config_error("No GitHub token"))
        })
        .unwrap();

        assert_eq!(out.reason_code.as_deref(), Some("unsupported_trigger"));
    }

    #[test]
    fn eligible_event_surfaces_connect_failure() {
        let event = EventBuilder::issues("edited").issue(5).build();

        let err = execute(&event, &config(), || -> Result<&FakeIssueLabels, AppError> {
            Err(AppError::config_error("No GitHub token"))
        })
        .unwrap_err();

        assert!(err.to_string().contains("No GitHub token"));
    }

    #[test]
    fn list_failure_propagates_without_adding() {
        let gh = FakeIssueLabels::failing(403, "Resource not accessible by integration");
        let event = EventBuilder::issues("edited").issue(5).build();

        let err = execute(&event, &config(), || Ok(&gh)).unwrap_err();

        assert!(err.to_string().contains("Resource not accessible by integration"));
        assert!(gh.applied_labels.lock().unwrap().is_empty());
    }
}
