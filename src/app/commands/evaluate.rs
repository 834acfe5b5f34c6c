//! `evaluate` command implementation.
//!
//! Classifies the event without contacting GitHub. An eligible event still
//! needs the qualification check that only `sync` performs.

use tracing::info;

use crate::app::commands::{LabelOutput, report_skip};
use crate::domain::{AppError, Decision, PolicyConfig, WebhookEvent, evaluate};

/// Execute `evaluate`.
pub fn execute(event: &WebhookEvent, config: &PolicyConfig) -> Result<LabelOutput, AppError> {
    match evaluate(event, config) {
        Decision::Apply(issue_number) => {
            info!(
                "A '{}' event action targets issue #{}; '{}' applies if it carries one of '{}'.",
                event.qualified_name(),
                issue_number,
                config.tracking_label(),
                config.qualifying_display()
            );
            Ok(LabelOutput::eligible(event, issue_number, config.tracking_label()))
        }
        Decision::Skip(reason) => {
            report_skip(&reason);
            Ok(LabelOutput::skipped(event, &reason))
        }
        Decision::Fail(reason) => Err(reason.into()),
    }
}
