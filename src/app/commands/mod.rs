pub mod evaluate;
pub mod output;
pub mod sync;

use tracing::{info, warn};

use crate::domain::{Severity, SkipReason};

pub use output::{LabelOutput, Outcome, write_workflow_output};

/// Log a skip at the level its reason calls for.
pub(crate) fn report_skip(reason: &SkipReason) {
    match reason.severity() {
        Severity::Info => info!("Skipping since {}.", reason),
        Severity::Warning => warn!("Skipping since {}.", reason),
    }
}
