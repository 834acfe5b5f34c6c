//! Outcomes of the label policy.

use std::fmt;

/// How loudly a skip should be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

/// Why no label was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Trigger is neither `issues` nor `project_card`.
    UnsupportedTrigger,
    /// Action is not one the trigger type is eligible for.
    UnsupportedAction,
    /// A `moved` card without `changes` only changed position within its column.
    CardMovedWithinColumn,
    /// `unlabeled` without label details: the label was deleted repository-wide.
    LabelDeleted,
    /// The tracking label itself was removed.
    TrackingLabelRemoved { label: String },
    /// A qualifying label was applied or removed.
    QualifyingLabelToggled { label: String, applied: bool },
    /// The issue carries none of the qualifying labels.
    NoQualifyingLabel,
}

impl SkipReason {
    /// Stable identifier for machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            SkipReason::UnsupportedTrigger => "unsupported_trigger",
            SkipReason::UnsupportedAction => "unsupported_action",
            SkipReason::CardMovedWithinColumn => "card_moved_within_column",
            SkipReason::LabelDeleted => "label_deleted",
            SkipReason::TrackingLabelRemoved { .. } => "tracking_label_removed",
            SkipReason::QualifyingLabelToggled { .. } => "qualifying_label_toggled",
            SkipReason::NoQualifyingLabel => "no_qualifying_label",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            // Intent cannot be recovered; an operator should look at the issue.
            SkipReason::LabelDeleted => Severity::Warning,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnsupportedTrigger => {
                f.write_str("only 'issues' and 'project_card' triggers are supported")
            }
            SkipReason::UnsupportedAction => f.write_str("the event action is not supported"),
            SkipReason::CardMovedWithinColumn => {
                f.write_str("the card merely moved within the same project board column")
            }
            SkipReason::LabelDeleted => f.write_str(
                "a label was removed by deleting it from the repository; review the issue manually",
            ),
            SkipReason::TrackingLabelRemoved { label } => {
                write!(f, "the '{}' label was removed", label)
            }
            SkipReason::QualifyingLabelToggled { label, applied: true } => {
                write!(f, "the '{}' qualifying label was applied", label)
            }
            SkipReason::QualifyingLabelToggled { label, applied: false } => {
                write!(f, "the '{}' qualifying label was removed", label)
            }
            SkipReason::NoQualifyingLabel => f.write_str("no qualifying label is on the issue"),
        }
    }
}

/// Why the run must fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailReason {
    IssueNumberUnresolved,
}

impl fmt::Display for FailReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailReason::IssueNumberUnresolved => f.write_str("cannot determine issue number"),
        }
    }
}

/// Result of evaluating an event against the policy.
///
/// `Apply` from [`crate::domain::evaluate`] names the target issue; it becomes
/// final once [`crate::domain::qualify`] confirms a qualifying label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Skip(SkipReason),
    Fail(FailReason),
    Apply(u64),
}
