//! Policy configuration domain model.

use std::collections::BTreeSet;

use crate::domain::AppError;

/// Input key naming the tracking label.
pub const CHANGED_LABEL_KEY: &str = "changed-label";
/// Input key holding the comma-separated qualifying labels.
pub const QUALIFYING_LABELS_KEY: &str = "qualifying-labels";

/// Labels the policy works with, fixed for the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyConfig {
    tracking_label: String,
    qualifying_labels: BTreeSet<String>,
}

impl PolicyConfig {
    /// Build a configuration from the raw input values.
    ///
    /// `qualifying_labels` is split on `,`; entries are trimmed and empty
    /// entries dropped. At least one qualifying label must remain.
    pub fn new(tracking_label: &str, qualifying_labels: &str) -> Result<Self, AppError> {
        let tracking_label = tracking_label.trim();
        if tracking_label.is_empty() {
            return Err(AppError::config_error(format!(
                "Input '{}' must name the tracking label",
                CHANGED_LABEL_KEY
            )));
        }

        let qualifying_labels = parse_label_list(qualifying_labels);
        if qualifying_labels.is_empty() {
            return Err(AppError::config_error(format!(
                "Input '{}' must list at least one label",
                QUALIFYING_LABELS_KEY
            )));
        }

        Ok(Self { tracking_label: tracking_label.to_string(), qualifying_labels })
    }

    pub fn tracking_label(&self) -> &str {
        &self.tracking_label
    }

    pub fn qualifying_labels(&self) -> &BTreeSet<String> {
        &self.qualifying_labels
    }

    pub fn is_qualifying(&self, label: &str) -> bool {
        self.qualifying_labels.contains(label)
    }

    /// Qualifying labels joined with `,` for log lines.
    pub fn qualifying_display(&self) -> String {
        self.qualifying_labels.iter().map(String::as_str).collect::<Vec<_>>().join(",")
    }
}

/// Split a comma-separated label list.
pub fn parse_label_list(raw: &str) -> BTreeSet<String> {
    raw.split(',').map(str::trim).filter(|label| !label.is_empty()).map(str::to_string).collect()
}
