//! Issue label client port definition.

use std::collections::BTreeSet;

use crate::domain::AppError;

/// Port for reading and adding issue labels on the tracked repository.
pub trait IssueLabelClient {
    /// All label names currently on the issue, across every page.
    fn list_labels(&self, issue_number: u64) -> Result<BTreeSet<String>, AppError>;

    /// Attach `label` to the issue. Adding a label already present succeeds.
    fn add_label(&self, issue_number: u64, label: &str) -> Result<(), AppError>;
}

impl<T: IssueLabelClient + ?Sized> IssueLabelClient for &T {
    fn list_labels(&self, issue_number: u64) -> Result<BTreeSet<String>, AppError> {
        (**self).list_labels(issue_number)
    }

    fn add_label(&self, issue_number: u64, label: &str) -> Result<(), AppError> {
        (**self).add_label(issue_number, label)
    }
}
