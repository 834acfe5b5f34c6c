use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::IssueLabelClient;

/// In-memory issue label store recording every call.
#[derive(Default)]
pub struct FakeIssueLabels {
    pub labels: Mutex<BTreeMap<u64, BTreeSet<String>>>,
    pub listed: Mutex<Vec<u64>>,
    pub applied_labels: Mutex<Vec<(u64, String)>>,
    pub fail_with: Option<(u16, String)>,
}

impl FakeIssueLabels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_issue(self, issue_number: u64, labels: &[&str]) -> Self {
        self.labels
            .lock()
            .unwrap()
            .insert(issue_number, labels.iter().map(|label| label.to_string()).collect());
        self
    }

    /// Every call fails with the given HTTP status and message.
    pub fn failing(status: u16, message: &str) -> Self {
        Self { fail_with: Some((status, message.to_string())), ..Self::default() }
    }

    fn check(&self, operation: &str) -> Result<(), AppError> {
        match &self.fail_with {
            Some((status, message)) => Err(AppError::GitHubApi {
                operation: operation.to_string(),
                status: *status,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl IssueLabelClient for FakeIssueLabels {
    fn list_labels(&self, issue_number: u64) -> Result<BTreeSet<String>, AppError> {
        self.listed.lock().unwrap().push(issue_number);
        self.check("list labels")?;
        Ok(self.labels.lock().unwrap().get(&issue_number).cloned().unwrap_or_default())
    }

    fn add_label(&self, issue_number: u64, label: &str) -> Result<(), AppError> {
        self.applied_labels.lock().unwrap().push((issue_number, label.to_string()));
        self.check("add label")?;
        self.labels.lock().unwrap().entry(issue_number).or_default().insert(label.to_string());
        Ok(())
    }
}
