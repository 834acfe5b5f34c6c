mod event_builder;
mod fake_issue_labels;

pub use event_builder::EventBuilder;
pub use fake_issue_labels::FakeIssueLabels;
