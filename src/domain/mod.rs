pub mod decision;
pub mod error;
pub mod event;
pub mod github_api_config;
pub mod policy;
pub mod policy_config;
pub mod repository;

pub use decision::{Decision, FailReason, Severity, SkipReason};
pub use error::AppError;
pub use event::{EventKind, IssueRef, LabelRef, PayloadData, ProjectCardRef, WebhookEvent};
pub use github_api_config::GitHubApiConfig;
pub use policy::{evaluate, qualify, resolve_issue_number, screen};
pub use policy_config::{CHANGED_LABEL_KEY, PolicyConfig, QUALIFYING_LABELS_KEY};
pub use repository::RepoRef;
