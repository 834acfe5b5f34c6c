use std::io;

use thiserror::Error;

use crate::domain::FailReason;

/// Library-wide error type for label-tracker operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// The runner did not describe the triggering event.
    #[error("Event context unavailable: {0}")]
    EventContext(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// The payload names neither an issue nor a project card linked to one.
    #[error("Unable to determine issue number.")]
    IssueNumberUnresolved,

    /// GitHub answered with a non-success status.
    #[error("GitHub API error during {operation} ({status}): {message}")]
    GitHubApi { operation: String, status: u16, message: String },

    /// The request never produced a response.
    #[error("HTTP request failed during {operation}: {details}")]
    Http { operation: String, details: String },

    /// Internal error.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<FailReason> for AppError {
    fn from(reason: FailReason) -> Self {
        match reason {
            FailReason::IssueNumberUnresolved => AppError::IssueNumberUnresolved,
        }
    }
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
