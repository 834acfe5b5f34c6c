//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together the runner
//! environment, configuration layers, and command execution.

use std::path::PathBuf;

use crate::adapters::{ActionInputs, ActionsEventSource, GitHubRestClient, OverrideConfig, RunnerEnv};
use crate::app::commands::{self, LabelOutput};
use crate::app::config::{REPO_TOKEN_KEY, config_layers, load_policy_config};
use crate::domain::{
    AppError, CHANGED_LABEL_KEY, PolicyConfig, QUALIFYING_LABELS_KEY, WebhookEvent,
};
use crate::ports::{ConfigSource, EventSource};

/// Where the event and configuration come from when not taken from the runner.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Event name override (`GITHUB_EVENT_NAME`).
    pub event_name: Option<String>,
    /// Event payload file override (`GITHUB_EVENT_PATH`).
    pub event_path: Option<PathBuf>,
    /// Tracking label override.
    pub changed_label: Option<String>,
    /// Comma-separated qualifying labels override.
    pub qualifying_labels: Option<String>,
    /// TOML configuration file.
    pub config_path: Option<PathBuf>,
    /// Repository override (`GITHUB_REPOSITORY`).
    pub repo: Option<String>,
}

/// Evaluate the current event and apply the tracking label when it qualifies.
pub fn sync(options: RunOptions) -> Result<LabelOutput, AppError> {
    sync_with_env(&RunnerEnv::capture(), options)
}

/// [`sync`] against an explicit environment snapshot.
pub fn sync_with_env(env: &RunnerEnv, options: RunOptions) -> Result<LabelOutput, AppError> {
    let (event, config) = load_inputs(env, &options)?;

    commands::sync::execute(&event, &config, || {
        let token = ActionInputs::new(env.clone()).get(REPO_TOKEN_KEY);
        GitHubRestClient::from_env(env, options.repo.as_deref(), token.as_deref())
    })
}

/// Classify the current event without contacting GitHub.
pub fn evaluate(options: RunOptions) -> Result<LabelOutput, AppError> {
    evaluate_with_env(&RunnerEnv::capture(), options)
}

/// [`evaluate`] against an explicit environment snapshot.
pub fn evaluate_with_env(env: &RunnerEnv, options: RunOptions) -> Result<LabelOutput, AppError> {
    let (event, config) = load_inputs(env, &options)?;
    commands::evaluate::execute(&event, &config)
}

fn load_inputs(
    env: &RunnerEnv,
    options: &RunOptions,
) -> Result<(WebhookEvent, PolicyConfig), AppError> {
    let overrides = OverrideConfig::new()
        .with(CHANGED_LABEL_KEY, options.changed_label.clone())
        .with(QUALIFYING_LABELS_KEY, options.qualifying_labels.clone());
    let layers = config_layers(env, overrides, options.config_path.as_deref())?;
    let config = load_policy_config(&layers)?;

    let source =
        ActionsEventSource::resolve(env, options.event_name.clone(), options.event_path.clone())?;
    let event = source.current_event()?;

    Ok((event, config))
}
