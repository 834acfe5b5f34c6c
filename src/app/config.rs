//! Policy configuration loading.

use std::path::Path;

use crate::adapters::{ActionInputs, LayeredConfig, OverrideConfig, RunnerEnv, TomlConfigFile};
use crate::domain::{AppError, CHANGED_LABEL_KEY, PolicyConfig, QUALIFYING_LABELS_KEY};
use crate::ports::ConfigSource;

/// Input key for an explicit API token.
pub const REPO_TOKEN_KEY: &str = "repo-token";

/// Read and validate the policy configuration from `source`.
pub fn load_policy_config<C: ConfigSource + ?Sized>(source: &C) -> Result<PolicyConfig, AppError> {
    let tracking_label = require(source, CHANGED_LABEL_KEY)?;
    let qualifying_labels = require(source, QUALIFYING_LABELS_KEY)?;
    PolicyConfig::new(&tracking_label, &qualifying_labels)
}

fn require<C: ConfigSource + ?Sized>(source: &C, key: &str) -> Result<String, AppError> {
    source.get(key).filter(|value| !value.trim().is_empty()).ok_or_else(|| {
        AppError::config_error(format!(
            "Input required and not supplied: {} (set it with `with:`, --{} or a config file)",
            key, key
        ))
    })
}

/// Configuration stack: command-line overrides, then the config file, then action inputs.
pub fn config_layers(
    env: &RunnerEnv,
    overrides: OverrideConfig,
    config_path: Option<&Path>,
) -> Result<LayeredConfig, AppError> {
    let mut layers = LayeredConfig::new().layer(overrides);
    if let Some(path) = config_path {
        layers = layers.layer(TomlConfigFile::load(path)?);
    }
    Ok(layers.layer(ActionInputs::new(env.clone())))
}
