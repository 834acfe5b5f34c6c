//! Configuration assembled from several sources.

use std::collections::BTreeMap;

use crate::ports::ConfigSource;

/// Fixed key/value pairs, used for command-line overrides.
#[derive(Debug, Clone, Default)]
pub struct OverrideConfig {
    values: BTreeMap<String, String>,
}

impl OverrideConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` under `key` when present.
    pub fn with(mut self, key: &str, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.values.insert(key.to_string(), value);
        }
        self
    }
}

impl ConfigSource for OverrideConfig {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Ordered stack of sources; the first non-blank value wins.
#[derive(Default)]
pub struct LayeredConfig {
    layers: Vec<Box<dyn ConfigSource>>,
}

impl LayeredConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layer(mut self, source: impl ConfigSource + 'static) -> Self {
        self.layers.push(Box::new(source));
        self
    }
}

impl ConfigSource for LayeredConfig {
    fn get(&self, key: &str) -> Option<String> {
        self.layers
            .iter()
            .filter_map(|layer| layer.get(key))
            .find(|value| !value.trim().is_empty())
    }
}
