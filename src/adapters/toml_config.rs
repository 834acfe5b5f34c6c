//! Policy configuration read from a TOML file.
//!
//! ```toml
//! changed-label = "needs-sync"
//! qualifying-labels = ["approved", "ready"]   # or "approved,ready"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::ConfigSource;

/// Configuration file with flat string or string-array values.
#[derive(Debug, Clone, Default)]
pub struct TomlConfigFile {
    values: BTreeMap<String, String>,
}

impl TomlConfigFile {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, AppError> {
        let table: toml::Table = toml::from_str(content)?;

        let values = table
            .into_iter()
            .map(|(key, value)| -> Result<(String, String), AppError> {
                let rendered = match value {
                    toml::Value::String(text) => text,
                    // Arrays are folded into the comma-separated input format.
                    toml::Value::Array(items) => items
                        .into_iter()
                        .map(|item| match item {
                            toml::Value::String(text) => Ok(text),
                            other => Err(invalid_value(&key, other.type_str())),
                        })
                        .collect::<Result<Vec<_>, _>>()?
                        .join(","),
                    other => return Err(invalid_value(&key, other.type_str())),
                };
                Ok((key, rendered))
            })
            .collect::<Result<BTreeMap<_, _>, AppError>>()?;

        Ok(Self { values })
    }
}

fn invalid_value(key: &str, found: &str) -> AppError {
    AppError::config_error(format!(
        "Config key '{}' must be a string or an array of strings, found {}",
        key, found
    ))
}

impl ConfigSource for TomlConfigFile {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
