//! Snapshot of the runner environment.

use std::collections::HashMap;

/// Environment variables captured once at process start.
///
/// Adapters read from the snapshot instead of the live process environment so
/// that one invocation sees a consistent view and tests can supply their own.
#[derive(Debug, Clone, Default)]
pub struct RunnerEnv {
    vars: HashMap<String, String>,
}

impl RunnerEnv {
    /// Capture the current process environment.
    pub fn capture() -> Self {
        Self { vars: std::env::vars().collect() }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self { vars: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }

    /// Value of `key`, treating an empty value as unset.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str).filter(|value| !value.is_empty())
    }

    /// First set value among `keys`.
    pub fn first_of(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|key| self.get(key))
    }
}
