//! Action inputs exposed by the Actions runner.

use crate::adapters::RunnerEnv;
use crate::ports::ConfigSource;

/// Reads `with:` inputs the runner exports as `INPUT_<NAME>` variables.
#[derive(Debug, Clone)]
pub struct ActionInputs {
    env: RunnerEnv,
}

impl ActionInputs {
    pub fn new(env: RunnerEnv) -> Self {
        Self { env }
    }

    /// Runner variable name for an input: spaces become `_`, then upper-cased.
    pub fn variable_name(input: &str) -> String {
        format!("INPUT_{}", input.replace(' ', "_").to_uppercase())
    }
}

impl ConfigSource for ActionInputs {
    fn get(&self, key: &str) -> Option<String> {
        self.env.get(&Self::variable_name(key)).map(|value| value.trim().to_string())
    }
}
