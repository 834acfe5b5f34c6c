pub mod action_inputs;
pub mod actions_event;
pub mod github_rest;
pub mod layered_config;
pub mod runner_env;
pub mod toml_config;

pub use action_inputs::ActionInputs;
pub use actions_event::ActionsEventSource;
pub use github_rest::GitHubRestClient;
pub use layered_config::{LayeredConfig, OverrideConfig};
pub use runner_env::RunnerEnv;
pub use toml_config::TomlConfigFile;
