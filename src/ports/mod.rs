mod config_source;
mod event_source;
mod issue_labels;

pub use config_source::ConfigSource;
pub use event_source::EventSource;
pub use issue_labels::IssueLabelClient;
