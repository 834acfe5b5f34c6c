//! Configuration source port definition.

/// Port for reading named configuration values (`changed-label`, `qualifying-labels`).
pub trait ConfigSource {
    /// Raw value for `key`, or `None` when the source does not define it.
    fn get(&self, key: &str) -> Option<String>;
}
