//! label-tracker: apply a tracking label to issues that changed while carrying a qualifying label.
//!
//! The decision policy in [`domain`] is pure; [`app::commands::sync`] is the
//! thin shell that lists the issue's labels and adds the tracking label.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{RunOptions, evaluate, sync};
pub use app::commands::{LabelOutput, Outcome};
pub use domain::{AppError, Decision, PolicyConfig, SkipReason, WebhookEvent};
