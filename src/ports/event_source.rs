//! Event source port definition.

use crate::domain::{AppError, WebhookEvent};

/// Port supplying the webhook event that triggered this invocation.
pub trait EventSource {
    fn current_event(&self) -> Result<WebhookEvent, AppError>;
}
