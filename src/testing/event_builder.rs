use crate::domain::{IssueRef, LabelRef, PayloadData, ProjectCardRef, WebhookEvent};

/// Builder for webhook events in tests.
pub struct EventBuilder {
    event_name: String,
    payload: PayloadData,
}

impl EventBuilder {
    pub fn new(event_name: &str, action: &str) -> Self {
        Self {
            event_name: event_name.to_string(),
            payload: PayloadData { action: Some(action.to_string()), ..PayloadData::default() },
        }
    }

    pub fn issues(action: &str) -> Self {
        Self::new("issues", action)
    }

    pub fn project_card(action: &str) -> Self {
        Self::new("project_card", action)
    }

    pub fn issue(mut self, number: u64) -> Self {
        self.payload.issue = Some(IssueRef { number });
        self
    }

    pub fn label(mut self, name: &str) -> Self {
        self.payload.label = Some(LabelRef { name: name.to_string() });
        self
    }

    pub fn changes(mut self) -> Self {
        self.payload.changes = Some(serde_json::json!({ "column_id": { "from": 1 } }));
        self
    }

    /// Project card without a content URL (a note card).
    pub fn card(mut self) -> Self {
        self.payload.project_card = Some(ProjectCardRef::default());
        self
    }

    pub fn card_url(mut self, url: &str) -> Self {
        self.payload.project_card = Some(ProjectCardRef { content_url: Some(url.to_string()) });
        self
    }

    pub fn build(self) -> WebhookEvent {
        WebhookEvent::new(&self.event_name, self.payload)
    }
}
