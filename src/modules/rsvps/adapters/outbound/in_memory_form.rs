// In memory implementation of the FormSubmitter port.
//
// Purpose
// - Record submissions for tests, and optionally forward them into an InMemoryGuestSheet so the
//   whole submit-then-confirm loop runs without the network.

use crate::modules::rsvps::adapters::outbound::in_memory_sheet::InMemoryGuestSheet;
use crate::modules::rsvps::use_cases::submit_rsvp::form_port::{
    FormPayload, FormSubmitError, FormSubmitter,
};
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryFormSubmitter {
    pub submissions: Mutex<Vec<FormPayload>>,
    sheet: Option<Arc<InMemoryGuestSheet>>,
    is_offline: bool,
}

impl InMemoryFormSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn forwarding_to(sheet: Arc<InMemoryGuestSheet>) -> Self {
        Self {
            sheet: Some(sheet),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl FormSubmitter for InMemoryFormSubmitter {
    async fn submit(&self, payload: &FormPayload) -> Result<(), FormSubmitError> {
        if self.is_offline {
            return Err(FormSubmitError::Transport("Form endpoint offline".into()));
        }
        self.submissions.lock().await.push(payload.clone());
        if let Some(sheet) = &self.sheet {
            let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
            sheet.append_submission(payload, &timestamp).await;
        }
        Ok(())
    }
}
