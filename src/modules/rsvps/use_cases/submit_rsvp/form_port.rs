// Port to the external form-collection endpoint.
//
// The endpoint only understands its own opaque field keys, so the mapping from RSVP fields to
// keys lives here next to the trait the adapters implement.

use crate::modules::rsvps::use_cases::submit_rsvp::decision::ValidatedRsvp;
use async_trait::async_trait;
use thiserror::Error;

pub const NAME_FIELD: &str = "entry.405401269";
pub const EMAIL_FIELD: &str = "entry.1755234596";
pub const GUEST_COUNT_FIELD: &str = "entry.1335956832";
pub const MESSAGE_FIELD: &str = "entry.893740636";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPayload {
    pub fields: Vec<(&'static str, String)>,
}

impl FormPayload {
    pub fn value(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| *field == key)
            .map(|(_, value)| value.as_str())
    }
}

impl From<&ValidatedRsvp> for FormPayload {
    fn from(rsvp: &ValidatedRsvp) -> Self {
        Self {
            fields: vec![
                (NAME_FIELD, rsvp.name.clone()),
                (EMAIL_FIELD, rsvp.email.clone()),
                (GUEST_COUNT_FIELD, rsvp.guest_count.to_string()),
                (MESSAGE_FIELD, rsvp.message.clone().unwrap_or_default()),
            ],
        }
    }
}

#[derive(Debug, Error)]
pub enum FormSubmitError {
    #[error("form endpoint unreachable: {0}")]
    Transport(String),

    #[error("form endpoint rejected the submission with status {0}")]
    Rejected(u16),
}

#[async_trait]
pub trait FormSubmitter: Send + Sync {
    async fn submit(&self, payload: &FormPayload) -> Result<(), FormSubmitError>;
}
