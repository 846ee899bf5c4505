// Google Form implementation of the FormSubmitter port.
//
// Posts the form-encoded payload to the form's `formResponse` URL from the server side, where
// the response status is visible, and reports anything other than a 2xx as a rejection.

use crate::modules::rsvps::use_cases::submit_rsvp::form_port::{
    FormPayload, FormSubmitError, FormSubmitter,
};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

pub struct GoogleFormSubmitter {
    client: Client,
    form_url: String,
}

impl GoogleFormSubmitter {
    pub fn new(client: Client, form_url: impl Into<String>) -> Self {
        Self {
            client,
            form_url: form_url.into(),
        }
    }
}

#[async_trait]
impl FormSubmitter for GoogleFormSubmitter {
    async fn submit(&self, payload: &FormPayload) -> Result<(), FormSubmitError> {
        let response = self
            .client
            .post(&self.form_url)
            .form(&payload.fields)
            .send()
            .await
            .map_err(|err| FormSubmitError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FormSubmitError::Rejected(status.as_u16()));
        }
        debug!(%status, "rsvp form accepted");
        Ok(())
    }
}
