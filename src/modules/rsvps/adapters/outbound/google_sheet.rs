// Apps Script implementation of the GuestSheetSource port.
//
// The script serves the sheet as JSON. Requests always ask intermediaries not to serve a cached
// copy, since a stale sheet is exactly what the confirmation poll must not see.

use crate::modules::rsvps::use_cases::sync_guest_list::sheet_port::{GuestSheetSource, SheetError};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use serde_json::Value;

pub struct GoogleSheetSource {
    client: Client,
    sheet_url: String,
}

impl GoogleSheetSource {
    pub fn new(client: Client, sheet_url: impl Into<String>) -> Self {
        Self {
            client,
            sheet_url: sheet_url.into(),
        }
    }
}

#[async_trait]
impl GuestSheetSource for GoogleSheetSource {
    async fn fetch(&self) -> Result<Value, SheetError> {
        let response = self
            .client
            .get(&self.sheet_url)
            .header(CACHE_CONTROL, "no-cache, no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(|err| SheetError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SheetError::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|err| SheetError::Decode(err.to_string()))
    }
}
