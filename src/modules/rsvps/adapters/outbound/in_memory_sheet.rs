// In memory implementation of the GuestSheetSource port.
//
// Purpose
// - Stand in for the Apps Script endpoint in tests and in offline mode.
//
// Responsibilities
// - Serve a sheet payload with the standard header, starting header-only.
// - Append form submissions as rows, the way the form-to-sheet pipeline does.

use crate::modules::rsvps::core::sheet::{SHEET_DATA_KEY, rows_from_payload};
use crate::modules::rsvps::use_cases::submit_rsvp::form_port::{
    EMAIL_FIELD, FormPayload, GUEST_COUNT_FIELD, MESSAGE_FIELD, NAME_FIELD,
};
use crate::modules::rsvps::use_cases::sync_guest_list::sheet_port::{GuestSheetSource, SheetError};
use serde_json::{Value, json};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

pub const SHEET_HEADER: [&str; 5] = [
    "Full Name",
    "Email",
    "Number Of Guests",
    "Message",
    "Timestamp",
];

pub struct InMemoryGuestSheet {
    payload: RwLock<Value>,
    delay: RwLock<Option<Duration>>,
    is_offline: AtomicBool,
    fetches: AtomicUsize,
}

impl Default for InMemoryGuestSheet {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryGuestSheet {
    pub fn new() -> Self {
        Self {
            payload: RwLock::new(json!({ SHEET_DATA_KEY: [SHEET_HEADER] })),
            delay: RwLock::new(None),
            is_offline: AtomicBool::new(false),
            fetches: AtomicUsize::new(0),
        }
    }

    pub async fn set_payload(&self, payload: Value) {
        *self.payload.write().await = payload;
    }

    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    pub fn set_offline(&self, offline: bool) {
        self.is_offline.store(offline, Ordering::SeqCst);
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub async fn append_submission(&self, payload: &FormPayload, timestamp: &str) {
        let mut current = self.payload.write().await;
        let mut rows = rows_from_payload(&current)
            .filter(|rows| !rows.is_empty())
            .unwrap_or_else(|| vec![SHEET_HEADER.iter().map(|c| c.to_string()).collect()]);
        rows.push(vec![
            payload.value(NAME_FIELD).unwrap_or_default().to_string(),
            payload.value(EMAIL_FIELD).unwrap_or_default().to_string(),
            payload.value(GUEST_COUNT_FIELD).unwrap_or_default().to_string(),
            payload.value(MESSAGE_FIELD).unwrap_or_default().to_string(),
            timestamp.to_string(),
        ]);
        *current = json!({ SHEET_DATA_KEY: rows });
    }
}

#[async_trait::async_trait]
impl GuestSheetSource for InMemoryGuestSheet {
    async fn fetch(&self) -> Result<Value, SheetError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let delay = *self.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(SheetError::Transport("Guest sheet offline".into()));
        }
        Ok(self.payload.read().await.clone())
    }
}
