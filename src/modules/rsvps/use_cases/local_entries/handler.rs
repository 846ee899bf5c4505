// Local entries handler: read and manually clear the local RSVP cache.
//
// Clearing is the only way local entries disappear. The guest list keeps what it displays and only
// drops its pending report.

use crate::modules::rsvps::adapters::outbound::local_entries::LocalEntries;
use crate::modules::rsvps::core::entry::RsvpEntry;
use crate::modules::rsvps::use_cases::sync_guest_list::handler::GuestListSynchronizer;
use crate::shared::infrastructure::local_store::LocalStoreError;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Storage(#[from] LocalStoreError),
}

pub struct LocalEntriesHandler {
    local_entries: LocalEntries,
    guest_list: Arc<GuestListSynchronizer>,
}

impl LocalEntriesHandler {
    pub fn new(local_entries: LocalEntries, guest_list: Arc<GuestListSynchronizer>) -> Self {
        Self {
            local_entries,
            guest_list,
        }
    }

    pub async fn list(&self) -> Result<Vec<RsvpEntry>, ApplicationError> {
        Ok(self.local_entries.load().await?)
    }

    pub async fn clear(&self) -> Result<(), ApplicationError> {
        self.local_entries.clear().await?;
        self.guest_list.refresh_pending(&[]).await;
        info!("local rsvp cache cleared");
        Ok(())
    }
}
