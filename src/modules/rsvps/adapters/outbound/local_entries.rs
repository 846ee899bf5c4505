// Local RSVP cache stored under a single key of the LocalStore.
//
// Responsibilities
// - Read and write the newest-first list of local entries as JSON.
// - Offer a lenient read for the submit flow, where an unreadable list counts as empty.
// - Serialize every write, so concurrent prepends never drop each other's entries. Clones share
//   the lock.

use crate::modules::rsvps::core::entry::RsvpEntry;
use crate::shared::infrastructure::local_store::{LocalStore, LocalStoreError};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::error;

pub const RSVP_STORAGE_KEY: &str = "wedding-rsvp-entries";

#[derive(Clone)]
pub struct LocalEntries {
    store: Arc<dyn LocalStore>,
    write_lock: Arc<Mutex<()>>,
}

impl LocalEntries {
    pub fn new(store: Arc<dyn LocalStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub async fn load(&self) -> Result<Vec<RsvpEntry>, LocalStoreError> {
        match self.store.get_item(RSVP_STORAGE_KEY).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    pub async fn load_or_empty(&self) -> Vec<RsvpEntry> {
        self.load().await.unwrap_or_else(|err| {
            error!(error = %err, "failed to load saved entries");
            Vec::new()
        })
    }

    pub async fn save(&self, entries: &[RsvpEntry]) -> Result<(), LocalStoreError> {
        let _guard = self.write_lock.lock().await;
        self.write(entries).await
    }

    /// Prepends `entry` to the stored list and returns the list that was written (or attempted).
    /// The read and the write happen under one lock.
    pub async fn prepend(
        &self,
        entry: RsvpEntry,
    ) -> (Vec<RsvpEntry>, Result<(), LocalStoreError>) {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load_or_empty().await;
        entries.insert(0, entry);
        let saved = self.write(&entries).await;
        (entries, saved)
    }

    pub async fn clear(&self) -> Result<(), LocalStoreError> {
        let _guard = self.write_lock.lock().await;
        self.store.remove_item(RSVP_STORAGE_KEY).await
    }

    async fn write(&self, entries: &[RsvpEntry]) -> Result<(), LocalStoreError> {
        let raw = serde_json::to_string(entries)?;
        self.store.set_item(RSVP_STORAGE_KEY, &raw).await
    }
}
