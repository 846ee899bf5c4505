use crate::shared::infrastructure::local_store::{LocalStore, LocalStoreError};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryLocalStore {
    items: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl InMemoryLocalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), LocalStoreError> {
        if self.is_offline {
            return Err(LocalStoreError::Unavailable("Local store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl LocalStore for InMemoryLocalStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, LocalStoreError> {
        self.ensure_online()?;
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), LocalStoreError> {
        self.ensure_online()?;
        self.items
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), LocalStoreError> {
        self.ensure_online()?;
        self.items.write().await.remove(key);
        Ok(())
    }
}
