// Key-value persistence port, the server-side counterpart of the browser's local storage.
//
// Responsibilities
// - Store opaque string values under string keys.
// - Report failures as `LocalStoreError` so callers can tell storage trouble from network trouble.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocalStoreError {
    #[error("local store unavailable: {0}")]
    Unavailable(String),

    #[error("local store io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("local store encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

#[async_trait]
pub trait LocalStore: Send + Sync {
    async fn get_item(&self, key: &str) -> Result<Option<String>, LocalStoreError>;
    async fn set_item(&self, key: &str, value: &str) -> Result<(), LocalStoreError>;
    async fn remove_item(&self, key: &str) -> Result<(), LocalStoreError>;
}

pub mod file;
pub mod in_memory;
