use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

const STATUS_MESSAGE: &str = "Failed to fetch guest list from Google Sheet. Please check if your Google Apps Script is deployed as a web app and set to 'Anyone' can access.";
const FALLBACK_MESSAGE: &str = "Failed to load entries. Please try again. If this persists, check your Google Apps Script deployment and permissions.";

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("guest sheet unreachable: {0}")]
    Transport(String),

    #[error("guest sheet responded with status {0}")]
    Status(u16),

    #[error("guest sheet returned an unreadable body: {0}")]
    Decode(String),
}

impl SheetError {
    /// Message for the error banner.
    pub fn user_message(&self) -> &'static str {
        match self {
            SheetError::Status(_) => STATUS_MESSAGE,
            SheetError::Transport(_) | SheetError::Decode(_) => FALLBACK_MESSAGE,
        }
    }
}

/// Source of the authoritative guest sheet. Implementations must bypass any cache.
#[async_trait]
pub trait GuestSheetSource: Send + Sync {
    async fn fetch(&self) -> Result<Value, SheetError>;
}
