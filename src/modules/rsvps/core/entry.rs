// RSVP entry, the single record type of the rsvps context.
//
// Purpose
// - Represent one guest party's response, whether it was submitted from here or read back from the sheet.
//
// Responsibilities
// - Keep the persisted shape stable (camelCase, `guestCount` as a number).
// - Provide the pure reductions the views are built from.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntrySource {
    Local,
    #[serde(alias = "api")]
    Remote,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpEntry {
    pub id: String,
    pub name: String,
    pub email: String,
    pub guest_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub date: String,
    pub source: EntrySource,
}

pub fn total_guests(entries: &[RsvpEntry]) -> u64 {
    entries.iter().map(|entry| u64::from(entry.guest_count)).sum()
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
