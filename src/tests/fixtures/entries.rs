// Shared test fixture for RSVP entries.

use crate::modules::rsvps::core::entry::{EntrySource, RsvpEntry};

pub struct RsvpEntryBuilder {
    inner: RsvpEntry,
}

impl Default for RsvpEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RsvpEntryBuilder {
    pub fn new() -> Self {
        Self {
            inner: RsvpEntry {
                id: "local-fixed-0001".to_string(),
                name: "Jane Doe".to_string(),
                email: "jane@x.com".to_string(),
                guest_count: 2,
                message: Some("Vegetarian".to_string()),
                date: "1/1/2025, 10:00:00 AM".to_string(),
                source: EntrySource::Local,
            },
        }
    }

    pub fn remote() -> Self {
        Self::new()
            .id("api-0-jane@x.com")
            .date("2025-01-01")
            .source(EntrySource::Remote)
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn guest_count(mut self, v: u32) -> Self {
        self.inner.guest_count = v;
        self
    }

    pub fn message(mut self, v: Option<&str>) -> Self {
        self.inner.message = v.map(str::to_string);
        self
    }

    pub fn date(mut self, v: impl Into<String>) -> Self {
        self.inner.date = v.into();
        self
    }

    pub fn source(mut self, v: EntrySource) -> Self {
        self.inner.source = v;
        self
    }

    pub fn build(self) -> RsvpEntry {
        self.inner
    }
}
