// Shared test fixture for the SubmitRsvp command.

use crate::modules::rsvps::use_cases::submit_rsvp::command::SubmitRsvp;

pub struct SubmitRsvpBuilder {
    inner: SubmitRsvp,
}

impl Default for SubmitRsvpBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl SubmitRsvpBuilder {
    pub fn new() -> Self {
        Self {
            inner: SubmitRsvp {
                name: "Jane Doe".to_string(),
                email: "jane@x.com".to_string(),
                guest_count: "2".to_string(),
                message: Some("Vegetarian".to_string()),
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn guest_count(mut self, v: impl Into<String>) -> Self {
        self.inner.guest_count = v.into();
        self
    }

    pub fn message(mut self, v: Option<&str>) -> Self {
        self.inner.message = v.map(str::to_string);
        self
    }

    pub fn build(self) -> SubmitRsvp {
        self.inner
    }
}
