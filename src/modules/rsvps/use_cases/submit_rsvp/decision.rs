use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RsvpField {
    Name,
    Email,
    GuestCount,
}

impl RsvpField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RsvpField::Name => "name",
            RsvpField::Email => "email",
            RsvpField::GuestCount => "guestCount",
        }
    }
}

#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name must be at least 2 characters")]
    NameTooShort,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please select the number of guests")]
    GuestCountNotSelected,
}

impl FieldError {
    pub fn field(&self) -> RsvpField {
        match self {
            FieldError::NameTooShort => RsvpField::Name,
            FieldError::InvalidEmail => RsvpField::Email,
            FieldError::GuestCountNotSelected => RsvpField::GuestCount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn contains(&self, error: FieldError) -> bool {
        self.0.contains(&error)
    }

    pub fn by_field(&self) -> BTreeMap<RsvpField, String> {
        self.0
            .iter()
            .map(|error| (error.field(), error.to_string()))
            .collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRsvp {
    pub name: String,
    pub email: String,
    pub guest_count: u32,
    pub message: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted(ValidatedRsvp),
    Rejected(ValidationErrors),
}
