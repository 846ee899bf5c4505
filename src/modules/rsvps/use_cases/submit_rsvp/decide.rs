// Pure decision function for an RSVP submission.
//
// Purpose
// - Validate the raw form input and produce a ValidatedRsvp, or every field error at once.
//
// Responsibilities
// - Name has at least 2 characters, email has an address shape, guest count parses to an integer within 1..=max.
// - Never perform input or output.

use crate::modules::rsvps::core::guest_count::parse_leading_int;
use crate::modules::rsvps::use_cases::submit_rsvp::command::SubmitRsvp;
use crate::modules::rsvps::use_cases::submit_rsvp::decision::{
    Decision, FieldError, ValidatedRsvp, ValidationErrors,
};
use regex::Regex;
use std::sync::LazyLock;

pub const MIN_NAME_CHARS: usize = 2;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9_'+\-]+(\.[A-Za-z0-9_'+\-]+)*@([A-Za-z0-9]([A-Za-z0-9\-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$",
    )
    .unwrap()
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn decide_submit(command: SubmitRsvp, max_guests: u32) -> Decision {
    let mut errors = Vec::new();

    if command.name.chars().count() < MIN_NAME_CHARS {
        errors.push(FieldError::NameTooShort);
    }
    if !is_valid_email(&command.email) {
        errors.push(FieldError::InvalidEmail);
    }
    let guest_count = parse_leading_int(&command.guest_count)
        .and_then(|count| u32::try_from(count).ok())
        .filter(|count| (1..=max_guests).contains(count));
    if guest_count.is_none() {
        errors.push(FieldError::GuestCountNotSelected);
    }

    match guest_count {
        Some(guest_count) if errors.is_empty() => Decision::Accepted(ValidatedRsvp {
            name: command.name,
            email: command.email,
            guest_count,
            message: command.message.filter(|m| !m.is_empty()),
        }),
        _ => Decision::Rejected(ValidationErrors(errors)),
    }
}
