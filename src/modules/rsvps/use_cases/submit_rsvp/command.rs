// Command data type for submitting an RSVP.
//
// Purpose
// - Carry the form input exactly as the guest typed it, before any validation.
//
// Responsibilities
// - Stay independent of the transport (HTTP JSON, GraphQL).

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitRsvp {
    pub name: String,
    pub email: String,
    pub guest_count: String,
    pub message: Option<String>,
}
