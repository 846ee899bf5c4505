use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::modules::rsvps::core::entry::RsvpEntry;
use crate::modules::rsvps::use_cases::submit_rsvp::command::SubmitRsvp;
use crate::modules::rsvps::use_cases::submit_rsvp::decision::ValidationErrors;
use crate::modules::rsvps::use_cases::submit_rsvp::handler::{ApplicationError, SubmitReceipt};
use crate::shell::state::AppState;

pub const BODY_FIELD: &str = "body";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRsvpBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Any JSON value; the decider reports anything that is not a guest count.
    #[serde(default)]
    pub guest_count: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Text form of the guest count as a select would send it. Strings pass through, other values
/// use their JSON text.
fn guest_count_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl From<SubmitRsvpBody> for SubmitRsvp {
    fn from(body: SubmitRsvpBody) -> Self {
        Self {
            name: body.name,
            email: body.email,
            guest_count: body.guest_count.map(guest_count_text).unwrap_or_default(),
            message: body.message,
        }
    }
}

#[derive(Serialize)]
pub struct SubmitRsvpResponse {
    pub entry: RsvpEntry,
    pub delivered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

#[derive(Serialize)]
pub struct ValidationErrorResponse {
    pub errors: BTreeMap<&'static str, String>,
}

impl ValidationErrorResponse {
    fn unreadable_body(rejection: &JsonRejection) -> Self {
        Self {
            errors: BTreeMap::from([(BODY_FIELD, rejection.body_text())]),
        }
    }
}

impl From<&ValidationErrors> for ValidationErrorResponse {
    fn from(errors: &ValidationErrors) -> Self {
        Self {
            errors: errors
                .by_field()
                .into_iter()
                .map(|(field, message)| (field.as_str(), message))
                .collect(),
        }
    }
}

fn receipt_status(receipt: &SubmitReceipt) -> StatusCode {
    if !receipt.stored() {
        StatusCode::INTERNAL_SERVER_ERROR
    } else if !receipt.delivered() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::CREATED
    }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SubmitRsvpBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationErrorResponse::unreadable_body(&rejection)),
            )
                .into_response();
        }
    };

    match state.submit_handler.handle(body.into()).await {
        Ok(receipt) => {
            let status = receipt_status(&receipt);
            let error = receipt.error_message();
            let delivered = receipt.delivered();
            (
                status,
                Json(SubmitRsvpResponse {
                    entry: receipt.entry,
                    delivered,
                    error,
                }),
            )
                .into_response()
        }
        Err(ApplicationError::Validation(errors)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ValidationErrorResponse::from(&errors)),
        )
            .into_response(),
    }
}
