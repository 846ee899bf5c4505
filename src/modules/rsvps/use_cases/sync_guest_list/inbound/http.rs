use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::shell::state::AppState;

pub async fn handle_view(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.guest_list.view().await)
}

/// Runs a sync and returns the resulting view. The view carries the error banner when it fails.
pub async fn handle_refresh(State(state): State<AppState>) -> impl IntoResponse {
    let status = match state.guest_list.sync().await {
        Ok(()) => StatusCode::OK,
        Err(_) => StatusCode::BAD_GATEWAY,
    };
    (status, Json(state.guest_list.view().await))
}
