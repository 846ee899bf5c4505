use axum::{
    Extension, Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::rsvps::use_cases::local_entries::inbound::http as local_entries_http;
use crate::modules::rsvps::use_cases::submit_rsvp::inbound::http as submit_http;
use crate::modules::rsvps::use_cases::sync_guest_list::inbound::http as guest_list_http;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    Router::new()
        .route("/rsvp", post(submit_http::handle))
        .route("/guest-list", get(guest_list_http::handle_view))
        .route("/guest-list/refresh", post(guest_list_http::handle_refresh))
        .route(
            "/local-entries",
            get(local_entries_http::handle_list).delete(local_entries_http::handle_clear),
        )
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
