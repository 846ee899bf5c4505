use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::rsvps::use_cases::local_entries::inbound::graphql::{
    LocalEntriesMutation, LocalEntriesQuery,
};
use crate::modules::rsvps::use_cases::submit_rsvp::inbound::graphql::SubmitRsvpMutation;
use crate::modules::rsvps::use_cases::sync_guest_list::inbound::graphql::{
    GuestListMutation, GuestListQuery,
};
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(GuestListQuery, LocalEntriesQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(SubmitRsvpMutation, GuestListMutation, LocalEntriesMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
