use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::rsvps::use_cases::sync_guest_list::inbound::graphql::GqlRsvpEntry;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct LocalEntriesQuery;

#[Object]
impl LocalEntriesQuery {
    async fn local_entries(&self, context: &Context<'_>) -> GqlResult<Vec<GqlRsvpEntry>> {
        let state = context.data_unchecked::<AppState>();
        let entries = state.local_entries.list().await?;
        Ok(entries.into_iter().map(Into::into).collect())
    }
}

#[derive(Default)]
pub struct LocalEntriesMutation;

#[Object]
impl LocalEntriesMutation {
    async fn clear_local_entries(&self, context: &Context<'_>) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state.local_entries.clear().await?;
        Ok(true)
    }
}
