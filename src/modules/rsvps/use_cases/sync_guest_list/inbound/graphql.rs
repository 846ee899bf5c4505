use async_graphql::{Context, Enum, Object, SimpleObject};

use crate::modules::rsvps::core::entry::{EntrySource, RsvpEntry};
use crate::modules::rsvps::core::guest_list::GuestListView;
use crate::shell::state::AppState;

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlEntrySource {
    Local,
    Remote,
}

impl From<EntrySource> for GqlEntrySource {
    fn from(source: EntrySource) -> Self {
        match source {
            EntrySource::Local => Self::Local,
            EntrySource::Remote => Self::Remote,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlRsvpEntry {
    pub id: String,
    pub name: String,
    pub email: String,
    pub guest_count: u32,
    pub message: Option<String>,
    pub date: String,
    pub source: GqlEntrySource,
}

impl From<RsvpEntry> for GqlRsvpEntry {
    fn from(v: RsvpEntry) -> Self {
        Self {
            id: v.id,
            name: v.name,
            email: v.email,
            guest_count: v.guest_count,
            message: v.message,
            date: v.date,
            source: v.source.into(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlGuestList {
    pub entries: Vec<GqlRsvpEntry>,
    pub total_guests: u64,
    pub unique_rsvps: u64,
    pub is_loading: bool,
    pub is_success: bool,
    pub error: Option<String>,
    pub pending: Vec<GqlRsvpEntry>,
}

impl From<GuestListView> for GqlGuestList {
    fn from(v: GuestListView) -> Self {
        Self {
            entries: v.entries.into_iter().map(Into::into).collect(),
            total_guests: v.total_guests,
            unique_rsvps: v.unique_rsvps,
            is_loading: v.is_loading,
            is_success: v.is_success,
            error: v.error,
            pending: v.pending.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Default)]
pub struct GuestListQuery;

#[Object]
impl GuestListQuery {
    async fn guest_list(&self, context: &Context<'_>) -> GqlGuestList {
        let state = context.data_unchecked::<AppState>();
        state.guest_list.view().await.into()
    }
}

#[derive(Default)]
pub struct GuestListMutation;

#[Object]
impl GuestListMutation {
    /// Fetches the sheet now. A failed fetch is reported in the returned view's `error`.
    async fn refresh_guest_list(&self, context: &Context<'_>) -> GqlGuestList {
        let state = context.data_unchecked::<AppState>();
        // Already logged and set as the banner.
        let _ = state.guest_list.sync().await;
        state.guest_list.view().await.into()
    }
}
