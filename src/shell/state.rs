use crate::modules::rsvps::adapters::outbound::local_entries::LocalEntries;
use crate::modules::rsvps::use_cases::local_entries::handler::LocalEntriesHandler;
use crate::modules::rsvps::use_cases::submit_rsvp::form_port::FormSubmitter;
use crate::modules::rsvps::use_cases::submit_rsvp::handler::SubmitRsvpHandler;
use crate::modules::rsvps::use_cases::sync_guest_list::handler::{
    GuestListSynchronizer, SyncSettings,
};
use crate::modules::rsvps::use_cases::sync_guest_list::sheet_port::GuestSheetSource;
use crate::shared::infrastructure::local_store::LocalStore;
use crate::shared::infrastructure::notifier::RsvpNotifier;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub submit_handler: Arc<SubmitRsvpHandler>,
    pub guest_list: Arc<GuestListSynchronizer>,
    pub local_entries: Arc<LocalEntriesHandler>,
}

/// Outbound adapters the handlers are wired to.
pub struct Adapters {
    pub form: Arc<dyn FormSubmitter>,
    pub sheet: Arc<dyn GuestSheetSource>,
    pub store: Arc<dyn LocalStore>,
}

impl AppState {
    pub fn compose(
        adapters: Adapters,
        notifier: RsvpNotifier,
        settings: SyncSettings,
        max_guests: u32,
    ) -> Self {
        let local_entries = LocalEntries::new(adapters.store);
        let guest_list = Arc::new(GuestListSynchronizer::new(
            adapters.sheet,
            local_entries.clone(),
            settings,
        ));
        let submit_handler = Arc::new(SubmitRsvpHandler::new(
            adapters.form,
            local_entries.clone(),
            guest_list.clone(),
            notifier,
            max_guests,
        ));
        let local_entries = Arc::new(LocalEntriesHandler::new(local_entries, guest_list.clone()));
        Self {
            submit_handler,
            guest_list,
            local_entries,
        }
    }
}
