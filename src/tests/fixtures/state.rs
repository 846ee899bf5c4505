// Shared test fixture: the application state wired to in-memory adapters.

use crate::modules::rsvps::adapters::outbound::in_memory_form::InMemoryFormSubmitter;
use crate::modules::rsvps::adapters::outbound::in_memory_sheet::InMemoryGuestSheet;
use crate::modules::rsvps::use_cases::sync_guest_list::handler::SyncSettings;
use crate::shared::infrastructure::local_store::in_memory::InMemoryLocalStore;
use crate::shared::infrastructure::notifier::RsvpNotifier;
use crate::shell::state::{Adapters, AppState};
use std::sync::Arc;
use std::time::Duration;

pub const TICK: Duration = Duration::from_millis(20);
pub const MAX_GUESTS: u32 = 5;

pub struct TestApp {
    pub state: AppState,
    pub form: Arc<InMemoryFormSubmitter>,
    pub sheet: Arc<InMemoryGuestSheet>,
    pub notifier: RsvpNotifier,
}

#[allow(dead_code)]
impl TestApp {
    pub fn new() -> Self {
        Self::with(InMemoryFormSubmitter::new(), InMemoryLocalStore::new())
    }

    /// The form forwards each submission to the sheet, as the real form does.
    pub fn forwarding() -> Self {
        let sheet = Arc::new(InMemoryGuestSheet::new());
        let form = InMemoryFormSubmitter::forwarding_to(sheet.clone());
        Self::wire(form, sheet, InMemoryLocalStore::new())
    }

    pub fn with(form: InMemoryFormSubmitter, store: InMemoryLocalStore) -> Self {
        Self::wire(form, Arc::new(InMemoryGuestSheet::new()), store)
    }

    fn wire(
        form: InMemoryFormSubmitter,
        sheet: Arc<InMemoryGuestSheet>,
        store: InMemoryLocalStore,
    ) -> Self {
        let form = Arc::new(form);
        let notifier = RsvpNotifier::default();
        let state = AppState::compose(
            Adapters {
                form: form.clone(),
                sheet: sheet.clone(),
                store: Arc::new(store),
            },
            notifier.clone(),
            SyncSettings {
                confirmation_delay: TICK,
                confirmation_attempts: 3,
                success_display: TICK * 10,
            },
            MAX_GUESTS,
        );
        Self {
            state,
            form,
            sheet,
            notifier,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
