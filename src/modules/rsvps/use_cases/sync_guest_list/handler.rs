// Guest list synchronizer: the read side of the rsvps context.
//
// Responsibilities
// - Fetch the sheet, project it, and replace the displayed list and total.
// - Own the view flags (loading, success, error) and the timers that clear or re-check them.
// - Remember the last fetched sheet, so a confirmation can wait for a new row rather than an old one.
// - After shutdown, abort pending timers and ignore fetch results that arrive late.
//
// Concurrent syncs are not cancelled; whichever completes last wins.

use crate::modules::rsvps::adapters::outbound::local_entries::LocalEntries;
use crate::modules::rsvps::core::entry::RsvpEntry;
use crate::modules::rsvps::core::guest_list::{GuestListView, count_email};
use crate::modules::rsvps::core::sheet::parse_guest_sheet;
use crate::modules::rsvps::use_cases::sync_guest_list::sheet_port::{GuestSheetSource, SheetError};
use chrono::Utc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncSettings {
    pub confirmation_delay: Duration,
    pub confirmation_attempts: u32,
    pub success_display: Duration,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            confirmation_delay: Duration::from_secs(5),
            confirmation_attempts: 3,
            success_display: Duration::from_secs(5),
        }
    }
}

pub struct GuestListSynchronizer {
    sheet: Arc<dyn GuestSheetSource>,
    local_entries: LocalEntries,
    settings: SyncSettings,
    view: RwLock<GuestListView>,
    confirmed: RwLock<Vec<RsvpEntry>>,
    timers: Mutex<Vec<JoinHandle<()>>>,
    closed: AtomicBool,
}

impl GuestListSynchronizer {
    pub fn new(
        sheet: Arc<dyn GuestSheetSource>,
        local_entries: LocalEntries,
        settings: SyncSettings,
    ) -> Self {
        Self {
            sheet,
            local_entries,
            settings,
            view: RwLock::new(GuestListView::default()),
            confirmed: RwLock::new(Vec::new()),
            timers: Mutex::new(Vec::new()),
            closed: AtomicBool::new(false),
        }
    }

    pub async fn view(&self) -> GuestListView {
        self.view.read().await.clone()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    pub async fn sync(&self) -> Result<(), SheetError> {
        if self.is_closed() {
            return Ok(());
        }
        self.view.write().await.begin_fetch();

        let fetched = self.sheet.fetch().await;
        if self.is_closed() {
            debug!("ignoring guest sheet result after shutdown");
            self.view.write().await.is_loading = false;
            return Ok(());
        }

        let local = self.local_entries.load_or_empty().await;
        let mut view = self.view.write().await;
        view.is_loading = false;
        let outcome = match fetched {
            Ok(payload) => {
                let entries = parse_guest_sheet(&payload, Utc::now());
                *self.confirmed.write().await = entries.clone();
                view.replace_entries(entries);
                info!(
                    entries = view.entries.len(),
                    total_guests = view.total_guests,
                    "guest list synced"
                );
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "failed to load guest list");
                view.fail_fetch(err.user_message());
                Err(err)
            }
        };
        view.refresh_pending(&local);
        outcome
    }

    /// Optimistic update after a local submission: shows the local list until the next sync.
    pub async fn show_local(&self, local: Vec<RsvpEntry>) {
        let mut view = self.view.write().await;
        view.refresh_pending(&local);
        view.replace_entries(local);
    }

    /// Recomputes the pending report against `local` without touching the displayed list.
    pub async fn refresh_pending(&self, local: &[RsvpEntry]) {
        self.view.write().await.refresh_pending(local);
    }

    pub async fn report_error(&self, message: impl Into<String>) {
        self.view.write().await.error = Some(message.into());
    }

    pub async fn flash_success(self: &Arc<Self>) {
        if self.is_closed() {
            return;
        }
        self.view.write().await.is_success = true;

        let this = Arc::clone(self);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(this.settings.success_display).await;
            if !this.is_closed() {
                this.view.write().await.is_success = false;
            }
        });
        self.track(handle).await;
    }

    /// Rows under `email` in the last successfully fetched sheet.
    pub async fn confirmed_count(&self, email: &str) -> usize {
        count_email(&self.confirmed.read().await, email)
    }

    /// Re-fetches after the configured delay, then keeps polling at the same interval until the
    /// sheet holds more than `baseline` rows under `email` or the attempts run out.
    pub async fn schedule_confirmation(self: &Arc<Self>, email: String, baseline: usize) {
        if self.is_closed() {
            return;
        }
        let this = Arc::clone(self);
        let handle = tokio::spawn(async move {
            for attempt in 1..=this.settings.confirmation_attempts {
                tokio::time::sleep(this.settings.confirmation_delay).await;
                if this.is_closed() {
                    return;
                }
                if this.sync().await.is_ok() && this.confirmed_count(&email).await > baseline {
                    info!(attempt, "submission visible in guest sheet");
                    return;
                }
                debug!(attempt, "submission not yet visible in guest sheet");
            }
            warn!(
                attempts = this.settings.confirmation_attempts,
                "submission still not visible in guest sheet"
            );
        });
        self.track(handle).await;
    }

    pub async fn shutdown(&self) {
        self.closed.store(true, Ordering::SeqCst);
        let mut timers = self.timers.lock().await;
        for handle in timers.drain(..) {
            handle.abort();
        }
        info!("guest list synchronizer stopped");
    }

    async fn track(&self, handle: JoinHandle<()>) {
        let mut timers = self.timers.lock().await;
        timers.retain(|pending| !pending.is_finished());
        timers.push(handle);
    }
}
