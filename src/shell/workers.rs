// Background workers spawned by the composition root.

use crate::modules::rsvps::use_cases::sync_guest_list::handler::GuestListSynchronizer;
use crate::shared::infrastructure::notifier::{RsvpEvent, RsvpNotifier};
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Loads the guest list once, then re-syncs on every RSVP notification until the synchronizer
/// shuts down or the channel closes.
pub fn spawn_guest_list_refresher(
    guest_list: Arc<GuestListSynchronizer>,
    notifier: &RsvpNotifier,
) -> JoinHandle<()> {
    let mut events = notifier.subscribe();
    tokio::spawn(async move {
        // Failures are logged and shown on the view by the synchronizer.
        let _ = guest_list.sync().await;
        loop {
            match events.recv().await {
                Ok(RsvpEvent::Updated) => debug!("rsvp update received"),
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "guest list refresher lagged behind notifications");
                }
                Err(RecvError::Closed) => break,
            }
            if guest_list.is_closed() {
                break;
            }
            let _ = guest_list.sync().await;
        }
        info!("guest list refresher stopped");
    })
}
