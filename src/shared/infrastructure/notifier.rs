// Shared RSVP notification channel.
//
// Producers (the submit handler) and consumers (the refresh worker, any other view) receive the
// same `RsvpNotifier` at composition time instead of listening on an ambient global event.

use tokio::sync::broadcast;
use tracing::debug;

const DEFAULT_CAPACITY: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsvpEvent {
    Updated,
}

#[derive(Debug, Clone)]
pub struct RsvpNotifier {
    sender: broadcast::Sender<RsvpEvent>,
}

impl RsvpNotifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Returns how many subscribers received the event. Zero subscribers is not an error.
    pub fn publish(&self, event: RsvpEvent) -> usize {
        let delivered = self.sender.send(event).unwrap_or(0);
        debug!(?event, delivered, "rsvp notification published");
        delivered
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RsvpEvent> {
        self.sender.subscribe()
    }
}

impl Default for RsvpNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
