// Submit command handler orchestrates the write flow.
//
// Responsibilities
// - Call the decider; invalid input stops here with nothing sent and nothing written.
// - Deliver the payload to the form endpoint and keep the outcome.
// - Record a local entry whatever the delivery outcome, and show it optimistically.
// - Notify subscribers after a successful local write.
// - On delivery, flash the success flag and schedule the confirmation re-fetch.

use crate::modules::rsvps::adapters::outbound::local_entries::LocalEntries;
use crate::modules::rsvps::core::entry::{EntrySource, RsvpEntry};
use crate::modules::rsvps::use_cases::submit_rsvp::command::SubmitRsvp;
use crate::modules::rsvps::use_cases::submit_rsvp::decide::decide_submit;
use crate::modules::rsvps::use_cases::submit_rsvp::decision::{
    Decision, ValidatedRsvp, ValidationErrors,
};
use crate::modules::rsvps::use_cases::submit_rsvp::form_port::{
    FormPayload, FormSubmitError, FormSubmitter,
};
use crate::modules::rsvps::use_cases::sync_guest_list::handler::GuestListSynchronizer;
use crate::shared::infrastructure::local_store::LocalStoreError;
use crate::shared::infrastructure::notifier::{RsvpEvent, RsvpNotifier};
use chrono::Local;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

pub const DELIVERY_ERROR_MESSAGE: &str =
    "There was a problem submitting your RSVP. Please try again.";
pub const STORAGE_ERROR_MESSAGE: &str = "Failed to save your RSVP locally. Please try again.";

const LOCAL_DATE_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

/// What happened to an accepted submission. Delivery and storage failures do not abort the flow.
#[derive(Debug)]
pub struct SubmitReceipt {
    pub entry: RsvpEntry,
    pub delivery: Result<(), FormSubmitError>,
    pub storage: Result<(), LocalStoreError>,
}

impl SubmitReceipt {
    pub fn delivered(&self) -> bool {
        self.delivery.is_ok()
    }

    pub fn stored(&self) -> bool {
        self.storage.is_ok()
    }

    pub fn error_message(&self) -> Option<&'static str> {
        if !self.delivered() {
            Some(DELIVERY_ERROR_MESSAGE)
        } else if !self.stored() {
            Some(STORAGE_ERROR_MESSAGE)
        } else {
            None
        }
    }
}

pub struct SubmitRsvpHandler {
    form: Arc<dyn FormSubmitter>,
    local_entries: LocalEntries,
    guest_list: Arc<GuestListSynchronizer>,
    notifier: RsvpNotifier,
    max_guests: u32,
}

impl SubmitRsvpHandler {
    pub fn new(
        form: Arc<dyn FormSubmitter>,
        local_entries: LocalEntries,
        guest_list: Arc<GuestListSynchronizer>,
        notifier: RsvpNotifier,
        max_guests: u32,
    ) -> Self {
        Self {
            form,
            local_entries,
            guest_list,
            notifier,
            max_guests,
        }
    }

    pub async fn handle(&self, command: SubmitRsvp) -> Result<SubmitReceipt, ApplicationError> {
        let rsvp = match decide_submit(command, self.max_guests) {
            Decision::Accepted(rsvp) => rsvp,
            Decision::Rejected(errors) => {
                warn!(%errors, "rsvp rejected");
                return Err(errors.into());
            }
        };

        let confirmed_before = self.guest_list.confirmed_count(&rsvp.email).await;
        let delivery = self.form.submit(&FormPayload::from(&rsvp)).await;
        if let Err(err) = &delivery {
            error!(error = %err, "error submitting rsvp form");
        }

        let entry = local_entry(&rsvp);
        let (entries, storage) = self.local_entries.prepend(entry.clone()).await;
        self.guest_list.show_local(entries).await;

        match &storage {
            Ok(()) => {
                self.notifier.publish(RsvpEvent::Updated);
            }
            Err(err) => {
                error!(error = %err, "failed to save rsvp locally");
                self.guest_list.report_error(STORAGE_ERROR_MESSAGE).await;
            }
        }

        if delivery.is_ok() {
            info!(entry_id = %entry.id, guests = entry.guest_count, "rsvp submitted");
            self.guest_list.flash_success().await;
            self.guest_list
                .schedule_confirmation(entry.email.clone(), confirmed_before)
                .await;
        } else {
            self.guest_list.report_error(DELIVERY_ERROR_MESSAGE).await;
        }

        Ok(SubmitReceipt {
            entry,
            delivery,
            storage,
        })
    }
}

fn local_entry(rsvp: &ValidatedRsvp) -> RsvpEntry {
    RsvpEntry {
        id: Uuid::now_v7().to_string(),
        name: rsvp.name.clone(),
        email: rsvp.email.clone(),
        guest_count: rsvp.guest_count,
        message: rsvp.message.clone(),
        date: Local::now().format(LOCAL_DATE_FORMAT).to_string(),
        source: EntrySource::Local,
    }
}
