// Guest list view state.
//
// Purpose
// - Hold what the site displays: the current entry list, its total, and the loading/success/error flags.
//
// Responsibilities
// - Keep `total_guests` and `unique_rsvps` in step with `entries` on every mutation.
// - Report local submissions the sheet has not confirmed yet, keyed by normalized email.

use crate::modules::rsvps::core::entry::{EntrySource, RsvpEntry, normalize_email, total_guests};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestListView {
    pub entries: Vec<RsvpEntry>,
    pub total_guests: u64,
    pub unique_rsvps: u64,
    pub is_loading: bool,
    pub is_success: bool,
    pub error: Option<String>,
    pub pending: Vec<RsvpEntry>,
}

impl GuestListView {
    pub fn replace_entries(&mut self, entries: Vec<RsvpEntry>) {
        self.total_guests = total_guests(&entries);
        self.unique_rsvps = entries.len() as u64;
        self.entries = entries;
    }

    pub fn clear_entries(&mut self) {
        self.replace_entries(Vec::new());
    }

    pub fn begin_fetch(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    pub fn fail_fetch(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.clear_entries();
    }

    pub fn refresh_pending(&mut self, local: &[RsvpEntry]) {
        self.pending = pending_local(local, &self.entries);
    }
}

/// Local entries whose email is not yet among the remote entries. Remote wins on a key match.
pub fn pending_local(local: &[RsvpEntry], displayed: &[RsvpEntry]) -> Vec<RsvpEntry> {
    let confirmed: HashSet<String> = displayed
        .iter()
        .filter(|entry| entry.source == EntrySource::Remote)
        .map(|entry| normalize_email(&entry.email))
        .collect();
    local
        .iter()
        .filter(|entry| !confirmed.contains(&normalize_email(&entry.email)))
        .cloned()
        .collect()
}

/// Number of entries submitted under `email`, compared normalized.
pub fn count_email(entries: &[RsvpEntry], email: &str) -> usize {
    let wanted = normalize_email(email);
    entries
        .iter()
        .filter(|entry| normalize_email(&entry.email) == wanted)
        .count()
}

#[cfg(test)]
mod guest_list_view_tests {
    use super::*;
    use crate::tests::fixtures::entries::RsvpEntryBuilder;
    use rstest::{fixture, rstest};

    #[fixture]
    fn remote_entries() -> Vec<RsvpEntry> {
        vec![
            RsvpEntryBuilder::remote()
                .email("jane@x.com")
                .guest_count(2)
                .build(),
            RsvpEntryBuilder::remote()
                .email("john@x.com")
                .guest_count(3)
                .build(),
        ]
    }

    #[rstest]
    fn it_should_keep_the_total_in_step_with_the_entries(remote_entries: Vec<RsvpEntry>) {
        let mut view = GuestListView::default();
        view.replace_entries(remote_entries.clone());
        assert_eq!(view.total_guests, 5);
        assert_eq!(view.unique_rsvps, 2);
        view.replace_entries(remote_entries);
        assert_eq!(view.total_guests, 5);
        assert_eq!(view.unique_rsvps, 2);
        view.clear_entries();
        assert_eq!(view.total_guests, 0);
        assert_eq!(view.unique_rsvps, 0);
        assert!(view.entries.is_empty());
    }

    #[rstest]
    fn it_should_clear_the_list_when_a_fetch_fails(remote_entries: Vec<RsvpEntry>) {
        let mut view = GuestListView::default();
        view.replace_entries(remote_entries);
        view.begin_fetch();
        assert!(view.is_loading);
        view.fail_fetch("offline");
        assert_eq!(view.error.as_deref(), Some("offline"));
        assert!(view.entries.is_empty());
        assert_eq!(view.total_guests, 0);
    }

    #[rstest]
    fn it_should_clear_a_previous_error_when_a_fetch_begins() {
        let mut view = GuestListView::default();
        view.fail_fetch("offline");
        view.begin_fetch();
        assert_eq!(view.error, None);
    }

    #[rstest]
    fn it_should_only_report_unconfirmed_local_entries_as_pending(remote_entries: Vec<RsvpEntry>) {
        let local = vec![
            RsvpEntryBuilder::new().email(" JANE@x.com").build(),
            RsvpEntryBuilder::new().email("ann@x.com").build(),
        ];
        let pending = pending_local(&local, &remote_entries);
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].email, "ann@x.com");
    }

    #[rstest]
    fn it_should_not_confirm_local_entries_against_other_local_entries() {
        let local = vec![RsvpEntryBuilder::new().email("ann@x.com").build()];
        let pending = pending_local(&local, &local);
        assert_eq!(pending.len(), 1);
    }

    #[rstest]
    fn it_should_count_emails_regardless_of_case(mut remote_entries: Vec<RsvpEntry>) {
        remote_entries.push(RsvpEntryBuilder::remote().email(" JOHN@x.com").build());
        assert_eq!(count_email(&remote_entries, "John@X.com"), 2);
        assert_eq!(count_email(&remote_entries, "jane@x.com"), 1);
        assert_eq!(count_email(&remote_entries, "ann@x.com"), 0);
    }
}
