// Projection of the RSVP sheet into entries.
//
// Purpose
// - Turn the Apps Script payload `{ "GoogleSheetData": [[header...], [row...], ...] }` into remote entries.
//
// Responsibilities
// - Treat a missing table, a non-array table or a header-only table as "no responses yet".
// - Fill placeholders for missing cells and never fail on a single bad row.
// - Never perform input or output.

use crate::modules::rsvps::core::entry::{EntrySource, RsvpEntry};
use crate::modules::rsvps::core::guest_count::guest_count_or_default;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use std::collections::HashMap;

pub const SHEET_DATA_KEY: &str = "GoogleSheetData";

pub const FULL_NAME_COLUMN: &str = "Full Name";
pub const EMAIL_COLUMN: &str = "Email";
pub const GUEST_COUNT_COLUMN: &str = "Number Of Guests";
pub const MESSAGE_COLUMN: &str = "Message";
pub const TIMESTAMP_COLUMN: &str = "Timestamp";

const PLACEHOLDER_NAME: &str = "Guest";

/// Rows of the sheet as text, header first. `None` when the payload has no table at all.
pub fn rows_from_payload(payload: &Value) -> Option<Vec<Vec<String>>> {
    let table = payload.get(SHEET_DATA_KEY)?.as_array()?;
    Some(
        table
            .iter()
            .map(|row| {
                row.as_array()
                    .map(|cells| cells.iter().map(cell_text).collect())
                    .unwrap_or_default()
            })
            .collect(),
    )
}

fn cell_text(cell: &Value) -> String {
    match cell {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        other => other.to_string(),
    }
}

pub fn project_rows(rows: &[Vec<String>], fetched_at: DateTime<Utc>) -> Vec<RsvpEntry> {
    let Some((header, data)) = rows.split_first() else {
        return Vec::new();
    };

    data.iter()
        .enumerate()
        .map(|(idx, row)| {
            let fields: HashMap<&str, &str> = header
                .iter()
                .enumerate()
                .map(|(i, column)| {
                    (
                        column.as_str(),
                        row.get(i).map(String::as_str).unwrap_or(""),
                    )
                })
                .collect();
            let field = |column: &str| fields.get(column).copied().filter(|v| !v.is_empty());

            let name = field(FULL_NAME_COLUMN);
            let email = field(EMAIL_COLUMN);
            let id_suffix = email
                .or(name)
                .map(str::to_string)
                .unwrap_or_else(|| idx.to_string());

            RsvpEntry {
                id: format!("api-{idx}-{id_suffix}"),
                name: name.unwrap_or(PLACEHOLDER_NAME).to_string(),
                email: email
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("no-email-{idx}@example.com")),
                guest_count: guest_count_or_default(field(GUEST_COUNT_COLUMN).unwrap_or("")),
                message: field(MESSAGE_COLUMN).map(str::to_string),
                date: field(TIMESTAMP_COLUMN)
                    .map(str::to_string)
                    .unwrap_or_else(|| fetched_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
                source: EntrySource::Remote,
            }
        })
        .collect()
}

pub fn parse_guest_sheet(payload: &Value, fetched_at: DateTime<Utc>) -> Vec<RsvpEntry> {
    rows_from_payload(payload)
        .map(|rows| project_rows(&rows, fetched_at))
        .unwrap_or_default()
}
