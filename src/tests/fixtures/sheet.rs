// Shared test fixture for sheet payloads in the Apps Script shape.

use crate::modules::rsvps::core::sheet::SHEET_DATA_KEY;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Value, json};

pub fn standard_header() -> Vec<&'static str> {
    vec!["Full Name", "Email", "Number Of Guests", "Message", "Timestamp"]
}

/// Payload with the standard header followed by `rows`.
pub fn sheet_payload(rows: Vec<Vec<&str>>) -> Value {
    let mut table = vec![standard_header()];
    table.extend(rows);
    json!({ SHEET_DATA_KEY: table })
}

pub fn fixed_fetch_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}
