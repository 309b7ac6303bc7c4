use chrono::{DateTime, Utc};
use serde::Deserialize;

use shipboard_core::events::{new_event_uid, EventRecord};
use shipboard_core::serde::deserialize_optional_string;

/// Request payload for creating a new event.
///
/// A blank or missing `uid` gets a generated one.
#[derive(Debug, Deserialize)]
pub struct CreateEvent {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub uid: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub event_type: String,
    #[serde(default)]
    pub location: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl CreateEvent {
    /// Converts the request into an EventRecord. Validation happens separately.
    ///
    /// Text fields have their line breaks normalized to `\n`.
    pub fn into_event(self) -> EventRecord {
        EventRecord {
            uid: self.uid.unwrap_or_else(new_event_uid),
            title: normalize_line_breaks(self.title),
            description: normalize_line_breaks(self.description),
            event_type: normalize_line_breaks(self.event_type),
            location: normalize_line_breaks(self.location),
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }
}

/// Rewrites `\r\n` and lone `\r` as `\n`.
fn normalize_line_breaks(text: String) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text
    }
}
