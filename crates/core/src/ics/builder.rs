//! Single-event iCalendar document generation.

use chrono::{DateTime, TimeZone, Utc};
use ics::components::Property;
use ics::properties::{
    CalScale, Categories, Description, DtEnd, DtStart, Location, Method, Sequence, Summary,
};
use ics::{Event, ICalendar};

use crate::events::EventRecord;

use super::escape::ics_escape;

/// Product identifier written to every document.
pub const PRODUCT_ID: &str = "-//Shipboard//Cruise Events//EN";

/// Calendar name used when none is configured.
pub const DEFAULT_CALENDAR_NAME: &str = "Shipboard";

/// Formats a timestamp as an RFC 5545 UTC date-time (`YYYYMMDDTHHMMSSZ`).
pub fn format_ics_timestamp<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String {
    timestamp
        .with_timezone(&Utc)
        .format("%Y%m%dT%H%M%SZ")
        .to_string()
}

/// Renders events into `.ics` documents under a fixed calendar name.
#[derive(Debug, Clone)]
pub struct IcsDocumentBuilder {
    calendar_name: String,
}

impl Default for IcsDocumentBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_CALENDAR_NAME)
    }
}

impl IcsDocumentBuilder {
    pub fn new(calendar_name: impl Into<String>) -> Self {
        Self {
            calendar_name: calendar_name.into(),
        }
    }

    pub fn calendar_name(&self) -> &str {
        &self.calendar_name
    }

    /// Builds a complete VCALENDAR document holding one VEVENT.
    ///
    /// Text values are escaped exactly once here; callers pass raw fields.
    /// The `ics` crate writes CRLF line endings and folds content lines at
    /// 75 octets.
    pub fn build(&self, event: &EventRecord, generated_at: DateTime<Utc>) -> String {
        let mut calendar = ICalendar::new("2.0", PRODUCT_ID);
        calendar.push(Property::new(
            "X-WR-CALNAME",
            ics_escape(&self.calendar_name),
        ));
        calendar.push(Method::new("PUBLISH"));
        calendar.push(CalScale::new("GREGORIAN"));
        calendar.add_event(to_vevent(event, generated_at));

        calendar.to_string()
    }
}

fn to_vevent(event: &EventRecord, generated_at: DateTime<Utc>) -> Event<'static> {
    let mut vevent = Event::new(ics_escape(&event.uid), format_ics_timestamp(&generated_at));
    vevent.push(DtStart::new(format_ics_timestamp(&event.start_time)));
    vevent.push(DtEnd::new(format_ics_timestamp(&event.end_time)));
    vevent.push(Summary::new(ics_escape(&event.title)));
    vevent.push(Description::new(ics_escape(&event.description)));
    vevent.push(Categories::new(ics_escape(&event.event_type)));
    vevent.push(Location::new(ics_escape(&event.location)));
    vevent.push(Sequence::new("0"));
    vevent
}

/// Builds a document with the default calendar name.
pub fn build_ics(event: &EventRecord, generated_at: DateTime<Utc>) -> String {
    IcsDocumentBuilder::default().build(event, generated_at)
}
