use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A scheduled shipboard event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Globally unique identifier, also used as the iCalendar `UID`.
    pub uid: String,
    pub title: String,
    pub description: String,
    /// Category label such as "Entertainment" or "Dining".
    pub event_type: String,
    pub location: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl EventRecord {
    /// Creates an event with a fresh UID and empty description and location.
    pub fn new(
        title: impl Into<String>,
        event_type: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        Self {
            uid: new_event_uid(),
            title: title.into(),
            description: String::new(),
            event_type: event_type.into(),
            location: String::new(),
            start_time,
            end_time,
        }
    }

    /// Sets a specific UID for this event (useful for testing).
    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = uid.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Returns true if the event is running at any point on the given (UTC) date.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        self.start_time.date_naive() <= date && self.end_time.date_naive() >= date
    }
}

/// Generates a UID for a newly created event.
pub fn new_event_uid() -> String {
    format!("{}@shipboard", Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_new_event_has_unique_uid() {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 17, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 6, 1, 18, 0, 0).unwrap();

        let a = EventRecord::new("Sail Away Party", "Entertainment", start, end);
        let b = EventRecord::new("Sail Away Party", "Entertainment", start, end);

        assert_ne!(a.uid, b.uid);
        assert!(a.uid.ends_with("@shipboard"));
        assert!(a.description.is_empty());
        assert!(a.location.is_empty());
    }

    #[test]
    fn test_builder_methods() {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 17, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 6, 1, 18, 0, 0).unwrap();

        let event = EventRecord::new("Sail Away Party", "Entertainment", start, end)
            .with_uid("sail-away")
            .with_description("Drinks by the pool")
            .with_location("Lido Deck");

        assert_eq!(event.uid, "sail-away");
        assert_eq!(event.description, "Drinks by the pool");
        assert_eq!(event.location, "Lido Deck");
    }

    #[test]
    fn test_occurs_on_spans_midnight() {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 22, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 6, 2, 1, 0, 0).unwrap();
        let event = EventRecord::new("Late Night Disco", "Entertainment", start, end);

        assert!(!event.occurs_on(make_date(2024, 5, 31)));
        assert!(event.occurs_on(make_date(2024, 6, 1)));
        assert!(event.occurs_on(make_date(2024, 6, 2)));
        assert!(!event.occurs_on(make_date(2024, 6, 3)));
    }
}
