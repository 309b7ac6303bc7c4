use crate::cruise::{cruise_day_date, CruiseConfig};

use super::error::EventError;
use super::types::EventRecord;

/// Maximum title length in characters.
const MAX_TITLE_LEN: usize = 200;

/// Validates an event before creation.
pub fn validate_event(event: &EventRecord) -> Result<(), EventError> {
    if event.uid.trim().is_empty() {
        return Err(EventError::EmptyUid);
    }
    if event.title.trim().is_empty() {
        return Err(EventError::EmptyTitle);
    }
    if event.title.chars().count() > MAX_TITLE_LEN {
        return Err(EventError::TitleTooLong);
    }
    if event.end_time < event.start_time {
        return Err(EventError::InvalidTimeRange);
    }
    Ok(())
}

/// Filters events that run at some point on the given cruise day.
///
/// Returns nothing when the cruise day has no calendar date.
pub fn filter_events_by_cruise_day<'a>(
    events: &'a [EventRecord],
    config: &CruiseConfig,
    cruise_day: i64,
) -> Vec<&'a EventRecord> {
    let Some(date) = cruise_day_date(config, cruise_day) else {
        return Vec::new();
    };

    events.iter().filter(|event| event.occurs_on(date)).collect()
}

/// Sorts events by start time, then by title.
pub fn sort_events_by_start(events: &mut [EventRecord]) {
    events.sort_by(|a, b| {
        a.start_time
            .cmp(&b.start_time)
            .then_with(|| a.title.cmp(&b.title))
    });
}
