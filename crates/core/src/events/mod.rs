mod error;
mod operations;
mod types;

pub use error::EventError;
pub use operations::{filter_events_by_cruise_day, sort_events_by_start, validate_event};
pub use types::{new_event_uid, EventRecord};
