use thiserror::Error;

/// Errors that can occur when validating an event.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("Event UID cannot be empty")]
    EmptyUid,
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event title too long (max 200 characters)")]
    TitleTooLong,
    #[error("End time must be after or equal to start time")]
    InvalidTimeRange,
}
