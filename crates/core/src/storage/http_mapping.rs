//! Pure functions for mapping core errors to HTTP status codes.

use crate::events::EventError;

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `AlreadyExists` -> 409 (Conflict)
///
/// # Examples
///
/// ```
/// use shipboard_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::event_not_found("sail-away@shipboard");
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::AlreadyExists { .. } => 409,
    }
}

/// Maps an [`EventError`] to an HTTP status code.
///
/// Every validation failure is the client's fault.
pub fn event_error_to_status_code(error: &EventError) -> u16 {
    match error {
        EventError::EmptyUid
        | EventError::EmptyTitle
        | EventError::TitleTooLong
        | EventError::InvalidTimeRange => 400,
    }
}
