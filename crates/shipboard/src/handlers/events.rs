//! Event handlers, including the `.ics` download.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use shipboard_core::cruise::resolve_cruise_day;
use shipboard_core::events::{
    filter_events_by_cruise_day, sort_events_by_start, validate_event, EventRecord,
};
use shipboard_core::ics::{ics_filename, ICS_CONTENT_TYPE};
use shipboard_core::storage::RepositoryError;

use crate::{handlers::days::DayQuery, handlers::AppError, models::CreateEvent, state::AppState};

/// Looks up an event, turning a miss into a not-found error.
async fn find_event(state: &AppState, uid: &str) -> Result<EventRecord, AppError> {
    state
        .event_repo
        .get_event(uid)
        .await?
        .ok_or_else(|| RepositoryError::event_not_found(uid).into())
}

/// List events (GET /api/events).
///
/// With a `day` parameter only events running on that cruise day are
/// returned. Results are ordered by start time.
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<DayQuery>,
) -> Result<Json<Vec<EventRecord>>, AppError> {
    let events = state.event_repo.list_events().await?;

    let mut events = if query.day.is_some() {
        let resolved = resolve_cruise_day(&query.selector(), &state.cruise, &state.now());
        filter_events_by_cruise_day(&events, &state.cruise, resolved.cruise_day)
            .into_iter()
            .cloned()
            .collect()
    } else {
        events
    };

    sort_events_by_start(&mut events);

    Ok(Json(events))
}

/// Create a new event (POST /api/events).
pub async fn create_event(
    State(state): State<AppState>,
    Json(payload): Json<CreateEvent>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!(payload = ?payload, "Received create event request");

    let event = payload.into_event();
    validate_event(&event)?;

    state.event_repo.create_event(&event).await?;

    tracing::info!(uid = %event.uid, title = %event.title, "Created new event");

    Ok((StatusCode::CREATED, Json(event)))
}

/// Get a single event (GET /api/events/{uid}).
pub async fn get_event(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<EventRecord>, AppError> {
    find_event(&state, &uid).await.map(Json)
}

/// Delete an event (DELETE /api/events/{uid}).
pub async fn delete_event(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<StatusCode, AppError> {
    state.event_repo.delete_event(&uid).await?;

    tracing::info!(uid = %uid, "Deleted event");

    Ok(StatusCode::NO_CONTENT)
}

/// Download an event as an iCalendar file (GET /api/events/{uid}/ics).
pub async fn download_ics(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = find_event(&state, &uid).await?;

    let body = state.ics.build(&event, state.now().with_timezone(&Utc));
    let disposition = attachment_disposition(&ics_filename(&event.title));

    tracing::debug!(uid = %uid, bytes = body.len(), "Rendered ics document");

    Ok((
        [
            (header::CONTENT_TYPE, ICS_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}

/// Builds a `Content-Disposition: attachment` value for a download.
///
/// Non-ASCII names get an ASCII `filename` fallback plus an RFC 6266
/// `filename*` parameter carrying the percent-encoded UTF-8 name.
fn attachment_disposition(filename: &str) -> String {
    if filename.is_ascii() {
        return format!("attachment; filename=\"{filename}\"");
    }

    let fallback: String = filename
        .chars()
        .map(|c| if c.is_ascii() { c } else { '_' })
        .collect();

    format!(
        "attachment; filename=\"{fallback}\"; filename*=UTF-8''{}",
        urlencoding::encode(filename)
    )
}
