//! Cruise day selection.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shipboard_core::cruise::{
    cruise_day_date, cruise_day_for_date, resolve_cruise_day, CruiseDay, DaySelector,
};
use shipboard_core::serde::deserialize_optional_string;

use crate::state::AppState;

/// Query parameters selecting a cruise day.
///
/// `day` is a weekday name (`tue`), a cruise day number (`3`) or absent
/// for today.
#[derive(Debug, Default, Deserialize)]
pub struct DayQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub day: Option<String>,
}

impl DayQuery {
    pub fn selector(&self) -> DaySelector {
        DaySelector::from_query(self.day.as_deref())
    }
}

/// Response body for GET /api/days.
#[derive(Debug, Serialize)]
pub struct DaysResponse {
    pub cruise_day: i64,
    /// Calendar date of the selected cruise day.
    pub date: Option<NaiveDate>,
    /// Cruise day the current date falls on, `None` outside the sailing.
    pub today: Option<i64>,
    pub days: Vec<CruiseDay>,
}

/// Resolve the selected cruise day (GET /api/days).
pub async fn list_days(
    State(state): State<AppState>,
    Query(query): Query<DayQuery>,
) -> Json<DaysResponse> {
    let selector = query.selector();
    let now = state.now();
    let resolved = resolve_cruise_day(&selector, &state.cruise, &now);

    tracing::debug!(selector = ?selector, cruise_day = resolved.cruise_day, "Resolved cruise day");

    Json(DaysResponse {
        cruise_day: resolved.cruise_day,
        date: cruise_day_date(&state.cruise, resolved.cruise_day),
        today: cruise_day_for_date(&state.cruise, now.date_naive()),
        days: resolved.days,
    })
}
