//! Health check endpoints for Kubernetes-style probes.

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /livez - Basic liveness probe.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - Liveness plus a summary of the running sailing.
#[axum::debug_handler]
pub async fn healthz(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "cruise_start": state.cruise.start_date(),
        "cruise_length_in_days": state.cruise.length_in_days(),
        "calendar_name": state.ics.calendar_name(),
    }))
}
