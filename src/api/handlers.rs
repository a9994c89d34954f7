//! API handlers

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::api::AppState;
use crate::model::DeadlineRecord;
use crate::Error;

/// Deadline data changes on an election-cycle timescale; successful
/// responses are cacheable for one hour.
pub const CACHE_CONTROL_VALUE: &str = "public, max-age=3600";

/// All registration deadlines, one object per state, keys in the order
/// the frontend grid expects
pub async fn deadlines(
    State(state): State<AppState>,
) -> Result<Response, (StatusCode, String)> {
    let records: Vec<DeadlineRecord> = state.store.fetch_all().await.map_err(|e| {
        tracing::error!(error = %e, "failed to fetch registration deadlines");
        (
            status_for(&e),
            "registration deadline data is currently unavailable".to_string(),
        )
    })?;

    Ok((
        [(header::CACHE_CONTROL, CACHE_CONTROL_VALUE)],
        Json(records),
    )
        .into_response())
}

fn status_for(error: &Error) -> StatusCode {
    if error.is_unavailable() {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Health check with database reachability
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let status = match state.store.ping().await {
        Ok(()) => "healthy",
        Err(e) => {
            tracing::warn!(error = %e, "database unreachable");
            "degraded"
        }
    };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
