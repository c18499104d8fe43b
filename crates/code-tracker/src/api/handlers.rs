//! HTTP request handlers.

use super::types::{
    HealthResponse, LoginRequest, LoginResponse, RequestsResponse, SubmitRequest,
    SubmitResponse, TrackRequest, TrackResponse, UpdateStatusRequest, UpdateStatusResponse,
};
use super::AppState;
use crate::error::TrackerError;
use crate::lifecycle;
use crate::lookup::{lookup, LookupOutcome};
use crate::mobile::format_mobile;
use crate::session;
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use tracing::info;

/// String view of a loosely typed JSON field; anything else reads as missing.
fn str_field(value: &Option<Value>) -> &str {
    value.as_ref().and_then(Value::as_str).unwrap_or_default()
}

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        store_configured: state.store.is_configured(),
    })
}

/// Register a mobile number and hand back its code.
pub async fn submit_request(
    State(state): State<AppState>,
    Json(request): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, TrackerError> {
    let submission = lifecycle::submit(&state.store, str_field(&request.mobile)).await?;

    Ok(Json(SubmitResponse {
        code: submission.code,
        mobile: format_mobile(&submission.mobile),
    }))
}

/// Look up a code's request.
pub async fn track_code(
    State(state): State<AppState>,
    Json(request): Json<TrackRequest>,
) -> Result<Json<TrackResponse>, TrackerError> {
    let code = request.code.as_ref().and_then(|v| v.as_str());

    let outcome = lookup(&state.store, code).await?;
    let found = outcome.is_found();
    let entry = match outcome {
        LookupOutcome::Found(entry) => Some(entry),
        LookupOutcome::NotFound => None,
    };

    Ok(Json(TrackResponse { found, entry }))
}

/// Check the admin password.
pub async fn admin_login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, TrackerError> {
    let session = session::admin_login(
        state.admin_password.as_deref(),
        request.password.as_ref().and_then(Value::as_str),
    )?;

    Ok(Json(LoginResponse {
        success: session.is_authenticated,
        message: "Login successful".to_string(),
        session,
    }))
}

/// List all requests, most recent first.
pub async fn list_requests(
    State(state): State<AppState>,
) -> Result<Json<RequestsResponse>, TrackerError> {
    let requests = lifecycle::list_requests(&state.store).await?;
    let total = requests.len();

    Ok(Json(RequestsResponse { requests, total }))
}

/// Transition a request's status.
pub async fn update_request_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<UpdateStatusResponse>, TrackerError> {
    let status = str_field(&request.status);
    info!(id = %id, status = %status, "Status update requested");
    lifecycle::update_status(&state.store, &id, status).await?;

    Ok(Json(UpdateStatusResponse {
        success: true,
        id,
        status: status.to_string(),
    }))
}
