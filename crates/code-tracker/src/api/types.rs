//! API request and response types.

use crate::session::AuthSession;
use requests_store::Request;
use serde::{Deserialize, Serialize};

/// Request to register a mobile number.
///
/// `mobile` is kept loose so a missing or non-string value is reported as a
/// validation error rather than rejected by the extractor.
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub mobile: Option<serde_json::Value>,
}

/// Response after registering a mobile number.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub code: String,
    /// Display form of the stored number
    pub mobile: String,
}

/// Request to look up a code.
///
/// `code` is kept loose so a non-string value is reported as missing rather
/// than rejected by the extractor.
#[derive(Debug, Deserialize)]
pub struct TrackRequest {
    #[serde(default)]
    pub code: Option<serde_json::Value>,
}

/// Lookup result: `{"found": false}` or `{"found": true, "entry": {...}}`.
#[derive(Debug, Serialize)]
pub struct TrackResponse {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<Request>,
}

/// Admin login request.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub password: Option<serde_json::Value>,
}

/// Admin login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub session: AuthSession,
}

/// Admin listing of all requests.
#[derive(Debug, Serialize)]
pub struct RequestsResponse {
    pub requests: Vec<Request>,
    pub total: usize,
}

/// Status transition request.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    #[serde(default)]
    pub status: Option<serde_json::Value>,
}

/// Response after a status transition.
#[derive(Debug, Serialize)]
pub struct UpdateStatusResponse {
    pub success: bool,
    pub id: String,
    pub status: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub store_configured: bool,
}
