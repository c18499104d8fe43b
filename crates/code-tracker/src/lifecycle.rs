//! Request lifecycle: creation from a mobile number and privileged status transitions.

use crate::codes::generate_code;
use crate::error::TrackerError;
use crate::mobile::parse_mobile;
use requests_store::{Request, Store};
use tracing::{info, warn};

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Code the caller uses for later lookups
    pub code: String,
    /// Canonical digits-only mobile number that was stored
    pub mobile: String,
}

/// Register a new request for `raw_mobile`.
///
/// Invalid numbers are rejected before the store is touched. Store failures are
/// returned as-is; nothing is retried.
pub async fn submit(store: &Store, raw_mobile: &str) -> Result<Submission, TrackerError> {
    let mobile = parse_mobile(raw_mobile)?;
    let code = generate_code();

    store.add_request(&mobile, &code).await.map_err(|e| {
        warn!(error = %e, "Failed to store request");
        TrackerError::from(e)
    })?;

    info!(code = %code, "Request registered");
    Ok(Submission { code, mobile })
}

/// All requests, most recent first.
pub async fn list_requests(store: &Store) -> Result<Vec<Request>, TrackerError> {
    Ok(store.get_requests().await?)
}

/// Move request `id` to `status`.
///
/// Any non-empty status is accepted. An id matching no request succeeds silently.
pub async fn update_status(store: &Store, id: &str, status: &str) -> Result<(), TrackerError> {
    if id.trim().is_empty() {
        return Err(TrackerError::Validation("Request id is required".into()));
    }
    if status.trim().is_empty() {
        return Err(TrackerError::Validation("Status is required".into()));
    }

    store.update_request_status(id, status).await.map_err(|e| {
        warn!(id = %id, error = %e, "Failed to update request status");
        TrackerError::from(e)
    })?;

    info!(id = %id, status = %status, "Request status updated");
    Ok(())
}
