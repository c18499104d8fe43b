//! Code lookup: resolve a submitted code to its request.

use crate::codes::normalize_code;
use crate::error::TrackerError;
use requests_store::{Request, Store, StoreError};
use tracing::{debug, error};

/// Result of looking up a code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    NotFound,
    Found(Request),
}

impl LookupOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupOutcome::Found(_))
    }
}

/// Look up `raw_code` (case-insensitive).
///
/// A missing row is `LookupOutcome::NotFound`, never an error. Store failures are
/// reported as an internal error without the store's message.
pub async fn lookup(store: &Store, raw_code: Option<&str>) -> Result<LookupOutcome, TrackerError> {
    let code = normalize_code(raw_code.unwrap_or_default())?;

    match store.get_by_code(&code).await {
        Ok(Some(request)) => {
            debug!(code = %code, status = %request.status, "Code found");
            Ok(LookupOutcome::Found(request))
        }
        Ok(None) => {
            debug!(code = %code, "Code not found");
            Ok(LookupOutcome::NotFound)
        }
        Err(StoreError::NotInitialized) => Err(TrackerError::Configuration(
            "Database connection not available".into(),
        )),
        Err(e) => {
            error!(code = %code, error = %e, "Store error during lookup");
            Err(TrackerError::Internal("Database error occurred".into()))
        }
    }
}
