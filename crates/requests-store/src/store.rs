//! Store handle selecting the configured backend.

use crate::error::StoreError;
use crate::memory::MemoryStore;
use crate::postgrest::PostgrestStore;
use crate::types::Request;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{info, warn};

/// Storage backend for verification-code requests.
pub enum Store {
    /// Hosted Supabase table via PostgREST
    Postgrest(PostgrestStore),
    /// In-process table (no persistence)
    Memory(MemoryStore),
    /// No endpoint or key configured; every operation fails
    Unconfigured,
}

impl Store {
    /// Build a PostgREST store if both URL and key are present, otherwise an
    /// unconfigured store that rejects every call.
    pub fn from_settings(
        url: Option<&str>,
        api_key: Option<&SecretString>,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let url = url.map(str::trim).filter(|u| !u.is_empty());
        let api_key = api_key.filter(|k| !k.expose_secret().is_empty());

        match (url, api_key) {
            (Some(url), Some(key)) => {
                info!(url = %url, "Using Supabase request store");
                Ok(Store::Postgrest(PostgrestStore::new(
                    url,
                    key.clone(),
                    timeout,
                )?))
            }
            _ => {
                warn!("Supabase URL or key not configured, store operations will fail");
                Ok(Store::Unconfigured)
            }
        }
    }

    /// Force memory store.
    pub fn memory() -> Self {
        Store::Memory(MemoryStore::new())
    }

    /// Whether operations can reach a backend at all.
    pub fn is_configured(&self) -> bool {
        !matches!(self, Store::Unconfigured)
    }

    /// Insert a new request in `registered` state.
    pub async fn add_request(&self, mobile: &str, code: &str) -> Result<(), StoreError> {
        match self {
            Store::Postgrest(s) => s.add_request(mobile, code).await,
            Store::Memory(s) => s.add_request(mobile, code).await,
            Store::Unconfigured => Err(StoreError::NotInitialized),
        }
    }

    /// List all requests, most recent first.
    pub async fn get_requests(&self) -> Result<Vec<Request>, StoreError> {
        match self {
            Store::Postgrest(s) => s.get_requests().await,
            Store::Memory(s) => s.get_requests().await,
            Store::Unconfigured => Err(StoreError::NotInitialized),
        }
    }

    /// Find the request for `code`. `Ok(None)` means no row matched.
    pub async fn get_by_code(&self, code: &str) -> Result<Option<Request>, StoreError> {
        match self {
            Store::Postgrest(s) => s.get_by_code(code).await,
            Store::Memory(s) => s.get_by_code(code).await,
            Store::Unconfigured => Err(StoreError::NotInitialized),
        }
    }

    /// Transition a request to `status`.
    pub async fn update_request_status(&self, id: &str, status: &str) -> Result<(), StoreError> {
        match self {
            Store::Postgrest(s) => s.update_request_status(id, status).await,
            Store::Memory(s) => s.update_request_status(id, status).await,
            Store::Unconfigured => Err(StoreError::NotInitialized),
        }
    }
}
