//! In-memory request store for local development and tests.

use crate::error::StoreError;
use crate::types::{NewRequest, Request, StatusUpdate};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// In-memory request table. Data is lost on restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    rows: Arc<RwLock<Vec<Request>>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_request(&self, mobile: &str, code: &str) -> Result<(), StoreError> {
        let new = NewRequest::new(mobile, code);
        let row = Request {
            id: Uuid::new_v4().to_string(),
            mobile: new.mobile,
            code: new.code,
            status: new.status,
            payload: new.payload,
            created_at: new.created_at,
            updated_at: new.updated_at,
        };

        debug!(id = %row.id, code = %row.code, "Memory store: inserted request");
        self.rows.write().await.push(row);
        Ok(())
    }

    pub async fn get_requests(&self) -> Result<Vec<Request>, StoreError> {
        let mut rows = self.rows.read().await.clone();
        // Stable sort keeps insertion order for identical timestamps; reverse
        // first so the later insert wins ties.
        rows.reverse();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    pub async fn get_by_code(&self, code: &str) -> Result<Option<Request>, StoreError> {
        let code = code.to_uppercase();
        Ok(self
            .get_requests()
            .await?
            .into_iter()
            .find(|r| r.code == code))
    }

    pub async fn update_request_status(&self, id: &str, status: &str) -> Result<(), StoreError> {
        let update = StatusUpdate::new(status);
        let mut rows = self.rows.write().await;

        match rows.iter_mut().find(|r| r.id == id) {
            Some(row) => {
                row.status = update.status;
                row.updated_at = Some(update.updated_at);
            }
            None => debug!(id = %id, "Memory store: status update matched no rows"),
        }

        Ok(())
    }

    #[cfg(test)]
    pub(crate) async fn count(&self) -> usize {
        self.rows.read().await.len()
    }
}
