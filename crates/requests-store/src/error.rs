//! Store adapter errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store not initialized")]
    NotInitialized,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

