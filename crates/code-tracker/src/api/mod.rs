//! HTTP API for the code tracker.

mod handlers;
mod middleware;
mod types;

pub use handlers::*;
pub use middleware::logging_middleware;
pub use types::*;

use axum::{
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use requests_store::Store;
use secrecy::SecretString;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Request store handle
    pub store: Arc<Store>,
    /// Admin password, if configured
    pub admin_password: Option<Arc<SecretString>>,
}

impl AppState {
    /// Create new application state.
    pub fn new(store: Store, admin_password: Option<SecretString>) -> Self {
        Self {
            store: Arc::new(store),
            admin_password: admin_password.map(Arc::new),
        }
    }
}

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        // Public endpoints
        .route("/api/requests", post(handlers::submit_request))
        .route("/api/track", post(handlers::track_code))
        // Admin endpoints (login result is advisory; listing/updates are not gated here)
        .route("/api/admin/login", post(handlers::admin_login))
        .route("/api/admin/requests", get(handlers::list_requests))
        .route(
            "/api/admin/requests/:id/status",
            put(handlers::update_request_status),
        )
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
