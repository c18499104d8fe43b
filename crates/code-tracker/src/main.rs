//! Code Tracker - Entry point.

use code_tracker::{
    api::{create_router, AppState},
    config::{Config, StoreBackend},
};
use requests_store::Store;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Code Tracker");

    // Initialize storage
    let store = match config.store.backend {
        StoreBackend::Memory => {
            info!("Using in-memory storage (data will be lost on restart)");
            Store::memory()
        }
        StoreBackend::Supabase => match Store::from_settings(
            config.supabase.url.as_deref(),
            config.supabase.key.as_ref(),
            config.supabase.timeout,
        ) {
            Ok(s) => s,
            Err(e) => {
                error!("Failed to create store client: {}", e);
                std::process::exit(1);
            }
        },
    };

    if config.admin.password.is_none() {
        warn!("ADMIN__PASSWORD not set, admin login will be unavailable");
    }

    // Create application state
    let state = AppState::new(store, config.admin.password.clone());

    let app = create_router(state);

    // Bind to address
    let addr = SocketAddr::new(
        config
            .server
            .listen_addr
            .parse()
            .unwrap_or([0, 0, 0, 0].into()),
        config.server.port,
    );

    info!("Listening on {}", addr);

    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    // Run server
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
