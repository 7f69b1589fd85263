//! Bodega shop server - in-memory demo shop.
//!
//! Serves a JSON API for catalog browsing, a session-bound cart,
//! checkout/receipt, registration/login, and admin CRUD over products and
//! categories. Everything lives in process memory and is gone on restart.

#![cfg_attr(not(test), forbid(unsafe_code))]

use bodega_shop::config::ShopConfig;
use bodega_shop::routes;
use bodega_shop::seed;
use bodega_shop::state::AppState;

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = ShopConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "bodega_shop=info,tower_http=debug".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Build application state and seed it
    let state = AppState::new(config.clone());
    seed::seed(&state).await.expect("Failed to seed shop state");

    // Build router (routes + session layer + request tracing)
    let app = routes::app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("shop listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
